use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::get,
};
use tower_http::trace::TraceLayer;

use super::schema::QuillSchema;

async fn graphql_handler(State(schema): State<QuillSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn router(schema: QuillSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/", get(|| async { "ok" }))
        .with_state(schema)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

pub async fn run_server(schema: QuillSchema, host: &str, port: u16) -> std::io::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "GraphQL server listening");
    axum::serve(listener, router(schema)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuillConfig;
    use crate::graphql::build_schema;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(build_schema(
            QuillConfig::default(),
            temp_dir.path().to_path_buf(),
        ));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_graphql_request() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(build_schema(
            QuillConfig::default(),
            temp_dir.path().to_path_buf(),
        ));

        let request = Request::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"query":"{ stats(id: \"author-none\") { draft published } }"}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["stats"]["draft"], 0);
        assert_eq!(json["data"]["stats"]["published"], 0);
    }

    #[tokio::test]
    async fn test_graphiql_page() {
        let temp_dir = TempDir::new().unwrap();
        let app = router(build_schema(
            QuillConfig::default(),
            temp_dir.path().to_path_buf(),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/graphql")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
