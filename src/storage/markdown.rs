use crate::error::{QuillError, Result};
use crate::model::Record;

const TOML_DELIMITER: &str = "+++";
const YAML_DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    Toml,
    Yaml,
}

impl FrontmatterFormat {
    fn delimiter(self) -> &'static str {
        match self {
            FrontmatterFormat::Toml => TOML_DELIMITER,
            FrontmatterFormat::Yaml => YAML_DELIMITER,
        }
    }
}

/// Detect the frontmatter format from the opening delimiter.
pub fn detect_format(content: &str) -> Option<FrontmatterFormat> {
    let content = content.trim_start();
    if content.starts_with(TOML_DELIMITER) {
        Some(FrontmatterFormat::Toml)
    } else if content.starts_with(YAML_DELIMITER) {
        Some(FrontmatterFormat::Yaml)
    } else {
        None
    }
}

pub fn parse_markdown<R: Record>(content: &str) -> Result<R> {
    let format = detect_format(content)
        .ok_or_else(|| QuillError::Parse("Missing frontmatter delimiter".to_string()))?;
    parse_markdown_with_format(content, format)
}

pub fn parse_markdown_with_format<R: Record>(content: &str, format: FrontmatterFormat) -> Result<R> {
    let content = content.trim();
    let delimiter = format.delimiter();

    let after_first = content
        .strip_prefix(delimiter)
        .ok_or_else(|| QuillError::Parse(format!("Expected '{}' frontmatter", delimiter)))?;
    let end_index = after_first
        .find(&format!("\n{}", delimiter))
        .ok_or_else(|| QuillError::Parse("Missing closing frontmatter delimiter".to_string()))?;

    let frontmatter = after_first[..end_index].trim();
    let body = after_first[end_index + 1 + delimiter.len()..]
        .trim()
        .to_string();

    let mut record: R = match format {
        FrontmatterFormat::Toml => toml::from_str(frontmatter)?,
        FrontmatterFormat::Yaml => serde_yaml::from_str(frontmatter)?,
    };
    record.set_body(body);

    Ok(record)
}

pub fn render_markdown_with_format<R: Record>(record: &R, format: FrontmatterFormat) -> Result<String> {
    let frontmatter = match format {
        FrontmatterFormat::Toml => toml::to_string(record)?,
        FrontmatterFormat::Yaml => serde_yaml::to_string(record)?,
    };
    let delimiter = format.delimiter();

    let mut output = String::new();
    output.push_str(delimiter);
    output.push('\n');
    output.push_str(frontmatter.trim());
    output.push('\n');
    output.push_str(delimiter);
    output.push('\n');

    let body = record.body();
    if !body.is_empty() {
        output.push('\n');
        output.push_str(body);
        output.push('\n');
    }

    Ok(output)
}
