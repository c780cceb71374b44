//! Front matter detection and parsing.
//!
//! ```text
//! ---                      +++
//! title: Hello             title = "Hello"
//! categories: [Life]       categories = ["Life"]
//! ---                      +++
//! body...                  body...
//! ```

use super::PostMeta;
use super::error::PostError;
use std::path::Path;

/// Front matter syntax, chosen by the opening fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontMatterFormat {
    /// `---` fenced YAML
    Yaml,
    /// `+++` fenced TOML
    Toml,
}

impl FrontMatterFormat {
    const fn fence(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split `content` into front matter and body.
///
/// Returns `None` when the file does not open with a fence line or the
/// fence is never closed.
pub fn split_front_matter(content: &str) -> Option<(FrontMatterFormat, &str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let (first, rest) = content.split_once('\n')?;

    let format = match first.trim_end() {
        "---" => FrontMatterFormat::Yaml,
        "+++" => FrontMatterFormat::Toml,
        _ => return None,
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == format.fence() {
            let raw = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches(['\r', '\n']);
            return Some((format, raw, body));
        }
        offset += line.len();
    }
    None
}

/// Strip front matter if present, returning the body.
pub fn strip_front_matter(content: &str) -> &str {
    split_front_matter(content).map_or(content, |(_, _, body)| body)
}

/// Parse front matter for the post at `path`.
pub fn parse_front_matter(
    format: FrontMatterFormat,
    raw: &str,
    path: &Path,
) -> Result<PostMeta, PostError> {
    if raw.trim().is_empty() {
        return Ok(PostMeta::default());
    }
    match format {
        FrontMatterFormat::Yaml => {
            serde_yaml_ng::from_str(raw).map_err(|e| PostError::Yaml(path.to_path_buf(), e))
        }
        FrontMatterFormat::Toml => {
            toml::from_str(raw).map_err(|e| PostError::Toml(path.to_path_buf(), e))
        }
    }
}
