//! Post loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("cannot read post `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no front matter")]
    MissingFrontMatter(PathBuf),

    #[error("invalid YAML front matter in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml_ng::Error),

    #[error("invalid TOML front matter in `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("`{0}` has no title")]
    MissingTitle(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_post_error_display() {
        let err = PostError::Io(
            PathBuf::from("posts/a.md"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("posts/a.md"));

        let err = PostError::MissingTitle(PathBuf::from("b.md"));
        assert_eq!(err.to_string(), "`b.md` has no title");
    }
}
