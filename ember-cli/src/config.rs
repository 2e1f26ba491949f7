//! Loading lexer dialects from JSON files.
//! 从 JSON 文件加载词法方言。

use ember_lexer::LexerConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a dialect file.
/// 加载方言文件时可能出现的错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the lexer configuration, falling back to the default language tables
/// when no file is given. Missing fields take their default values.
/// 加载词法配置；未指定文件时使用默认语言表，缺省字段取默认值。
pub fn load(path: Option<&Path>) -> Result<LexerConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(LexerConfig::default());
    };

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded lexer config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_lexer::EscapeMode;
    use std::io::Write;

    #[test]
    fn test_load_default() {
        assert_eq!(load(None).unwrap(), LexerConfig::default());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "escape_mode": "keep", "strict_strings": true }}"#).unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.escape_mode, EscapeMode::Keep);
        assert!(config.strict_strings);
        assert!(config.is_keyword("let"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("missing.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
