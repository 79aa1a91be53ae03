use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum YukangError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("advice.timeout_secs out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: advice.timeout_secs out of range"
        );
    }

    #[test]
    fn yukang_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: YukangError = config_err.into();
        assert!(matches!(err, YukangError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn yukang_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
        let err: YukangError = io_err.into();
        assert!(matches!(err, YukangError::Io(_)));
        assert!(err.to_string().contains("stdin closed"));
    }

    #[test]
    fn yukang_error_other_variants() {
        let err = YukangError::Ai("client not built".into());
        assert_eq!(err.to_string(), "ai error: client not built");
    }
}
