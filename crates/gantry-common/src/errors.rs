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
pub enum GantryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("policy error: {0}")]
    Policy(String),

    #[error("{0}")]
    Other(String),
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

        let err = ConfigError::ValidationError("bad pattern".into());
        assert_eq!(err.to_string(), "config validation error: bad pattern");
    }

    #[test]
    fn gantry_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GantryError = config_err.into();
        assert!(matches!(err, GantryError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn gantry_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GantryError = io_err.into();
        assert!(matches!(err, GantryError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn gantry_error_other_variants() {
        let err = GantryError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = GantryError::Policy("bad allowlist".into());
        assert_eq!(err.to_string(), "policy error: bad allowlist");

        let err = GantryError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
