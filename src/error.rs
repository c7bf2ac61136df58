use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {path}")]
    ConfigYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON config: {path}")]
    ConfigJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported config format: {path} (extension: {extension})")]
    UnsupportedConfigFormat { path: String, extension: String },

    #[error("Failed to write report: {path}")]
    WriteReport {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_read() {
        let err = DashboardError::ConfigRead {
            path: "/etc/secdash.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config file: /etc/secdash.yaml"
        );
    }

    #[test]
    fn test_error_display_unsupported_format() {
        let err = DashboardError::UnsupportedConfigFormat {
            path: "layout.ini".to_string(),
            extension: "ini".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported config format: layout.ini (extension: ini)"
        );
    }

    #[test]
    fn test_error_display_write_report() {
        let err = DashboardError::WriteReport {
            path: "out.html".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write report: out.html");
    }
}
