use super::types::ExtractorError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Process exit status when this error ends the run.
    pub exit_code: i32,
}

impl ExtractorError {
    /// Classify this error into a stable label and the exit status it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ExtractorError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            // Config files are the only YAML/JSON documents parsed into typed
            // structs outside of API responses.
            ExtractorError::Yaml(_) => ErrorClassification {
                error_type: "ConfigParseError",
                exit_code: 2,
            },
            ExtractorError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 1,
            },
            ExtractorError::Fetch(_) => ErrorClassification {
                error_type: "FetchError",
                exit_code: 1,
            },
            ExtractorError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            ExtractorError::Csv(_) => ErrorClassification {
                error_type: "CsvError",
                exit_code: 1,
            },
            ExtractorError::Interrupted => ErrorClassification {
                error_type: "Interrupted",
                exit_code: 130,
            },
            ExtractorError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchError;

    #[test]
    fn test_config_error_exit_code() {
        let err = ExtractorError::Config("missing token".into());
        let class = err.classify();
        assert_eq!(class.error_type, "ConfigError");
        assert_eq!(class.exit_code, 2);
    }

    #[test]
    fn test_yaml_error_is_config_failure() {
        let err: ExtractorError = serde_yaml::from_str::<u32>("[not, a, number]")
            .unwrap_err()
            .into();
        assert_eq!(err.classify().exit_code, 2);
    }

    #[test]
    fn test_interrupted_exit_code() {
        assert_eq!(ExtractorError::Interrupted.classify().exit_code, 130);
    }

    #[test]
    fn test_fetch_error_exit_code() {
        let err = ExtractorError::Fetch(FetchError::Status {
            endpoint: "/api/rest/active-reports".into(),
            status: 503,
        });
        let class = err.classify();
        assert_eq!(class.error_type, "FetchError");
        assert_eq!(class.exit_code, 1);
    }

    #[test]
    fn test_fetch_error_kind_labels() {
        let timeout = FetchError::Timeout { endpoint: "/a".into(), timeout_secs: 30 };
        let decode = FetchError::Decode { endpoint: "/b".into(), reason: "eof".into() };
        assert_eq!(timeout.kind(), "timeout");
        assert_eq!(decode.kind(), "decode");
        assert_eq!(decode.endpoint(), "/b");
    }
}
