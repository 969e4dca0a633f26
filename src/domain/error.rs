//! Domain error types.

/// Top-level error type for etherealtrades.
#[derive(Debug, thiserror::Error)]
pub enum EtherealTradesError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&EtherealTradesError> for std::process::ExitCode {
    fn from(err: &EtherealTradesError) -> Self {
        let code: u8 = match err {
            EtherealTradesError::Io(_) => 1,
            EtherealTradesError::ConfigParse { .. } | EtherealTradesError::ConfigInvalid { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::ExitCode;

    fn exit_code(err: &EtherealTradesError) -> String {
        format!("{:?}", ExitCode::from(err))
    }

    fn expected(code: u8) -> String {
        format!("{:?}", ExitCode::from(code))
    }

    #[test]
    fn config_errors_map_to_exit_code_two() {
        let parse = EtherealTradesError::ConfigParse {
            file: "a.ini".to_string(),
            reason: "bad".to_string(),
        };
        let invalid = EtherealTradesError::ConfigInvalid {
            section: "logging".to_string(),
            key: "level".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(exit_code(&parse), expected(2));
        assert_eq!(exit_code(&invalid), expected(2));
    }

    #[test]
    fn io_error_maps_to_exit_code_one() {
        let err = EtherealTradesError::from(std::io::Error::other("disk"));
        assert_eq!(exit_code(&err), expected(1));
    }

    #[test]
    fn config_invalid_message_names_section_and_key() {
        let err = EtherealTradesError::ConfigInvalid {
            section: "logging".to_string(),
            key: "level".to_string(),
            reason: "unknown level 'loud'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [logging] level: unknown level 'loud'"
        );
    }
}
