//! Exit codes for the CLI

/// Success
pub const SUCCESS: i32 = 0;

/// General error, including transport and protocol failures
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// The endpoint answered without a usable release id
pub const VALIDATION_ERROR: i32 = 5;

/// Map a workflow error to the process exit code
pub fn for_error(error: &herald_core::HeraldError) -> i32 {
    use herald_core::HeraldError;

    match error {
        HeraldError::Config(_) => CONFIG_ERROR,
        HeraldError::MissingReleaseId { .. } => VALIDATION_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{ConfigError, HeraldError, Setting};

    #[test]
    fn test_exit_codes_for_errors() {
        let config = HeraldError::Config(ConfigError::Missing(vec![Setting::User]));
        assert_eq!(for_error(&config), CONFIG_ERROR);

        let missing_id = HeraldError::MissingReleaseId {
            response: "{\"id\":null}".to_string(),
        };
        assert_eq!(for_error(&missing_id), VALIDATION_ERROR);

        let api = HeraldError::Api(herald_api::ApiError::RequestFailed {
            status: 500,
            body: String::new(),
        });
        assert_eq!(for_error(&api), ERROR);
        assert_ne!(for_error(&api), SUCCESS);
    }
}
