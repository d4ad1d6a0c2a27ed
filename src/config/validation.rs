//! Settings validation.
//!
//! Runs before a demo session starts. All problems are reported at once.

use thiserror::Error;

use crate::config::schema::DemoSettings;

/// A single semantic problem with the settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid host address '{0}'")]
    InvalidHost(String),

    #[error("grace period must be greater than zero")]
    ZeroGracePeriod,

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check the settings, collecting every error.
pub fn validate_settings(settings: &DemoSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.bind_address().is_none() {
        errors.push(ValidationError::InvalidHost(settings.host.clone()));
    }
    if settings.grace_period.is_zero() {
        errors.push(ValidationError::ZeroGracePeriod);
    }
    if settings.request_timeout.is_zero() {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_settings(&DemoSettings::default()), Ok(()));
    }

    #[test]
    fn test_all_errors_reported() {
        let settings = DemoSettings {
            host: "localhost:80".into(),
            grace_period: Duration::ZERO,
            request_timeout: Duration::ZERO,
            ..DemoSettings::default()
        };

        let errors = validate_settings(&settings).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidHost("localhost:80".into()),
                ValidationError::ZeroGracePeriod,
                ValidationError::ZeroRequestTimeout,
            ]
        );
    }

    #[test]
    fn test_ipv6_host() {
        let settings = DemoSettings { host: "::1".into(), ..DemoSettings::default() };
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.bind_address().unwrap().to_string(), "[::1]:8081");
    }
}
