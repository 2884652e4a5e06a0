// =============================================================================
// Marketing Web - Build-time Configuration
// =============================================================================
// Table of Contents:
// 1. Form Contract
// 2. App Config
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Form Contract
// -----------------------------------------------------------------------------

/// Action path of the contact form. The page shell locates the form by it.
pub const FORM_ACTION: &str = "/contact";

/// HTTP method the form declares.
pub const FORM_METHOD: &str = "POST";

/// Charset the form declares.
pub const FORM_CHARSET: &str = "UTF-8";

// -----------------------------------------------------------------------------
// 2. App Config
// -----------------------------------------------------------------------------

/// Deployment environment baked in at build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    /// Parse the `ENVIRONMENT` value. Unknown values count as production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub form_action: &'static str,
    pub form_method: &'static str,
    pub form_charset: &'static str,
}

impl AppConfig {
    /// Read configuration from the build environment.
    pub fn from_env() -> Self {
        let environment = option_env!("ENVIRONMENT")
            .map(Environment::parse)
            .unwrap_or_default();
        Self::for_environment(environment)
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            form_action: FORM_ACTION,
            form_method: FORM_METHOD,
            form_charset: FORM_CHARSET,
        }
    }

    /// Console log level for this build.
    pub fn log_level(&self) -> log::Level {
        match self.environment {
            Environment::Development => log::Level::Debug,
            Environment::Staging | Environment::Production => log::Level::Info,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse(" Dev "), Environment::Development);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("anything"), Environment::Production);
    }

    #[test]
    fn test_log_level() {
        let dev = AppConfig::for_environment(Environment::Development);
        let prod = AppConfig::for_environment(Environment::Production);

        assert_eq!(dev.log_level(), log::Level::Debug);
        assert_eq!(prod.log_level(), log::Level::Info);
    }

    #[test]
    fn test_form_contract() {
        let config = AppConfig::for_environment(Environment::Production);
        assert_eq!(config.form_action, "/contact");
        assert_eq!(config.form_method, "POST");
        assert_eq!(config.form_charset, "UTF-8");
    }
}
