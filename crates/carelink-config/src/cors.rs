use crate::env;

/// CORS configuration
///
/// The gateway serves browser frontends directly, so the default allows
/// any origin. Methods and headers are always unrestricted.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    pub origins: AnyOrArray,
}

impl CorsConfig {
    pub(crate) fn from_env() -> Self {
        Self {
            origins: env::var("CARELINK_CORS_ORIGINS").map_or(AnyOrArray::Any, |raw| AnyOrArray::parse(&raw)),
        }
    }
}

/// Either a wildcard "*" or explicit list of values
#[derive(Debug, Clone)]
pub enum AnyOrArray {
    /// Match any value
    Any,
    /// Explicit list
    List(Vec<String>),
}

impl Default for AnyOrArray {
    fn default() -> Self {
        Self::Any
    }
}

impl AnyOrArray {
    /// Parse a comma-separated value; any "*" entry collapses to `Any`
    pub fn parse(raw: &str) -> Self {
        let mut values = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if entry == "*" {
                return Self::Any;
            }
            if !entry.is_empty() {
                values.push(entry.to_owned());
            }
        }
        Self::List(values)
    }
}
