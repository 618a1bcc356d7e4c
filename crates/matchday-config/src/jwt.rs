use crate::{env_opt, env_or};

/// Settings used to verify bearer tokens issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtConfig {
    /// Shared HS256 secret
    pub secret: String,
    /// Expected `iss` claim, unchecked when `None`
    pub issuer: Option<String>,
    /// Expected `aud` claim, unchecked when `None`
    pub audience: Option<String>,
    /// Clock skew tolerated on `exp`, in seconds
    pub leeway_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-in-production".to_string(),
            issuer: None,
            audience: None,
            leeway_secs: 30,
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_opt("JWT_SECRET").unwrap_or(defaults.secret),
            issuer: env_opt("JWT_ISSUER"),
            audience: env_opt("JWT_AUDIENCE"),
            leeway_secs: env_or("JWT_LEEWAY_SECS", defaults.leeway_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JwtConfig::default();
        assert!(config.issuer.is_none());
        assert!(config.audience.is_none());
        assert_eq!(config.leeway_secs, 30);
    }
}
