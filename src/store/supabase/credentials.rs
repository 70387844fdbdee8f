//! src/store/supabase/credentials.rs
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::PrimaryStoreError;

pub const DEFAULT_PREFIX: &str = "SUPABASE_";

/// The two connection credentials, as found. Either may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseCredentials {
    pub url: Option<String>,
    pub service_role_key: Option<Secret<String>>,
}

/// Credentials that passed the shape checks.
#[derive(Debug, Clone)]
pub struct ValidCredentials {
    pub url: String,
    pub service_role_key: Secret<String>,
}

impl SupabaseCredentials {
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            service_role_key: Some(Secret::new(service_role_key.into())),
        }
    }

    pub fn validate(self) -> Result<ValidCredentials, PrimaryStoreError> {
        let url = self.url.ok_or(PrimaryStoreError::MissingUrl)?;
        if !url.starts_with("http") {
            return Err(PrimaryStoreError::InvalidUrl(url));
        }

        let service_role_key = self
            .service_role_key
            .ok_or(PrimaryStoreError::MissingServiceRoleKey)?;
        if service_role_key.expose_secret().is_empty() {
            return Err(PrimaryStoreError::MissingServiceRoleKey);
        }

        Ok(ValidCredentials {
            url,
            service_role_key,
        })
    }
}

/// Where the primary store credentials are read from on each resolution.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Process environment variables `<prefix>URL` and `<prefix>SERVICE_ROLE_KEY`.
    Environment { prefix: String },
    Fixed(SupabaseCredentials),
}

impl Default for CredentialSource {
    fn default() -> Self {
        Self::Environment {
            prefix: DEFAULT_PREFIX.into(),
        }
    }
}

impl CredentialSource {
    pub fn disabled() -> Self {
        Self::Fixed(SupabaseCredentials::default())
    }

    pub fn load(&self) -> Result<SupabaseCredentials, PrimaryStoreError> {
        match self {
            Self::Environment { prefix } => envy::prefixed(prefix.as_str())
                .from_env::<SupabaseCredentials>()
                .map_err(PrimaryStoreError::Environment),
            Self::Fixed(credentials) => Ok(credentials.clone()),
        }
    }
}
