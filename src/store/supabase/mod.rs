//! src/store/supabase/mod.rs
use crate::configuration::PrimaryStoreSettings;
use once_cell::sync::OnceCell;
use reqwest::Client;

mod client;
pub use client::{PrimaryWriteError, SupabaseClient, WaitlistRecord};

mod credentials;
pub use credentials::{CredentialSource, SupabaseCredentials, ValidCredentials};

#[derive(thiserror::Error, Debug)]
pub enum PrimaryStoreError {
    #[error("Primary store URL is not set")]
    MissingUrl,
    #[error("Primary store URL does not look like an HTTP(S) URL: {0}")]
    InvalidUrl(String),
    #[error("Primary store service role key is missing or empty")]
    MissingServiceRoleKey,
    #[error("Failed to read primary store credentials from the environment")]
    Environment(#[source] envy::Error),
    #[error("Failed to build the primary store HTTP client")]
    Build(#[source] reqwest::Error),
}

/// Either a usable client, or why there isn't one right now.
#[derive(Debug)]
pub enum PrimaryClient<'a> {
    Available(&'a SupabaseClient),
    Unavailable(PrimaryStoreError),
}

/// Lazily built handle on the hosted waitlist table.
///
/// A client that builds successfully is kept for the life of the process.
/// A failed build is not remembered, so the next `resolve` reads the
/// credentials again and retries.
#[derive(Debug)]
pub struct PrimaryStore {
    source: CredentialSource,
    settings: PrimaryStoreSettings,
    client: OnceCell<SupabaseClient>,
}

impl PrimaryStore {
    pub fn new(source: CredentialSource, settings: PrimaryStoreSettings) -> Self {
        Self {
            source,
            settings,
            client: OnceCell::new(),
        }
    }

    pub fn disabled() -> Self {
        Self::new(CredentialSource::disabled(), PrimaryStoreSettings::default())
    }

    pub fn resolve(&self) -> PrimaryClient<'_> {
        match self.client.get_or_try_init(|| self.build_client()) {
            Ok(client) => PrimaryClient::Available(client),
            Err(e) => PrimaryClient::Unavailable(e),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    #[tracing::instrument(name = "Building the primary store client", skip(self))]
    fn build_client(&self) -> Result<SupabaseClient, PrimaryStoreError> {
        let ValidCredentials {
            url,
            service_role_key,
        } = self.source.load()?.validate()?;

        let http_client = Client::builder()
            .timeout(self.settings.timeout())
            .build()
            .map_err(PrimaryStoreError::Build)?;

        Ok(SupabaseClient {
            http_client,
            url,
            service_role_key,
            table: self.settings.table.clone(),
        })
    }
}
