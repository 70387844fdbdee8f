//! src/waitlist.rs
use crate::configuration::Settings;
use crate::domain::{EmailError, SubmissionResult, WaitlistEmail};
use crate::routes::{error_chain_fmt, PageCache};
use crate::store::{FallbackStore, PrimaryClient, PrimaryStore};

/// Which store ended up holding a submitted email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    Primary,
    Fallback,
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Invalid waitlist email")]
    ValidationError(#[from] EmailError),
    #[error("Failed to store email")]
    StorageError(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubscribeError {
    pub fn submission_result(&self) -> SubmissionResult {
        match self {
            SubscribeError::ValidationError(_) => SubmissionResult::rejected(),
            SubscribeError::StorageError(_) => SubmissionResult::failed(),
        }
    }
}

pub fn submission_result(result: &Result<Stored, SubscribeError>) -> SubmissionResult {
    match result {
        Ok(_) => SubmissionResult::accepted(),
        Err(e) => e.submission_result(),
    }
}

/// Everything a waitlist signup touches, owned in one place and shared
/// across workers.
#[derive(Debug)]
pub struct Waitlist {
    primary: PrimaryStore,
    fallback: FallbackStore,
    page_cache: PageCache,
}

impl Waitlist {
    pub fn new(primary: PrimaryStore, fallback: FallbackStore) -> Self {
        Self {
            primary,
            fallback,
            page_cache: PageCache::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let primary = PrimaryStore::new(
            settings.credentials.clone(),
            settings.primary_store.clone(),
        );
        Self::new(primary, FallbackStore::new())
    }

    pub fn fallback(&self) -> &FallbackStore {
        &self.fallback
    }

    pub fn page_cache(&self) -> &PageCache {
        &self.page_cache
    }

    #[tracing::instrument(
        name = "Adding email to the waitlist",
        skip(self, email),
        fields(waitlist_email = %email)
    )]
    pub async fn submit(&self, email: String) -> Result<Stored, SubscribeError> {
        let email = WaitlistEmail::parse(email)?;

        let stored = if self.store_in_primary(&email).await {
            Stored::Primary
        } else {
            self.store_in_fallback(&email)?
        };

        self.page_cache.invalidate();
        Ok(stored)
    }

    async fn store_in_primary(&self, email: &WaitlistEmail) -> bool {
        let client = match self.primary.resolve() {
            PrimaryClient::Available(client) => client,
            PrimaryClient::Unavailable(e) => {
                tracing::info!(error.message = %e, "Primary store unavailable, using fallback");
                return false;
            }
        };

        match client.insert(email).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Primary store insert failed, using fallback"
                );
                false
            }
        }
    }

    fn store_in_fallback(&self, email: &WaitlistEmail) -> Result<Stored, SubscribeError> {
        if self.fallback.add(email.as_ref()) {
            Ok(Stored::Fallback)
        } else {
            Err(SubscribeError::StorageError(anyhow::anyhow!(
                "Failed to store {} in the fallback store",
                email
            )))
        }
    }
}
