//! src/store/fallback.rs
use std::collections::HashSet;
use std::sync::Mutex;

/// In-process set of waitlist emails, used when the primary store can't be.
///
/// Contents live as long as the process does and are lost on restart.
#[derive(Debug, Default)]
pub struct FallbackStore {
    emails: Mutex<HashSet<String>>,
}

impl FallbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `email`. Duplicates are absorbed and still count as success.
    ///
    /// Returns `false` only when the set can't be reached (poisoned lock).
    #[tracing::instrument(name = "Adding email to the fallback store", skip(self))]
    pub fn add(&self, email: &str) -> bool {
        match self.emails.lock() {
            Ok(mut emails) => {
                if !emails.insert(email.to_owned()) {
                    tracing::info!("Email was already on the fallback waitlist");
                }
                true
            }
            Err(e) => {
                tracing::error!(error.message = %e, "Error adding email to waitlist");
                false
            }
        }
    }

    pub fn list(&self) -> Vec<String> {
        match self.emails.lock() {
            Ok(emails) => emails.iter().cloned().collect(),
            Err(e) => {
                tracing::error!(error.message = %e, "Error reading waitlist data");
                Vec::new()
            }
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails
            .lock()
            .map(|emails| emails.contains(email))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.emails.lock().map(|emails| emails.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics while holding the lock, leaving the set unreachable.
    #[cfg(test)]
    pub(crate) fn poison_for_tests(&self) {
        let _guard = self.emails.lock();
        panic!("poisoning the fallback store");
    }
}
