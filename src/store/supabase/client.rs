//! src/store/supabase/client.rs
use crate::domain::WaitlistEmail;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum PrimaryWriteError {
    #[error("Failed to reach the primary store")]
    Request(#[from] reqwest::Error),
    #[error("Primary store rejected the insert ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

#[derive(Debug, Serialize)]
pub struct WaitlistRecord<'a> {
    pub email: &'a str,
    pub joined_at: String,
}

impl<'a> WaitlistRecord<'a> {
    pub fn joining_now(email: &'a WaitlistEmail) -> Self {
        Self {
            email: email.as_ref(),
            joined_at: Utc::now().to_rfc3339(),
        }
    }
}

/// REST handle on a Supabase project, scoped to one table.
#[derive(Debug)]
pub struct SupabaseClient {
    pub http_client: Client,
    pub url: String,
    pub service_role_key: Secret<String>,
    pub table: String,
}

impl SupabaseClient {
    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }

    #[tracing::instrument(name = "Inserting email into the primary store", skip(self))]
    pub async fn insert(&self, email: &WaitlistEmail) -> Result<(), PrimaryWriteError> {
        let rows = [WaitlistRecord::joining_now(email)];

        let response = self
            .http_client
            .post(self.table_url())
            .header("apikey", self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .header("content-type", "application/json")
            .header("prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PrimaryWriteError::Rejected { status, body })
    }
}
