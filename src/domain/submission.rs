//! src/domain/submission.rs
use serde::Serialize;

/// What the caller of a waitlist submission gets back.
///
/// Serializes to `{"success": .., "message": .., "showModal": ..}` with
/// `showModal` left out unless the caller should celebrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(rename = "showModal", skip_serializing_if = "Option::is_none")]
    pub show_modal: Option<bool>,
}

impl SubmissionResult {
    pub const ACCEPTED: &'static str = "Thank you for joining our waitlist!";
    pub const REJECTED: &'static str = "Please enter a valid email address";
    pub const FAILED: &'static str = "Something went wrong. Please try again later.";

    pub fn accepted() -> Self {
        Self {
            success: true,
            message: Self::ACCEPTED.into(),
            show_modal: Some(true),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            message: Self::REJECTED.into(),
            show_modal: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: Self::FAILED.into(),
            show_modal: None,
        }
    }

    pub fn show_modal(&self) -> bool {
        self.show_modal.unwrap_or(false)
    }
}
