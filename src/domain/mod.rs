//! src/domain/mod.rs
mod submission;
pub use submission::SubmissionResult;

mod waitlist_email;
pub use waitlist_email::{EmailError, WaitlistEmail};
