//! src/store/mod.rs
mod fallback;
pub use fallback::FallbackStore;

pub mod supabase;
pub use supabase::{PrimaryClient, PrimaryStore};
