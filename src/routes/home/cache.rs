//! src/routes/home/cache.rs
use std::sync::{Arc, RwLock};

/// Rendered landing page, kept until a waitlist signup invalidates it.
#[derive(Debug, Default)]
pub struct PageCache {
    page: RwLock<Option<Arc<String>>>,
}

impl PageCache {
    pub fn get_or_render<F>(&self, render: F) -> Arc<String>
    where
        F: FnOnce() -> String,
    {
        if let Ok(page) = self.page.read() {
            if let Some(page) = page.as_ref() {
                return Arc::clone(page);
            }
        }

        let rendered = Arc::new(render());
        if let Ok(mut page) = self.page.write() {
            *page = Some(Arc::clone(&rendered));
        }
        rendered
    }

    pub fn invalidate(&self) {
        match self.page.write() {
            Ok(mut page) => *page = None,
            Err(e) => tracing::warn!(error.message = %e, "Failed to invalidate the page cache"),
        }
    }

    pub fn is_cached(&self) -> bool {
        self.page.read().map(|page| page.is_some()).unwrap_or(false)
    }
}
