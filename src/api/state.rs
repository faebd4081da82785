//! Application state for the Payslip Query Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::files::FileStore;
use crate::store::PayslipStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// immutable record set and the document file store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payslip record set.
    store: Arc<PayslipStore>,
    /// The document file store.
    files: Arc<FileStore>,
}

impl AppState {
    /// Creates a new application state from the loaded store and file
    /// service.
    pub fn new(store: PayslipStore, files: FileStore) -> Self {
        Self {
            store: Arc::new(store),
            files: Arc::new(files),
        }
    }

    /// Returns a reference to the payslip store.
    pub fn store(&self) -> &PayslipStore {
        &self.store
    }

    /// Returns a reference to the file store.
    pub fn files(&self) -> &FileStore {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
