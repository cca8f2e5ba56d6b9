//! Application state for the Tutor Match Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::matching::ScoreWeights;
use crate::store::ProfileStore;

/// Shared application state.
///
/// Holds the record store and the composite weights used for every
/// ranking.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ProfileStore>,
    weights: ScoreWeights,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: ProfileStore, weights: ScoreWeights) -> Self {
        Self {
            store: Arc::new(store),
            weights,
        }
    }

    /// Returns the record store.
    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Returns the composite weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
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

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let state = AppState::new(ProfileStore::default(), ScoreWeights::default());
        let clone = state.clone();
        clone
            .store()
            .insert_students(vec![crate::models::Student::new("Léa", vec![], "", vec![])])
            .await;
        assert_eq!(state.store().students().await.len(), 1);
    }
}
