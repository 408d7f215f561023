//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::feed::{toggle_expanded, FeedEvent, FeedState, FetchRequest};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Records, pagination phase and committed search term
    pub feed: FeedState,
    /// Flight number of the open details panel
    pub expanded: Option<u32>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Run an event through the feed reducer, returning the fetch it asks for
pub fn store_apply(store: &AppStore, event: FeedEvent) -> Option<FetchRequest> {
    store.feed().write().apply(event)
}

/// Open a details panel, closing any other; toggling the open one closes it
pub fn store_toggle_expanded(store: &AppStore, id: u32) {
    store.expanded().update(|current| *current = toggle_expanded(*current, id));
}

/// Generation of the outstanding request, without subscribing
pub fn store_generation(store: &AppStore) -> u64 {
    store.feed().read_untracked().generation()
}
