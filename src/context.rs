//! Feed Context
//!
//! Shared handle provided via Leptos Context API. Owns the store, the HTTP
//! client and the search debouncer, and runs the fetches the reducer asks for.

use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::LaunchClient;
use crate::config::FeedConfig;
use crate::debounce::{Debouncer, TimeoutScheduler};
use crate::feed::{FeedEvent, FetchRequest};
use crate::models::LaunchRecord;
use crate::store::{store_apply, store_generation, store_toggle_expanded, AppState, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct FeedContext {
    store: AppStore,
    client: StoredValue<LaunchClient, LocalStorage>,
    search: StoredValue<Debouncer<TimeoutScheduler>, LocalStorage>,
}

impl FeedContext {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            store: Store::new(AppState::default()),
            client: StoredValue::new_local(LaunchClient::new(config)),
            search: StoredValue::new_local(Debouncer::new(TimeoutScheduler, config.search_debounce)),
        }
    }

    pub fn dispatch(&self, event: FeedEvent) {
        if let Some(request) = store_apply(&self.store, event) {
            self.run(request);
        }
    }

    fn run(&self, request: FetchRequest) {
        let ctx = *self;
        let client = self.client.get_value();
        log!(
            "[FEED] Fetching page {} (offset {}) for {:?}",
            request.page,
            request.offset(client.page_size()),
            request.search
        );

        spawn_local(async move {
            let FetchRequest { generation, page, search } = request;
            let event = match client.fetch_page(page, &search).await {
                Ok(records) => {
                    log!("[FEED] Loaded {} launches on page {}", records.len(), page);
                    FeedEvent::PageLoaded { generation, page, records }
                }
                Err(e) => {
                    error!("[API] Error fetching launches: {}", e);
                    FeedEvent::PageFailed { generation, page }
                }
            };

            if generation != store_generation(&ctx.store) {
                log!("[FEED] Discarding page {} for superseded search {:?}", page, search);
            }
            ctx.dispatch(event);
        });
    }

    /// Initial load
    pub fn start(&self) {
        self.dispatch(FeedEvent::Started);
    }

    /// Raw keystroke; committed once typing pauses
    pub fn search_input(&self, value: String) {
        let ctx = *self;
        self.search.with_value(|debouncer| {
            debouncer.call(move || ctx.dispatch(FeedEvent::SearchCommitted(value)));
        });
    }

    pub fn load_more(&self) {
        self.dispatch(FeedEvent::AdvanceRequested);
    }

    pub fn toggle_expanded(&self, id: u32) {
        store_toggle_expanded(&self.store, id);
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.store.expanded().get() == Some(id)
    }

    pub fn records(&self) -> Vec<LaunchRecord> {
        self.store.feed().read().records().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.store.feed().read().is_loading()
    }

    pub fn is_exhausted(&self) -> bool {
        self.store.feed().read().is_exhausted()
    }

    pub fn shows_no_data(&self) -> bool {
        self.store.feed().read().shows_no_data()
    }

    pub fn rebind_key(&self) -> u64 {
        self.store.feed().read().rebind_key()
    }
}

/// Get the feed context provided by `App`
pub fn use_feed() -> FeedContext {
    use_context::<FeedContext>().expect("FeedContext should be provided")
}
