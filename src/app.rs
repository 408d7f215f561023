//! Launch Feed App
//!
//! Main application component: search box, launch list, loading/end markers
//! and the scroll sentinel that pulls in the next page.

use leptos::prelude::*;
use leptos_sentinel::Sentinel;

use crate::components::{LaunchList, SearchBox, Spinner};
use crate::config::FeedConfig;
use crate::context::FeedContext;

#[component]
pub fn App() -> impl IntoView {
    let feed = FeedContext::new(&FeedConfig::from_build_env());

    // Provide context to all children
    provide_context(feed);

    // Load first page on mount
    Effect::new(move |_| feed.start());

    // Re-observe the sentinel only after a reset or an appended page
    let rebind = Memo::new(move |_| feed.rebind_key());

    view! {
        <div class="container">
            <div class="main__wrapper">
                <SearchBox />

                <div class="fade">
                    <LaunchList />
                </div>

                <Show when=move || feed.is_loading()>
                    <Spinner />
                </Show>
                <Show when=move || feed.is_exhausted()>
                    <p class="max-reached">"End of the list."</p>
                </Show>

                <Sentinel rebind=rebind on_visible=move |_: ()| feed.load_more() />
            </div>
        </div>
    }
}
