//! Search Box Component
//!
//! Mission-name filter. Keystrokes are debounced before the feed resets.

use leptos::prelude::*;

use crate::context::use_feed;

#[component]
pub fn SearchBox() -> impl IntoView {
    let feed = use_feed();

    view! {
        <input
            type="search"
            class="search"
            placeholder="Search..."
            autocomplete="off"
            on:input=move |ev| feed.search_input(event_target_value(&ev))
        />
    }
}
