//! Launch List Component
//!
//! Renders loaded launches in arrival order.

use leptos::prelude::*;

use crate::components::LaunchItem;
use crate::context::use_feed;

#[component]
pub fn LaunchList() -> impl IntoView {
    let feed = use_feed();

    view! {
        <div class="launch__list">
            <Show when=move || feed.shows_no_data()>
                <div class="no-content">"No Data Found."</div>
            </Show>

            // Overlapping pages can repeat a flight number, so key by position too
            <For
                each=move || feed.records().into_iter().enumerate()
                key=|(index, launch)| (*index, launch.flight_number)
                children=move |(_, launch)| view! { <LaunchItem launch=launch /> }
            />
        </div>
    }
}
