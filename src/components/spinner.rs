//! Spinner Component
//!
//! Loading indicator shown while a page is in flight.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__circle"></div>
        </div>
    }
}
