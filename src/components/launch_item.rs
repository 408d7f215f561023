//! Launch Item Component
//!
//! One launch row with status badge and a collapsible details panel.

use leptos::prelude::*;

use crate::context::use_feed;
use crate::models::{LaunchLinks, LaunchRecord};
use crate::time::{describe_relative, now};

/// Launch row
///
/// Only one row is expanded at a time; opening this one closes any other.
#[component]
pub fn LaunchItem(launch: LaunchRecord) -> impl IntoView {
    let feed = use_feed();
    let id = launch.flight_number;
    let status = launch.status();
    let mission_name = launch.mission_name.clone();

    let is_expanded = move || feed.is_expanded(id);

    view! {
        <div class="launch_wrapper">
            <div class="launch__item">
                <div style="display: flex;">
                    <h2 class="launch__mission">{mission_name}</h2>
                    <div class=status.css_class()>{status.label()}</div>
                </div>

                <Show when=is_expanded>
                    <LaunchDetails launch=launch.clone() />
                </Show>

                <div>
                    <button class="btn btn--primary" on:click=move |_| feed.toggle_expanded(id)>
                        {move || if is_expanded() { "Hide" } else { "View" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn LaunchDetails(launch: LaunchRecord) -> impl IntoView {
    let launched = describe_relative(launch.launch_date_utc, now());
    let details = launch.details_text().map(str::to_string);
    let LaunchLinks {
        article_link,
        video_link,
        mission_patch_small,
    } = launch.links;

    view! {
        <div class="launch__body">
            <div class="launch__meta">
                <span class="launch__meta-item">{launched}</span>
                {article_link.map(|href| view! {
                    <span class="launch__meta-item">
                        <a href=href target="_blank" rel="noreferrer">"Article"</a>
                    </span>
                })}
                {video_link.map(|href| view! {
                    <span class="launch__meta-item">
                        <a href=href target="_blank" rel="noreferrer">"Video"</a>
                    </span>
                })}
            </div>
            <div class="launch__details">
                {mission_patch_small.map(|src| view! {
                    <div>
                        <img src=src alt="mission_patch" />
                    </div>
                })}
                {match details {
                    Some(text) => view! { <div>{text}</div> }.into_any(),
                    None => view! { <div class="no-content">"No details available."</div> }.into_any(),
                }}
            </div>
        </div>
    }
}
