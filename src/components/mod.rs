//! UI Components
//!
//! Leptos components for the launch feed.

mod launch_item;
mod launch_list;
mod search_box;
mod spinner;

pub use launch_item::LaunchItem;
pub use launch_list::LaunchList;
pub use search_box::SearchBox;
pub use spinner::Spinner;
