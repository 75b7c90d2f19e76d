//! Loading Spinner Component

use leptos::*;

/// Spinning ring shown while data loads
#[component]
pub fn Spinner(
    #[prop(default = "w-4 h-4")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("animate-spin border-2 border-blue-500 border-t-transparent rounded-full {}", class) />
    }
}
