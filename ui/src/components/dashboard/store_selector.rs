//! Store Selector Component

use leptos::*;
use storewatch_shared::Profile;

use crate::components::common::CardIconView;

/// Two-option toggle between the single and multiple store profiles.
///
/// Clicking the active option still calls `on_change`.
#[component]
pub fn StoreSelector(
    #[prop(into)] selected: Signal<Profile>,
    #[prop(into)] on_change: Callback<Profile>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 p-1 bg-slate-800 rounded-lg">
            {Profile::ALL.iter().map(move |&profile| {
                view! {
                    <button
                        class=move || option_class(selected.get() == profile)
                        data-profile=profile.label()
                        on:click=move |_| on_change.call(profile)
                    >
                        <CardIconView icon=profile.icon() class="w-4 h-4" />
                        {profile.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

fn option_class(active: bool) -> String {
    let base = "flex items-center gap-2 px-3 py-1.5 rounded-md text-sm font-medium transition-all duration-200";
    if active {
        format!("{} bg-blue-600 text-white shadow-sm", base)
    } else {
        format!("{} text-slate-400 hover:text-white hover:bg-slate-700/50", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_option_is_highlighted() {
        assert!(option_class(true).contains("bg-blue-600"));
        assert!(!option_class(false).contains("bg-blue-600"));
    }
}
