//! Monitoring Card Component

use leptos::*;
use storewatch_shared::{format_count, CardIcon, CardType};

use crate::components::common::CardIconView;

/// Single metric card.
///
/// Clicking the card or its "Ver Detalhes" button calls `on_click` once.
#[component]
pub fn MonitoringCard(
    title: &'static str,
    value: u32,
    icon: CardIcon,
    card_type: CardType,
    #[prop(default = false)] is_loading: bool,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class=card_class(card_type)
            data-testid="monitoring-card"
            on:click=move |_| on_click.call(())
        >
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-sm font-medium text-slate-400 uppercase tracking-wide">{title}</h3>
                <span class=card_type.icon_class()>
                    <CardIconView icon=icon />
                </span>
            </div>

            {if is_loading {
                view! { <LoadingSkeleton /> }.into_view()
            } else {
                view! {
                    <div class="text-3xl font-bold text-white mb-4 tabular-nums">
                        {format_count(value)}
                    </div>
                    <button
                        class="w-full px-3 py-1.5 text-sm rounded-md border border-slate-600 text-slate-200 hover:bg-slate-700/50 transition-colors"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_click.call(());
                        }
                    >
                        "Ver Detalhes"
                    </button>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse" data-testid="card-skeleton">
            <div class="h-8 bg-slate-700 rounded mb-2" />
            <div class="h-12 bg-slate-700 rounded mb-4" />
            <div class="h-9 bg-slate-700 rounded" />
        </div>
    }
}

fn card_class(card_type: CardType) -> String {
    format!(
        "rounded-xl border p-6 cursor-pointer transition-all duration-300 hover:shadow-lg hover:-translate-y-1 {}",
        card_type.card_class()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_includes_type_style() {
        let class = card_class(CardType::Offline);
        assert!(class.starts_with("rounded-xl border"));
        assert!(class.ends_with(CardType::Offline.card_class()));
    }
}
