//! Multi-Store Chart Component
//!
//! Paginated alarm/condition comparison across stores, the quick-navigation
//! banner for the selected store, and an unpaginated status grid.

use leptos::*;
use storewatch_shared::{mock_stores, DashboardConfig, Paginator, StoreData, StoreSelection};

mod bar_chart;

pub use bar_chart::StoreBarChart;

use crate::components::common::{ChevronLeftIcon, ChevronRightIcon, TrendingUpIcon};

/// Store comparison card
#[component]
pub fn MultiStoreChart() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let stores = store_value(mock_stores());
    let store_count = stores.with_value(|s| s.len());

    let (pager, set_pager) = create_signal(Paginator::new(store_count, config.chart.stores_per_page));
    let (selection, set_selection) = create_signal(StoreSelection::new());

    let page_stores = Signal::derive(move || {
        let pager = pager.get();
        stores.with_value(|s| pager.slice(s).to_vec())
    });

    let select_store = Callback::new(move |name: String| {
        tracing::debug!(store = %name, "Store selected");
        set_selection.update(|s| s.select(&name));
    });

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="flex items-center gap-2 text-lg font-semibold text-white">
                    <TrendingUpIcon />
                    "Comparativo Entre Lojas - Alarmes vs Condições"
                </h2>

                <div class="flex items-center gap-2">
                    <button
                        class=PAGE_BUTTON_CLASS
                        aria-label="Página anterior"
                        disabled=move || !pager.get().has_prev()
                        on:click=move |_| set_pager.update(|p| p.prev_page())
                    >
                        <ChevronLeftIcon />
                    </button>

                    <span class="text-sm text-slate-400 px-2" data-testid="page-label">
                        {move || pager.get().label()}
                    </span>

                    <button
                        class=PAGE_BUTTON_CLASS
                        aria-label="Próxima página"
                        disabled=move || !pager.get().has_next()
                        on:click=move |_| set_pager.update(|p| p.next_page())
                    >
                        <ChevronRightIcon />
                    </button>
                </div>
            </div>

            <StoreBarChart stores=page_stores on_select=select_store />

            {move || selection.get().banner_title().map(|title| view! {
                <div class="mt-4 p-4 bg-blue-500/10 border border-blue-500/20 rounded-lg" data-testid="store-banner">
                    <div class="flex items-center justify-between">
                        <div>
                            <h4 class="font-medium text-blue-400">{title}</h4>
                            <p class="text-sm text-slate-400 mt-1">
                                "Clique para visualizar detalhes desta loja"
                            </p>
                        </div>
                        <button
                            class="px-3 py-1.5 text-sm rounded-md bg-blue-600 text-white hover:bg-blue-500 transition-colors"
                            on:click=move |_| set_selection.update(|s| s.dismiss())
                        >
                            "Acessar Loja"
                        </button>
                    </div>
                </div>
            })}

            // Store status summary
            <div class="mt-6 grid grid-cols-2 md:grid-cols-6 gap-4">
                {stores.get_value().into_iter().map(|store| {
                    view! { <StoreStatusTile store=store on_select=select_store /> }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

const PAGE_BUTTON_CLASS: &str = "p-1.5 rounded-md border border-slate-600 text-slate-300 hover:bg-slate-700/50 disabled:opacity-40 disabled:cursor-not-allowed transition-colors";

#[component]
fn StoreStatusTile(
    store: StoreData,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let name = store.name.clone();

    view! {
        <div
            class=format!(
                "p-3 rounded-lg border cursor-pointer transition-all duration-200 hover:shadow-md {}",
                store.status.tile_class()
            )
            data-store=store.name.clone()
            on:click=move |_| on_select.call(name.clone())
        >
            <div class="text-xs font-medium text-white mb-1">{store.name.clone()}</div>
            <div class="flex items-center gap-1">
                <div class=format!("w-2 h-2 rounded-full {}", store.status.dot_class()) />
                <span class="text-xs text-slate-400">{store.status.label()}</span>
            </div>
        </div>
    }
}
