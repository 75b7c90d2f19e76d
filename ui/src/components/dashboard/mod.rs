//! Dashboard Components
//!
//! The monitoring page: header with the profile selector, metric cards for
//! the selected profile, and the plant map or store chart once the mock
//! data has loaded.

use leptos::*;
use storewatch_shared::{DashboardConfig, DetailView, Profile};

mod monitoring_card;
mod store_selector;

pub use monitoring_card::MonitoringCard;
pub use store_selector::StoreSelector;

use crate::components::common::Spinner;
use crate::components::help_desk::HelpDesk;
use crate::components::plant_map::StorePlantMap;
use crate::components::store_chart::MultiStoreChart;
use crate::state::DashboardState;

/// Monitoring dashboard page
#[component]
pub fn IndexPage() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let state = DashboardState::new();
    let detail_view = create_memo(move |_| state.detail_view());

    let pending = state.schedule_mock_load(config.loading.mock_delay_ms);
    on_cleanup(move || pending.cancel());

    view! {
        <div class="min-h-screen bg-slate-900 text-slate-100">
            <header class="border-b border-slate-700 bg-slate-800/50 backdrop-blur-sm">
                <div class="container mx-auto px-6 py-4">
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class="text-2xl font-bold tracking-tight text-white">
                                "Sistema de Monitoramento"
                            </h1>
                            <p class="text-slate-400">
                                "Dashboard de controle e alertas em tempo real"
                            </p>
                        </div>

                        <div class="flex items-center gap-4">
                            <StoreSelector
                                selected=Signal::derive(move || state.selected_profile())
                                on_change=move |profile: Profile| state.select_profile(profile)
                            />

                            <Show when=move || state.is_loading()>
                                <div class="flex items-center gap-2" data-testid="loading-indicator">
                                    <Spinner />
                                    <span class="text-sm text-slate-400">"Carregando dados..."</span>
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
            </header>

            <main class="container mx-auto px-6 py-8">
                <div class="space-y-8">
                    <div class=move || card_grid_class(state.selected_profile())>
                        {move || {
                            let is_loading = state.is_loading();
                            state.cards().into_iter().map(|card| {
                                view! {
                                    <MonitoringCard
                                        title=card.title
                                        value=card.value
                                        icon=card.icon
                                        card_type=card.card_type
                                        is_loading=is_loading
                                        on_click=move |_: ()| {
                                            tracing::info!("Navegando para detalhes de: {}", card.key);
                                        }
                                    />
                                }
                            }).collect_view()
                        }}
                    </div>

                    {move || detail_view.get().map(|detail| match detail {
                        DetailView::PlantMap => view! {
                            <div class="fade-in"><StorePlantMap /></div>
                        }.into_view(),
                        DetailView::StoreChart => view! {
                            <div class="fade-in"><MultiStoreChart /></div>
                        }.into_view(),
                    })}
                </div>
            </main>

            <HelpDesk />
        </div>
    }
}

/// One column per card on medium screens and up
fn card_grid_class(profile: Profile) -> &'static str {
    match profile {
        Profile::Single => "grid grid-cols-1 md:grid-cols-3 gap-6",
        Profile::Multiple => "grid grid-cols-1 md:grid-cols-4 gap-6",
    }
}
