//! Help Desk Component
//!
//! Floating help button and the support modal. The modal is only mounted
//! while open.

use leptos::*;
use storewatch_shared::{help_options, DashboardConfig, HelpAction, HelpDeskModel, HelpOption};

use crate::components::common::{ChevronRightIcon, CloseIcon, HelpCircleIcon, HelpIconView};

/// Help button and modal
#[component]
pub fn HelpDesk() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let options = store_value(help_options(&config.support));
    let version = store_value(config.app.version.clone());
    let (model, set_model) = create_signal(HelpDeskModel::new());

    let close = move || set_model.update(|m| m.close());

    let choose = move |index: usize| {
        options.with_value(|options| {
            let Some(option) = options.get(index) else {
                return;
            };
            let mut next = model.get_untracked();
            let link = next.choose(option);

            if let HelpAction::Log(message) = &option.action {
                tracing::info!(option = option.id, "{}", message);
            }
            if let Some(link) = link {
                open_link(link);
            }

            set_model.set(next);
        });
    };

    view! {
        <button
            class="fixed bottom-6 right-6 z-50 w-14 h-14 rounded-full shadow-lg bg-green-600 hover:bg-green-700 text-white flex items-center justify-center transition-all duration-300 hover:scale-110"
            aria-label="Central de Ajuda"
            on:click=move |_| set_model.update(|m| m.open())
        >
            <HelpCircleIcon class="w-6 h-6" />
        </button>

        <Show when=move || model.get().is_open()>
            <div class="fixed inset-0 z-50 flex items-center justify-center" data-testid="help-modal">
                // Backdrop
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    data-testid="help-backdrop"
                    on:click=move |_| close()
                />

                // Modal
                <div class="relative bg-white rounded-xl shadow-2xl w-full max-w-md mx-4 fade-in">
                    <div class="flex items-center justify-between px-6 py-4">
                        <h2 class="flex items-center gap-2 text-lg font-semibold text-green-700">
                            <HelpCircleIcon class="w-5 h-5 text-green-600" />
                            "Central de Ajuda"
                        </h2>
                        <button
                            class="p-1.5 rounded-md text-green-600 hover:bg-green-100"
                            aria-label="Fechar"
                            on:click=move |_| close()
                        >
                            <CloseIcon />
                        </button>
                    </div>

                    <div class="px-6 pb-6 space-y-2">
                        {options.with_value(|options| {
                            let count = options.len();
                            options.iter().enumerate().map(|(index, option)| {
                                view! {
                                    <HelpOptionRow option=option.clone() on_choose=move |_: ()| choose(index) />
                                    {(index + 1 < count).then(|| view! { <hr class="my-1 border-green-100" /> })}
                                }
                            }).collect_view()
                        })}

                        <div class="pt-4 text-center">
                            <div class="text-xs text-green-600">
                                {move || format!("Sistema de Monitoramento v{}", version.get_value())}
                            </div>
                            <div class="text-xs text-green-500 mt-1">
                                "Precisa de ajuda? Estamos aqui para apoiar você!"
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn HelpOptionRow(
    option: HelpOption,
    #[prop(into)] on_choose: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="w-full p-4 rounded-lg text-left hover:bg-green-50 transition-colors"
            data-option=option.id
            on:click=move |_| on_choose.call(())
        >
            <div class="flex items-center gap-3 w-full">
                <div class="flex-shrink-0 text-green-600">
                    <HelpIconView icon=option.icon />
                </div>
                <div class="flex-1">
                    <div class="font-medium text-sm text-green-700">{option.title}</div>
                    <div class="text-xs text-green-600 mt-1">{option.description}</div>
                </div>
                <ChevronRightIcon class="w-4 h-4 text-green-500 flex-shrink-0" />
            </div>
        </button>
    }
}

/// Open a `tel:`/`mailto:` link through the browser
fn open_link(url: &str) {
    let Some(window) = web_sys::window() else {
        tracing::warn!(url, "No window available to open support link");
        return;
    };

    match window.open_with_url(url) {
        Ok(_) => tracing::info!(url, "Opened support link"),
        Err(err) => tracing::warn!(url, error = ?err, "Failed to open support link"),
    }
}
