//! Root Application Component
//!
//! Provides the configuration and document metadata, and routes `/` to the
//! monitoring dashboard.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storewatch_shared::DashboardConfig;

use crate::components::dashboard::IndexPage;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Sistema de Monitoramento" />
        <Router>
            <Routes>
                <Route path="/" view=IndexPage />
                // Catch-all for 404
                <Route path="/*any" view=NotFoundPage />
            </Routes>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-900">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-white mb-2">"404"</h1>
                <p class="text-slate-400 mb-1">"Página não encontrada"</p>
                <p class="text-sm text-slate-500 font-mono mb-6">{move || location.pathname.get()}</p>
                <A href="/" class="text-blue-400 hover:text-blue-300">
                    "Voltar ao painel"
                </A>
            </div>
        </div>
    }
}
