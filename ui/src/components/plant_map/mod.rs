//! Store Plant Map Component
//!
//! Floor plan of the monitored store with one marker per sensor. Hovering
//! or clicking a marker shows its details; leaving the marker hides them.

use leptos::*;
use storewatch_shared::{mock_sensors, Sensor, SensorFocus, SensorStatus, PLANT_ZONES};

use crate::components::common::{AlertTriangleIcon, BuildingIcon, SensorIconView};

/// Plant map with sensor markers and detail panel
#[component]
pub fn StorePlantMap() -> impl IntoView {
    let sensors = store_value(mock_sensors());
    let (focus, set_focus) = create_signal(SensorFocus::new());

    let focused = move || {
        sensors.with_value(|sensors| focus.with(|f| f.focused(sensors).cloned()))
    };

    view! {
        <div class="bg-slate-800 rounded-xl border border-slate-700 p-6">
            <h2 class="flex items-center gap-2 text-lg font-semibold text-white mb-4">
                <BuildingIcon />
                "Planta da Unidade - Sensores Ativos"
            </h2>

            <div class="relative">
                <div class="relative w-full h-80 bg-gradient-to-br from-slate-50 to-slate-100 border-2 border-dashed border-slate-300 rounded-lg p-4">
                    {PLANT_ZONES.iter().map(|zone| {
                        view! {
                            <div class=format!(
                                "absolute {} {} border rounded flex items-center justify-center text-xs font-medium",
                                zone.placement,
                                zone.color,
                            )>
                                {zone.name}
                            </div>
                        }
                    }).collect::<Vec<_>>()}

                    {sensors.get_value().into_iter().map(|sensor| {
                        let hover_id = sensor.id.clone();
                        let click_id = sensor.id.clone();
                        view! {
                            <div
                                class=marker_class(sensor.status)
                                style=sensor.position.marker_style()
                                title=sensor.name.clone()
                                data-sensor=sensor.id.clone()
                                on:mouseenter=move |_| set_focus.update(|f| f.hover(&hover_id))
                                on:mouseleave=move |_| set_focus.update(|f| f.leave())
                                on:click=move |_| set_focus.update(|f| f.click(&click_id))
                            >
                                <SensorIconView category=sensor.category />
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                {move || focused().map(|sensor| view! { <SensorDetail sensor=sensor /> })}
            </div>

            // Legend
            <div class="mt-4 flex items-center justify-center gap-6 text-xs text-slate-300">
                {SensorStatus::ALL.iter().map(|status| {
                    view! {
                        <div class="flex items-center gap-2">
                            <div class=format!("w-3 h-3 rounded-full {}", status.dot_class()) />
                            <span>{status.label()}</span>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Details of the focused sensor
#[component]
fn SensorDetail(sensor: Sensor) -> impl IntoView {
    let badge = sensor.status.badge();

    view! {
        <div
            class="absolute top-4 right-4 w-72 z-10 bg-slate-800 rounded-xl border border-slate-700 shadow-2xl p-4 fade-in"
            data-testid="sensor-detail"
        >
            <div class="flex items-center justify-between mb-2 gap-2">
                <h3 class="text-sm font-semibold text-white">{sensor.name}</h3>
                <span class=format!("px-2 py-0.5 text-xs font-medium rounded-full border {}", badge.class())>
                    {sensor.status.label()}
                </span>
            </div>

            <div class="space-y-2">
                <div class="flex justify-between">
                    <span class="text-sm text-slate-400">"Valor atual:"</span>
                    <span class="font-medium text-white">{sensor.value}</span>
                </div>

                {sensor.risk.map(|risk| view! {
                    <div class="p-2 bg-red-500/10 border border-red-500/20 rounded-md">
                        <div class="flex items-start gap-2">
                            <AlertTriangleIcon class="w-4 h-4 text-red-400 mt-0.5 flex-shrink-0" />
                            <span class="text-xs text-red-400">{risk}</span>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

fn marker_class(status: SensorStatus) -> String {
    format!(
        "absolute w-8 h-8 rounded-full flex items-center justify-center cursor-pointer shadow-md transition-transform hover:scale-110 {}",
        status.marker_class()
    )
}
