//! Grouped Bar Chart Component
//!
//! Draws a [`BarChartLayout`] as SVG. Each store is one `<g>` group; the
//! whole group reacts to hover (tooltip) and click (store selection).

use leptos::*;
use storewatch_shared::{BarChartLayout, ChartSeries, StoreData};

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 320.0;

/// Bar chart over the stores of the current page
#[component]
pub fn StoreBarChart(
    #[prop(into)] stores: Signal<Vec<StoreData>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(Option::<usize>::None);

    let layout = create_memo(move |_| {
        stores.with(|stores| BarChartLayout::new(stores, CHART_WIDTH, CHART_HEIGHT))
    });

    // Hover state belongs to the page being shown
    create_effect(move |_| {
        stores.with(|_| ());
        set_hovered.set(None);
    });

    view! {
        <div class="relative h-80 w-full">
            <svg
                class="w-full h-full"
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="none"
            >
                // Grid and value axis
                {move || {
                    let layout = layout.get();
                    let left = layout.margins.left;
                    let right = layout.width - layout.margins.right;
                    layout.ticks.iter().map(|tick| {
                        view! {
                            <line
                                x1=left x2=right y1={tick.y} y2={tick.y}
                                stroke="#475569" stroke-dasharray="3 3" stroke-opacity="0.5"
                            />
                            <text
                                x={left - 8.0} y={tick.y + 4.0}
                                text-anchor="end" font-size="12" fill="#94a3b8"
                            >
                                {tick.value}
                            </text>
                        }
                    }).collect_view()
                }}

                // One group per store
                {move || {
                    let layout = layout.get();
                    let top = layout.margins.top;
                    let baseline = layout.baseline();
                    layout.categories.iter().map(|category| {
                        let index = category.index;
                        let name = category.label.clone();
                        let bars = layout.bars.iter()
                            .filter(|bar| bar.index == index)
                            .map(|bar| view! {
                                <rect
                                    x={bar.x} y={bar.y} width={bar.width} height={bar.height}
                                    rx="4" fill={bar.series.color()}
                                    class="hover:opacity-80"
                                />
                            })
                            .collect_view();
                        view! {
                            <g
                                class="cursor-pointer"
                                data-category=category.label.clone()
                                on:mouseenter=move |_| set_hovered.set(Some(index))
                                on:mouseleave=move |_| set_hovered.set(None)
                                on:click=move |_| on_select.call(name.clone())
                            >
                                <rect
                                    x={category.x} y=top width={category.width} height={baseline - top}
                                    fill="#334155"
                                    fill-opacity=move || { if hovered.get() == Some(index) { "0.4" } else { "0" } }
                                />
                                {bars}
                                <text
                                    x={category.center()} y={baseline + 18.0}
                                    text-anchor="middle" font-size="12" fill="#94a3b8"
                                >
                                    {category.label.clone()}
                                </text>
                            </g>
                        }
                    }).collect_view()
                }}
            </svg>

            {move || hovered.get().and_then(|index| {
                let store = stores.with(|stores| stores.get(index).cloned())?;
                let left = layout.with(|layout| {
                    layout.categories.get(index).map(|c| c.center() / layout.width * 100.0)
                })?;
                Some(view! { <ChartTooltip store=store left_pct=left /> })
            })}
        </div>

        // Legend
        <div class="flex items-center justify-center gap-6 mt-2 text-xs text-slate-300">
            {ChartSeries::ALL.iter().map(|series| {
                view! {
                    <div class="flex items-center gap-2">
                        <div class="w-3 h-3 rounded-sm" style=format!("background-color: {}", series.color()) />
                        <span>{series.name()}</span>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Values of the hovered store
#[component]
fn ChartTooltip(store: StoreData, left_pct: f64) -> impl IntoView {
    view! {
        <div
            class="absolute top-2 -translate-x-1/2 pointer-events-none bg-slate-900 border border-slate-700 rounded-lg shadow-lg p-3"
            style=format!("left: {:.1}%", left_pct)
            data-testid="chart-tooltip"
        >
            <p class="font-medium text-white mb-2">{store.name.clone()}</p>
            {ChartSeries::ALL.iter().map(|series| {
                view! {
                    <p class="text-sm" style=format!("color: {}", series.color())>
                        {format!("{}: {}", series.name(), store.value(*series))}
                    </p>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
