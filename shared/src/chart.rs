//! Grouped bar chart geometry
//!
//! Lays out one category per store and one bar per [`ChartSeries`] inside a
//! fixed SVG view box. The UI only draws what this module computes.

use crate::stores::{ChartSeries, StoreData};

/// Number of grid intervals on the value axis
const TICK_COUNT: u32 = 4;

/// Share of a category band left empty on each side of its bars
const CATEGORY_GAP: f64 = 0.1;

/// Horizontal space between bars of the same category
const BAR_GAP: f64 = 4.0;

/// Plot margins inside the view box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Grid line on the value axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTick {
    pub value: u32,
    pub y: f64,
}

/// Horizontal band of one store
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlot {
    /// Index into the stores passed to the layout
    pub index: usize,
    pub label: String,
    pub x: f64,
    pub width: f64,
}

impl CategorySlot {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar of one series for one store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub index: usize,
    pub series: ChartSeries,
    pub value: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computed chart geometry
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub y_max: u32,
    pub ticks: Vec<AxisTick>,
    pub categories: Vec<CategorySlot>,
    pub bars: Vec<BarRect>,
}

impl BarChartLayout {
    pub fn new(stores: &[StoreData], width: f64, height: f64) -> Self {
        Self::with_margins(stores, width, height, Margins::default())
    }

    pub fn with_margins(stores: &[StoreData], width: f64, height: f64, margins: Margins) -> Self {
        let plot_width = (width - margins.left - margins.right).max(0.0);
        let plot_height = (height - margins.top - margins.bottom).max(0.0);
        let baseline = margins.top + plot_height;

        let max_value = stores
            .iter()
            .flat_map(|s| ChartSeries::ALL.iter().map(move |series| s.value(*series)))
            .max()
            .unwrap_or(0);
        let y_max = axis_max(max_value);

        let scale = |value: u32| f64::from(value) / f64::from(y_max) * plot_height;

        let ticks = (0..=TICK_COUNT)
            .map(|i| {
                let value = y_max / TICK_COUNT * i;
                AxisTick {
                    value,
                    y: baseline - scale(value),
                }
            })
            .collect();

        let band = if stores.is_empty() {
            0.0
        } else {
            plot_width / stores.len() as f64
        };
        let series_count = ChartSeries::ALL.len() as f64;

        let mut categories = Vec::with_capacity(stores.len());
        let mut bars = Vec::with_capacity(stores.len() * ChartSeries::ALL.len());

        for (index, store) in stores.iter().enumerate() {
            let x = margins.left + band * index as f64;
            categories.push(CategorySlot {
                index,
                label: store.name.clone(),
                x,
                width: band,
            });

            let group_width = band * (1.0 - 2.0 * CATEGORY_GAP);
            let bar_width = ((group_width - BAR_GAP * (series_count - 1.0)) / series_count).max(0.0);
            let group_x = x + band * CATEGORY_GAP;

            for (i, series) in ChartSeries::ALL.iter().enumerate() {
                let value = store.value(*series);
                let bar_height = scale(value);
                bars.push(BarRect {
                    index,
                    series: *series,
                    value,
                    x: group_x + i as f64 * (bar_width + BAR_GAP),
                    y: baseline - bar_height,
                    width: bar_width,
                    height: bar_height,
                });
            }
        }

        Self {
            width,
            height,
            margins,
            y_max,
            ticks,
            categories,
            bars,
        }
    }

    /// Bottom edge of the plot area
    pub fn baseline(&self) -> f64 {
        self.height - self.margins.bottom
    }
}

/// Smallest "nice" axis maximum (a 1/2/5 step times the tick count) that
/// fits `max_value`. Saturates at `u32::MAX`.
pub fn axis_max(max_value: u32) -> u32 {
    let raw_step = max_value.div_ceil(TICK_COUNT).max(1);
    let mut magnitude: u32 = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = magnitude.saturating_mul(factor);
            if step >= raw_step {
                return step.saturating_mul(TICK_COUNT);
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{mock_stores, Paginator};

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(0), 4);
        assert_eq!(axis_max(4), 4);
        assert_eq!(axis_max(5), 8);
        assert_eq!(axis_max(12), 20);
        assert_eq!(axis_max(41), 80);
        assert_eq!(axis_max(1000), 1000);
    }

    #[test]
    fn test_axis_max_saturates_for_huge_values() {
        assert_eq!(axis_max(2_000_000_000), 2_000_000_000);
        assert_eq!(axis_max(3_000_000_000), 4_000_000_000);
        assert_eq!(axis_max(4_000_000_001), u32::MAX);
        assert_eq!(axis_max(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_layout_for_first_page() {
        let stores = mock_stores();
        let pager = Paginator::new(stores.len(), 4);
        let layout = BarChartLayout::new(pager.slice(&stores), 600.0, 320.0);

        assert_eq!(layout.categories.len(), 4);
        assert_eq!(layout.bars.len(), 8);
        assert_eq!(layout.y_max, 20);
        assert_eq!(layout.ticks.len(), 5);
        assert_eq!(layout.ticks[0].value, 0);
        assert_eq!(layout.ticks[4].value, 20);
        assert_eq!(layout.ticks[0].y, layout.baseline());
        assert_eq!(layout.categories[3].label, "Loja Sul");
    }

    #[test]
    fn test_bars_stay_inside_plot() {
        let stores = mock_stores();
        let layout = BarChartLayout::new(&stores, 600.0, 320.0);
        let right = layout.width - layout.margins.right;

        for bar in &layout.bars {
            assert!(bar.x >= layout.margins.left);
            assert!(bar.x + bar.width <= right + 1e-9);
            assert!(bar.y >= layout.margins.top - 1e-9);
            assert!((bar.y + bar.height - layout.baseline()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bar_height_follows_value() {
        let stores = mock_stores();
        let layout = BarChartLayout::new(&stores, 600.0, 320.0);

        let height = |index: usize, series: ChartSeries| {
            layout
                .bars
                .iter()
                .find(|b| b.index == index && b.series == series)
                .map(|b| b.height)
                .unwrap()
        };

        // Loja Sul has no critical alarms
        assert_eq!(height(3, ChartSeries::CriticalAlarms), 0.0);
        assert!(height(2, ChartSeries::WarningConditions) > height(2, ChartSeries::CriticalAlarms));
        assert!(height(2, ChartSeries::CriticalAlarms) > height(1, ChartSeries::CriticalAlarms));
    }

    #[test]
    fn test_series_bars_do_not_overlap() {
        let stores = mock_stores();
        let layout = BarChartLayout::new(&stores[..2], 600.0, 320.0);
        let first = layout.bars[0];
        let second = layout.bars[1];
        assert_eq!(first.index, second.index);
        assert!(first.x + first.width <= second.x);
    }

    #[test]
    fn test_empty_layout() {
        let layout = BarChartLayout::new(&[], 600.0, 320.0);
        assert!(layout.bars.is_empty());
        assert!(layout.categories.is_empty());
        assert_eq!(layout.y_max, 4);
    }
}
