//! Multi-store comparison data
//!
//! Store records, the pager over them, the two chart series and the
//! selected-store banner.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Store connectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Online,
    Offline,
}

impl StoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StoreStatus::Online => "Online",
            StoreStatus::Offline => "Offline",
        }
    }

    /// Background and border of the status grid tile
    pub fn tile_class(&self) -> &'static str {
        match self {
            StoreStatus::Online => "bg-green-500/10 border-green-500/20",
            StoreStatus::Offline => "bg-orange-500/10 border-orange-500/20",
        }
    }

    pub fn dot_class(&self) -> &'static str {
        match self {
            StoreStatus::Online => "bg-green-500",
            StoreStatus::Offline => "bg-orange-500",
        }
    }
}

/// Per-store counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    pub name: String,
    pub alarms: u32,
    pub conditions: u32,
    pub sensors: u32,
    pub status: StoreStatus,
}

impl StoreData {
    fn new(name: &str, alarms: u32, conditions: u32, sensors: u32, status: StoreStatus) -> Self {
        Self {
            name: name.to_string(),
            alarms,
            conditions,
            sensors,
            status,
        }
    }

    /// Value plotted for a series
    pub fn value(&self, series: ChartSeries) -> u32 {
        match series {
            ChartSeries::CriticalAlarms => self.alarms,
            ChartSeries::WarningConditions => self.conditions,
        }
    }

    /// Tooltip lines for this store, one per series
    pub fn tooltip_lines(&self) -> Vec<String> {
        ChartSeries::ALL
            .iter()
            .map(|series| format!("{}: {}", series.name(), self.value(*series)))
            .collect()
    }
}

/// The stores compared in the multi-store view
pub fn mock_stores() -> Vec<StoreData> {
    vec![
        StoreData::new("Loja Centro", 3, 8, 12, StoreStatus::Online),
        StoreData::new("Loja Shopping", 1, 4, 15, StoreStatus::Online),
        StoreData::new("Loja Norte", 5, 12, 18, StoreStatus::Online),
        StoreData::new("Loja Sul", 0, 2, 10, StoreStatus::Offline),
        StoreData::new("Loja Oeste", 2, 6, 14, StoreStatus::Online),
        StoreData::new("Loja Aeroporto", 4, 9, 16, StoreStatus::Online),
    ]
}

/// A bar series of the comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSeries {
    CriticalAlarms,
    WarningConditions,
}

impl ChartSeries {
    pub const ALL: [ChartSeries; 2] = [ChartSeries::CriticalAlarms, ChartSeries::WarningConditions];

    pub fn name(&self) -> &'static str {
        match self {
            ChartSeries::CriticalAlarms => "Alarmes Críticos",
            ChartSeries::WarningConditions => "Condições de Atenção",
        }
    }

    /// SVG fill colour
    pub fn color(&self) -> &'static str {
        match self {
            ChartSeries::CriticalAlarms => "#ef4444",
            ChartSeries::WarningConditions => "#f59e0b",
        }
    }
}

/// Pager over a fixed number of items.
///
/// The page index is kept within `[0, total_pages - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    /// A zero page size is treated as one item per page
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; an empty list still has one (empty) page
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Items of the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages() - 1);
    }

    /// "current of total", 1-based
    pub fn label(&self) -> String {
        format!("{} de {}", self.page + 1, self.total_pages())
    }
}

/// Store highlighted in the quick-navigation banner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSelection {
    selected: Option<String>,
}

impl StoreSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bars and status tiles both select through here
    pub fn select(&mut self, store_name: &str) {
        self.selected = Some(store_name.to_string());
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn banner_title(&self) -> Option<String> {
        self.selected().map(banner_title)
    }
}

/// Heading of the quick-navigation banner
pub fn banner_title(store_name: &str) -> String {
    format!("{} - Navegação Rápida", store_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(stores: &[StoreData]) -> Vec<&str> {
        stores.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_two_pages_of_four() {
        let stores = mock_stores();
        let mut pager = Paginator::new(stores.len(), 4);

        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.label(), "1 de 2");
        assert!(!pager.has_prev());
        assert!(pager.has_next());
        assert_eq!(
            names(pager.slice(&stores)),
            vec!["Loja Centro", "Loja Shopping", "Loja Norte", "Loja Sul"]
        );

        pager.next_page();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.label(), "2 de 2");
        assert!(pager.has_prev());
        assert!(!pager.has_next());
        assert_eq!(names(pager.slice(&stores)), vec!["Loja Oeste", "Loja Aeroporto"]);
    }

    #[test]
    fn test_page_index_is_clamped() {
        let mut pager = Paginator::new(6, 4);
        pager.prev_page();
        assert_eq!(pager.page(), 0);

        pager.next_page();
        pager.next_page();
        pager.next_page();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.range(), 4..6);
    }

    #[test]
    fn test_exact_multiple_and_empty() {
        let pager = Paginator::new(8, 4);
        assert_eq!(pager.total_pages(), 2);

        let mut empty = Paginator::new(0, 4);
        assert_eq!(empty.total_pages(), 1);
        assert_eq!(empty.range(), 0..0);
        empty.next_page();
        assert_eq!(empty.page(), 0);
        assert!(!empty.has_next());
    }

    #[test]
    fn test_zero_page_size() {
        let pager = Paginator::new(3, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 3);
    }

    #[test]
    fn test_tooltip_lines() {
        let stores = mock_stores();
        assert_eq!(
            stores[2].tooltip_lines(),
            vec!["Alarmes Críticos: 5", "Condições de Atenção: 12"]
        );
    }

    #[test]
    fn test_mock_store_totals_match_aggregates() {
        let stores = mock_stores();
        let data = crate::dashboard::DashboardData::mock();

        assert_eq!(stores.len() as u32, data.multiple.total_stores);
        assert_eq!(stores.iter().map(|s| s.alarms).sum::<u32>(), data.multiple.total_alarms);
        assert_eq!(
            stores.iter().map(|s| s.conditions).sum::<u32>(),
            data.multiple.total_conditions
        );
        assert_eq!(
            stores.iter().filter(|s| s.status == StoreStatus::Offline).count() as u32,
            data.multiple.offline_stores
        );
    }

    #[test]
    fn test_select_and_dismiss() {
        let mut selection = StoreSelection::new();
        assert_eq!(selection.banner_title(), None);

        selection.select("Loja Norte");
        assert_eq!(selection.selected(), Some("Loja Norte"));
        assert_eq!(selection.banner_title().as_deref(), Some("Loja Norte - Navegação Rápida"));

        selection.select("Loja Sul");
        assert_eq!(selection.selected(), Some("Loja Sul"));

        selection.dismiss();
        assert_eq!(selection.selected(), None);
    }
}
