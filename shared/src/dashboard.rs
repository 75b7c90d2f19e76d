//! Dashboard aggregates and the page-level view model
//!
//! The page owns exactly one [`DashboardPage`]. It starts in the loading
//! state with zeroed counters, is replaced wholesale by the mock aggregates
//! once, and derives the card set and the detail view from the selected
//! profile.

use serde::{Deserialize, Serialize};

/// View profile selected in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// One store: sensor cards and the plant map
    #[default]
    Single,
    /// Every store: aggregate cards and the comparison chart
    Multiple,
}

impl Profile {
    /// Both profiles in the order the selector shows them
    pub const ALL: [Profile; 2] = [Profile::Single, Profile::Multiple];

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Single => "Loja Única",
            Profile::Multiple => "Várias Lojas",
        }
    }

    pub fn icon(&self) -> CardIcon {
        match self {
            Profile::Single => CardIcon::Building,
            Profile::Multiple => CardIcon::Buildings,
        }
    }
}

/// Counters for the single-store profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleStoreSummary {
    pub total_sensors: u32,
    pub total_alarms: u32,
    pub total_conditions: u32,
}

/// Counters for the multi-store profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiStoreSummary {
    pub total_stores: u32,
    pub total_alarms: u32,
    pub total_conditions: u32,
    pub offline_stores: u32,
}

/// Aggregate counters for both profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub single: SingleStoreSummary,
    pub multiple: MultiStoreSummary,
}

impl DashboardData {
    /// The aggregates applied once the mock load completes
    pub fn mock() -> Self {
        Self {
            single: SingleStoreSummary {
                total_sensors: 15,
                total_alarms: 3,
                total_conditions: 8,
            },
            multiple: MultiStoreSummary {
                total_stores: 6,
                total_alarms: 15,
                total_conditions: 41,
                offline_stores: 1,
            },
        }
    }

    /// Metric cards for a profile, in display order
    pub fn cards(&self, profile: Profile) -> Vec<MetricCard> {
        match profile {
            Profile::Single => vec![
                MetricCard {
                    key: "sensores",
                    title: "Total de Sensores",
                    value: self.single.total_sensors,
                    icon: CardIcon::Activity,
                    card_type: CardType::Info,
                },
                MetricCard {
                    key: "alarmes",
                    title: "Alarmes - Produto em Risco",
                    value: self.single.total_alarms,
                    icon: CardIcon::AlertTriangle,
                    card_type: CardType::Critical,
                },
                MetricCard {
                    key: "condicoes",
                    title: "Condições em Aberto",
                    value: self.single.total_conditions,
                    icon: CardIcon::AlertCircle,
                    card_type: CardType::Warning,
                },
            ],
            Profile::Multiple => vec![
                MetricCard {
                    key: "lojas",
                    title: "Total de Lojas",
                    value: self.multiple.total_stores,
                    icon: CardIcon::Buildings,
                    card_type: CardType::Info,
                },
                MetricCard {
                    key: "alarmes-geral",
                    title: "Total de Alarmes",
                    value: self.multiple.total_alarms,
                    icon: CardIcon::AlertTriangle,
                    card_type: CardType::Critical,
                },
                MetricCard {
                    key: "condicoes-geral",
                    title: "Total de Condições",
                    value: self.multiple.total_conditions,
                    icon: CardIcon::AlertCircle,
                    card_type: CardType::Warning,
                },
                MetricCard {
                    key: "offline",
                    title: "Lojas Offline",
                    value: self.multiple.offline_stores,
                    icon: CardIcon::WifiOff,
                    card_type: CardType::Offline,
                },
            ],
        }
    }
}

/// Severity of a metric card, driving its colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Critical,
    Warning,
    Success,
    Info,
    Offline,
}

impl CardType {
    pub fn card_class(&self) -> &'static str {
        match self {
            CardType::Critical => "bg-red-500/10 border-red-500/30",
            CardType::Warning => "bg-amber-500/10 border-amber-500/30",
            CardType::Success => "bg-green-500/10 border-green-500/30",
            CardType::Info => "bg-blue-500/10 border-blue-500/30",
            CardType::Offline => "bg-orange-500/10 border-orange-500/20",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            CardType::Critical => "text-red-400",
            CardType::Warning => "text-amber-400",
            CardType::Success => "text-green-400",
            CardType::Info => "text-blue-400",
            CardType::Offline => "text-orange-400",
        }
    }
}

/// Glyph shown on a card or selector button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardIcon {
    Activity,
    AlertTriangle,
    AlertCircle,
    Building,
    Buildings,
    WifiOff,
}

/// A single metric card derived from [`DashboardData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricCard {
    /// Detail target reported when the card is clicked
    pub key: &'static str,
    pub title: &'static str,
    pub value: u32,
    pub icon: CardIcon,
    pub card_type: CardType,
}

/// Panel rendered below the cards once loading completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView {
    PlantMap,
    StoreChart,
}

/// Page-level state: loading flag, selected profile and aggregates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    pub is_loading: bool,
    pub selected_profile: Profile,
    pub data: DashboardData,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            selected_profile: Profile::Single,
            data: DashboardData::default(),
        }
    }

    /// Switch profile. Reselecting the active profile is a no-op change.
    pub fn select_profile(&mut self, profile: Profile) {
        self.selected_profile = profile;
    }

    /// Replace the aggregates wholesale and leave the loading state
    pub fn finish_loading(&mut self, data: DashboardData) {
        self.data = data;
        self.is_loading = false;
    }

    /// Cards for the selected profile
    pub fn cards(&self) -> Vec<MetricCard> {
        self.data.cards(self.selected_profile)
    }

    pub fn detail_view(&self) -> Option<DetailView> {
        detail_view_for(self.selected_profile, self.is_loading)
    }
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Map and chart only appear once the aggregates are in
pub fn detail_view_for(profile: Profile, is_loading: bool) -> Option<DetailView> {
    if is_loading {
        return None;
    }
    Some(match profile {
        Profile::Single => DetailView::PlantMap,
        Profile::Multiple => DetailView::StoreChart,
    })
}

/// Format a counter with `.` thousands separators (pt-BR)
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_state() {
        let page = DashboardPage::new();
        assert!(page.is_loading);
        assert_eq!(page.selected_profile, Profile::Single);
        assert_eq!(page.data, DashboardData::default());
        assert_eq!(page.detail_view(), None);
        assert!(page.cards().iter().all(|c| c.value == 0));
    }

    #[test]
    fn test_single_profile_cards() {
        let mut page = DashboardPage::new();
        page.finish_loading(DashboardData::mock());

        let cards = page.cards();
        let keys: Vec<_> = cards.iter().map(|c| c.key).collect();
        let values: Vec<_> = cards.iter().map(|c| c.value).collect();
        assert_eq!(keys, vec!["sensores", "alarmes", "condicoes"]);
        assert_eq!(values, vec![15, 3, 8]);
        assert_eq!(cards[0].card_type, CardType::Info);
        assert_eq!(cards[1].card_type, CardType::Critical);
        assert_eq!(cards[2].card_type, CardType::Warning);
        assert_eq!(page.detail_view(), Some(DetailView::PlantMap));
    }

    #[test]
    fn test_multiple_profile_cards() {
        let mut page = DashboardPage::new();
        page.finish_loading(DashboardData::mock());
        page.select_profile(Profile::Multiple);

        let cards = page.cards();
        let keys: Vec<_> = cards.iter().map(|c| c.key).collect();
        let values: Vec<_> = cards.iter().map(|c| c.value).collect();
        assert_eq!(keys, vec!["lojas", "alarmes-geral", "condicoes-geral", "offline"]);
        assert_eq!(values, vec![6, 15, 41, 1]);
        assert_eq!(cards[3].card_type, CardType::Offline);
        assert_eq!(cards[3].icon, CardIcon::WifiOff);
        assert_eq!(page.detail_view(), Some(DetailView::StoreChart));
    }

    #[test]
    fn test_card_sets_are_disjoint() {
        let data = DashboardData::mock();
        let single = data.cards(Profile::Single);
        let multiple = data.cards(Profile::Multiple);
        assert!(single.iter().all(|s| multiple.iter().all(|m| m.key != s.key)));
    }

    #[test]
    fn test_profile_selection_is_independent_of_loading() {
        let mut page = DashboardPage::new();
        page.select_profile(Profile::Multiple);
        assert!(page.is_loading);
        assert_eq!(page.cards().len(), 4);
        assert_eq!(page.detail_view(), None);

        page.select_profile(Profile::Multiple);
        assert_eq!(page.selected_profile, Profile::Multiple);

        page.select_profile(Profile::Single);
        assert_eq!(page.cards().len(), 3);
    }

    #[test]
    fn test_profile_serialization() {
        assert_eq!(serde_json::to_string(&Profile::Single).unwrap(), "\"single\"");
        let parsed: Profile = serde_json::from_str("\"multiple\"").unwrap();
        assert_eq!(parsed, Profile::Multiple);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(41), "41");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }

    #[test]
    fn test_card_styles_are_distinct() {
        let types = [
            CardType::Critical,
            CardType::Warning,
            CardType::Success,
            CardType::Info,
            CardType::Offline,
        ];
        for (i, a) in types.iter().enumerate() {
            for b in &types[i + 1..] {
                assert_ne!(a.card_class(), b.card_class());
                assert_ne!(a.icon_class(), b.icon_class());
            }
        }
    }
}
