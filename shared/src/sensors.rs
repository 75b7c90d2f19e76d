//! Store plant sensors
//!
//! A fixed set of sensors placed on the floor plan by percentage
//! coordinates, plus the hover/click focus rule of the plant map.

use serde::{Deserialize, Serialize};

/// What a sensor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorCategory {
    Temperature,
    Humidity,
    Air,
    Energy,
}

/// Sensor health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Critical,
    Warning,
    Normal,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 3] = [
        SensorStatus::Critical,
        SensorStatus::Warning,
        SensorStatus::Normal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Critical => "Crítico",
            SensorStatus::Warning => "Atenção",
            SensorStatus::Normal => "Normal",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            SensorStatus::Critical => BadgeVariant::Destructive,
            SensorStatus::Warning => BadgeVariant::Outline,
            SensorStatus::Normal => BadgeVariant::Default,
        }
    }

    /// Marker class; critical and warning markers pulse
    pub fn marker_class(&self) -> &'static str {
        match self {
            SensorStatus::Critical => "bg-red-500 text-white ring-4 ring-red-500/30 animate-pulse",
            SensorStatus::Warning => "bg-amber-500 text-white ring-4 ring-amber-500/30 animate-pulse",
            SensorStatus::Normal => "bg-green-500 text-white",
        }
    }

    /// Colour of the legend dot
    pub fn dot_class(&self) -> &'static str {
        match self {
            SensorStatus::Critical => "bg-red-500",
            SensorStatus::Warning => "bg-amber-500",
            SensorStatus::Normal => "bg-green-500",
        }
    }
}

/// Visual style of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Destructive,
    Outline,
    Default,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Destructive => "bg-red-500 text-white border-transparent",
            BadgeVariant::Outline => "bg-transparent text-amber-400 border-amber-500/50",
            BadgeVariant::Default => "bg-slate-200 text-slate-900 border-transparent",
        }
    }
}

/// Position on the floor plan, in percent of width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Inline style placing a marker centred on this point
    pub fn marker_style(&self) -> String {
        format!(
            "left: {}%; top: {}%; transform: translate(-50%, -50%);",
            self.x, self.y
        )
    }
}

/// A sensor on the plant map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: String,
    pub name: String,
    pub category: SensorCategory,
    pub status: SensorStatus,
    /// Display value, already formatted with its unit
    pub value: String,
    pub position: Position,
    #[serde(default)]
    pub risk: Option<String>,
}

impl Sensor {
    fn new(
        id: &str,
        name: &str,
        category: SensorCategory,
        status: SensorStatus,
        value: &str,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            status,
            value: value.to_string(),
            position: Position { x, y },
            risk: None,
        }
    }

    fn with_risk(mut self, risk: &str) -> Self {
        self.risk = Some(risk.to_string());
        self
    }
}

/// The sensors installed in the monitored store
pub fn mock_sensors() -> Vec<Sensor> {
    vec![
        Sensor::new(
            "temp001",
            "Sensor Temp. Câmara Fria 1",
            SensorCategory::Temperature,
            SensorStatus::Critical,
            "8°C",
            15.0,
            25.0,
        )
        .with_risk("Produto em risco - Temperatura acima do limite"),
        Sensor::new(
            "temp002",
            "Sensor Temp. Câmara Fria 2",
            SensorCategory::Temperature,
            SensorStatus::Normal,
            "2°C",
            45.0,
            25.0,
        ),
        Sensor::new(
            "hum001",
            "Sensor Umidade Estoque",
            SensorCategory::Humidity,
            SensorStatus::Warning,
            "75%",
            75.0,
            40.0,
        )
        .with_risk("Umidade elevada - Monitorar"),
        Sensor::new(
            "air001",
            "Qualidade do Ar Área Vendas",
            SensorCategory::Air,
            SensorStatus::Normal,
            "Boa",
            30.0,
            70.0,
        ),
        Sensor::new(
            "energy001",
            "Monitor Energia Equipamentos",
            SensorCategory::Energy,
            SensorStatus::Normal,
            "Normal",
            60.0,
            80.0,
        ),
    ]
}

/// A named background area of the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantZone {
    pub name: &'static str,
    /// Absolute placement and size within the plan
    pub placement: &'static str,
    pub color: &'static str,
}

/// Floor plan zones, drawn beneath the sensor markers
pub const PLANT_ZONES: [PlantZone; 5] = [
    PlantZone {
        name: "Câmara Fria 1",
        placement: "top-4 left-4 w-32 h-20",
        color: "bg-blue-100 border-blue-300 text-blue-700",
    },
    PlantZone {
        name: "Câmara Fria 2",
        placement: "top-4 left-40 w-32 h-20",
        color: "bg-blue-100 border-blue-300 text-blue-700",
    },
    PlantZone {
        name: "Estoque",
        placement: "top-4 right-4 w-32 h-24",
        color: "bg-orange-100 border-orange-300 text-orange-700",
    },
    PlantZone {
        name: "Área de Vendas",
        placement: "bottom-16 left-4 right-4 h-16",
        color: "bg-green-100 border-green-300 text-green-700",
    },
    PlantZone {
        name: "Energia",
        placement: "bottom-4 right-4 w-20 h-8",
        color: "bg-yellow-100 border-yellow-300 text-yellow-700",
    },
];

/// Which sensor the detail panel shows.
///
/// Hover and click write the same slot, so the last interaction wins;
/// leaving a marker clears it even after a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorFocus {
    focused: Option<String>,
}

impl SensorFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&mut self, sensor_id: &str) {
        self.focused = Some(sensor_id.to_string());
    }

    pub fn leave(&mut self) {
        self.focused = None;
    }

    pub fn click(&mut self, sensor_id: &str) {
        self.focused = Some(sensor_id.to_string());
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Resolve the focused sensor against a sensor list
    pub fn focused<'a>(&self, sensors: &'a [Sensor]) -> Option<&'a Sensor> {
        let id = self.focused_id()?;
        sensors.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sensors() {
        let sensors = mock_sensors();
        assert_eq!(sensors.len(), 5);

        let ids: Vec<_> = sensors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["temp001", "temp002", "hum001", "air001", "energy001"]);

        let with_risk: Vec<_> = sensors
            .iter()
            .filter(|s| s.risk.is_some())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(with_risk, vec!["temp001", "hum001"]);

        for sensor in &sensors {
            assert!((0.0..=100.0).contains(&sensor.position.x));
            assert!((0.0..=100.0).contains(&sensor.position.y));
        }
    }

    #[test]
    fn test_marker_style_centres_on_position() {
        let style = Position { x: 15.0, y: 25.0 }.marker_style();
        assert_eq!(style, "left: 15%; top: 25%; transform: translate(-50%, -50%);");
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(SensorStatus::Critical.badge(), BadgeVariant::Destructive);
        assert_eq!(SensorStatus::Warning.badge(), BadgeVariant::Outline);
        assert_eq!(SensorStatus::Normal.badge(), BadgeVariant::Default);
        assert_eq!(SensorStatus::Critical.label(), "Crítico");
        assert_eq!(SensorStatus::Warning.label(), "Atenção");
    }

    #[test]
    fn test_only_alerting_markers_pulse() {
        assert!(SensorStatus::Critical.marker_class().contains("animate-pulse"));
        assert!(SensorStatus::Warning.marker_class().contains("animate-pulse"));
        assert!(!SensorStatus::Normal.marker_class().contains("animate-pulse"));
    }

    #[test]
    fn test_hover_then_leave() {
        let sensors = mock_sensors();
        let mut focus = SensorFocus::new();
        assert!(focus.focused(&sensors).is_none());

        focus.hover("hum001");
        assert_eq!(focus.focused(&sensors).map(|s| s.name.as_str()), Some("Sensor Umidade Estoque"));

        focus.leave();
        assert!(focus.focused(&sensors).is_none());
    }

    #[test]
    fn test_click_matches_hover() {
        let sensors = mock_sensors();
        let mut hovered = SensorFocus::new();
        let mut clicked = SensorFocus::new();

        hovered.hover("temp001");
        clicked.click("temp001");
        assert_eq!(hovered.focused(&sensors), clicked.focused(&sensors));
        assert_eq!(
            clicked.focused(&sensors).and_then(|s| s.risk.as_deref()),
            Some("Produto em risco - Temperatura acima do limite")
        );
    }

    #[test]
    fn test_last_interaction_wins() {
        let mut focus = SensorFocus::new();
        focus.click("temp001");
        focus.hover("air001");
        assert_eq!(focus.focused_id(), Some("air001"));

        focus.leave();
        assert_eq!(focus.focused_id(), None);
    }

    #[test]
    fn test_unknown_id_resolves_to_nothing() {
        let mut focus = SensorFocus::new();
        focus.click("missing");
        assert!(focus.focused(&mock_sensors()).is_none());
    }
}
