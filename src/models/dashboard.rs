use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-derived dashboard snapshot for one user.
///
/// Read-only aggregate, replaced in full on every successful fetch.
/// Like the nutrition plan it is never persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub user: String,
    pub cards: Vec<DashboardCard>,
    pub charts: Vec<DashboardChart>,
    pub coach_messages: Vec<CoachMessage>,
    pub today: TodayOverview,
    pub week: WeekSection,
    pub meal_insights: Vec<MealInsight>,
    pub alerts: Vec<DashboardAlert>,
    pub navigation: Vec<NavigationLink>,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub positive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardChart {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    /// Chart payload is passed through untyped; rendering belongs to
    /// the charting layer, not this client.
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Pie,
    #[default]
    Bar,
    Timeline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachMessage {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetric {
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodayOverview {
    pub metrics: Vec<ProgressMetric>,
    pub micronutrients: Vec<String>,
    pub hydration: ProgressMetric,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Above,
    #[default]
    Target,
    Below,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDayStat {
    pub day: String,
    pub calories: f64,
    pub status: DayStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekSection {
    pub bars: Vec<WeeklyDayStat>,
    pub trend_line: Vec<f64>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealInsight {
    pub name: String,
    pub time: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub impact: String,
    pub adjustment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardAlert {
    pub title: String,
    pub detail: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    pub description: String,
    pub icon: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_uses_type_key() {
        let json = r#"{"type": "radar", "title": "Macros", "data": {"axes": 5}}"#;
        let chart: DashboardChart = serde_json::from_str(json).unwrap();
        assert_eq!(chart.kind, ChartKind::Radar);
        assert_eq!(chart.data["axes"], 5);

        let out = serde_json::to_value(&chart).unwrap();
        assert_eq!(out["type"], "radar");
    }

    #[test]
    fn test_dashboard_deserializes_from_api_shape() {
        let json = r##"{
            "user": "julia",
            "cards": [{"label": "Calorias", "value": "1850", "delta": "-150", "positive": true}],
            "charts": [],
            "coach_messages": [{"title": "Bom ritmo", "body": "Continue assim", "severity": "success"}],
            "today": {
                "metrics": [{"label": "Proteína", "current": 90, "target": 130, "unit": "g", "color": "#4CAF50", "icon": "protein"}],
                "micronutrients": ["ferro"],
                "hydration": {"label": "Água", "current": 1.2, "target": 2.5, "unit": "L", "color": "#2196F3", "icon": "water"},
                "insights": ["Faltam 40g de proteína"]
            },
            "week": {
                "bars": [{"day": "seg", "calories": 2100, "status": "target"}],
                "trend_line": [2100.0, 2300.0],
                "highlights": ["Melhor semana do mês"]
            },
            "meal_insights": [],
            "alerts": [{"title": "Sódio alto", "detail": "Acima da meta em 20%", "severity": "warning"}],
            "navigation": [{"label": "Histórico", "description": "Últimos 30 dias", "icon": "history", "href": "/dashboard/history"}],
            "last_updated": "2026-08-20T12:00:00Z"
        }"##;

        let dashboard: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.user, "julia");
        assert!(dashboard.cards[0].positive);
        assert_eq!(dashboard.coach_messages[0].severity, Severity::Success);
        assert_eq!(dashboard.week.bars[0].status, DayStatus::Target);
        assert_eq!(dashboard.alerts[0].severity, Severity::Warning);
    }
}
