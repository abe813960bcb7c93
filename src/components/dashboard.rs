//! Dashboard summary panel
//!
//! Key figures derived client-side from the last forecast: overall risk,
//! drought outlook, minimum predicted level, drought months.

use crate::component::Component;
use crate::model::forecast::{PredictionResponse, RiskLevel, Thresholds};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Figures shown on the dashboard tab
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub risk: RiskLevel,
    pub drought_probable: bool,
    pub horizon_months: usize,
    pub min_level: f64,
    pub min_level_month: String,
    pub drought_months: usize,
    pub first_drought_month: Option<String>,
    pub thresholds: Option<Thresholds>,
}

/// Compute the dashboard figures from a response. Returns `None` when the
/// forecast is empty; there is nothing meaningful to summarize.
pub fn summarize(response: &PredictionResponse) -> Option<DashboardSummary> {
    let min = response
        .prediccion_mensual
        .iter()
        .min_by(|a, b| a.nivel.total_cmp(&b.nivel))?;

    let drought_months = response
        .prediccion_mensual
        .iter()
        .filter(|m| m.es_sequia)
        .count();

    let first_drought_month = response
        .prediccion_mensual
        .iter()
        .find(|m| m.es_sequia)
        .map(|m| m.fecha.clone());

    Some(DashboardSummary {
        risk: response.riesgo_general,
        drought_probable: response.sequia_probable,
        horizon_months: response.prediccion_mensual.len(),
        min_level: min.nivel,
        min_level_month: min.fecha.clone(),
        drought_months,
        first_drought_month,
        thresholds: response.umbrales,
    })
}

pub struct DashboardComponent {
    summary: Option<DashboardSummary>,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self { summary: None }
    }

    pub fn set_response(&mut self, response: &PredictionResponse) {
        self.summary = summarize(response);
    }

    pub fn clear(&mut self) {
        self.summary = None;
    }

    fn field(label: &str, value: String, value_style: Style) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<24}", label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(value, value_style),
        ])
    }

    fn content(&self) -> Vec<Line<'static>> {
        let Some(ref summary) = self.summary else {
            return vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Run a prediction to populate the dashboard.",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
        };

        let plain = Style::default().fg(Color::White);
        let mut lines = vec![
            Line::from(""),
            Self::field(
                "Overall risk",
                summary.risk.label().to_string(),
                Style::default()
                    .fg(summary.risk.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Self::field(
                "Drought probable",
                if summary.drought_probable { "yes" } else { "no" }.to_string(),
                if summary.drought_probable {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                },
            ),
            Self::field(
                "Forecast horizon",
                format!("{} months", summary.horizon_months),
                plain,
            ),
            Line::from(""),
            Self::field(
                "Minimum level",
                format!("{:.1} hm³ in {}", summary.min_level, summary.min_level_month),
                plain,
            ),
            Self::field(
                "Drought months",
                format!("{} of {}", summary.drought_months, summary.horizon_months),
                plain,
            ),
        ];

        if let Some(ref month) = summary.first_drought_month {
            lines.push(Self::field(
                "First drought month",
                month.clone(),
                Style::default().fg(Color::Red),
            ));
        }

        if let Some(thresholds) = summary.thresholds {
            lines.push(Line::from(""));
            lines.push(Self::field(
                "Drought threshold (p10)",
                format!("{:.1} hm³", thresholds.p10),
                plain,
            ));
            lines.push(Self::field(
                "Low-level threshold (p25)",
                format!("{:.1} hm³", thresholds.p25),
                plain,
            ));
        }

        lines
    }
}

impl Component for DashboardComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let paragraph = Paragraph::new(self.content()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dashboard ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forecast::MonthlyForecast;

    fn month(fecha: &str, nivel: f64, es_sequia: bool) -> MonthlyForecast {
        MonthlyForecast {
            fecha: fecha.to_string(),
            nivel,
            estado: if es_sequia { "Sequía" } else { "Normal" }.to_string(),
            es_sequia,
            nivel_bajo: es_sequia,
        }
    }

    #[test]
    fn test_summary_finds_minimum_and_droughts() {
        let response = PredictionResponse {
            riesgo_general: RiskLevel::Alto,
            sequia_probable: true,
            prediccion_mensual: vec![
                month("2025-01", 620.0, false),
                month("2025-02", 480.5, true),
                month("2025-03", 455.2, true),
                month("2025-04", 510.0, false),
            ],
            umbrales: Some(Thresholds { p10: 470.0, p25: 540.0 }),
        };

        let summary = summarize(&response).unwrap();
        assert_eq!(summary.risk, RiskLevel::Alto);
        assert!(summary.drought_probable);
        assert_eq!(summary.horizon_months, 4);
        assert_eq!(summary.min_level, 455.2);
        assert_eq!(summary.min_level_month, "2025-03");
        assert_eq!(summary.drought_months, 2);
        assert_eq!(summary.first_drought_month.as_deref(), Some("2025-02"));
        assert_eq!(summary.thresholds.unwrap().p25, 540.0);
    }

    #[test]
    fn test_empty_forecast_has_no_summary() {
        let response = PredictionResponse {
            riesgo_general: RiskLevel::Bajo,
            sequia_probable: false,
            prediccion_mensual: vec![],
            umbrales: None,
        };
        assert!(summarize(&response).is_none());
    }

    #[test]
    fn test_no_drought_months_reports_none() {
        let response = PredictionResponse {
            riesgo_general: RiskLevel::Bajo,
            sequia_probable: false,
            prediccion_mensual: vec![month("2025-01", 700.0, false)],
            umbrales: None,
        };

        let summary = summarize(&response).unwrap();
        assert_eq!(summary.drought_months, 0);
        assert!(summary.first_drought_month.is_none());
    }
}
