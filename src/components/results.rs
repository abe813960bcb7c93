//! Forecast results table
//!
//! Renders one row per forecast month, in the order the backend returned
//! them, with content-derived column widths and a scrollbar when needed.

use crate::action::Action;
use crate::component::Component;
use crate::model::forecast::{MonthlyForecast, PredictionResponse};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["Month", "Level (hm³)", "Status", "Drought", "Low level"];

pub struct ResultsComponent {
    response: Option<PredictionResponse>,
    scroll: usize,
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            response: None,
            scroll: 0,
        }
    }

    pub fn set_response(&mut self, response: PredictionResponse) {
        self.response = Some(response);
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.response = None;
        self.scroll = 0;
    }

    fn row_cells(month: &MonthlyForecast) -> [String; 5] {
        [
            month.fecha.clone(),
            format!("{:.1}", month.nivel),
            month.estado.clone(),
            if month.es_sequia { "yes" } else { "no" }.to_string(),
            if month.nivel_bajo { "yes" } else { "no" }.to_string(),
        ]
    }

    /// Build the table lines: header, separator, one line per month.
    pub fn build_table_lines(response: &PredictionResponse) -> Vec<Line<'static>> {
        let rows: Vec<[String; 5]> = response
            .prediccion_mensual
            .iter()
            .map(Self::row_cells)
            .collect();

        let mut col_widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.width());
            }
        }

        let mut lines = Vec::new();

        let header_spans: Vec<Span> = HEADERS
            .iter()
            .enumerate()
            .flat_map(|(i, h)| {
                vec![
                    Span::styled(
                        format!("{:width$}", h, width = col_widths[i]),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" │ "),
                ]
            })
            .collect();
        lines.push(Line::from(header_spans));

        let separator: String = col_widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        lines.push(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        )));

        for (row, month) in rows.iter().zip(&response.prediccion_mensual) {
            let row_style = if month.es_sequia {
                Style::default().fg(Color::Red)
            } else if month.nivel_bajo {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let row_spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(i, cell)| {
                    vec![
                        Span::styled(
                            format!("{:width$}", cell, width = col_widths[i]),
                            row_style,
                        ),
                        Span::raw(" │ "),
                    ]
                })
                .collect();
            lines.push(Line::from(row_spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("Overall risk: {}", response.riesgo_general.label()),
                Style::default()
                    .fg(response.riesgo_general.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {} months forecast", response.prediccion_mensual.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        lines
    }

    fn placeholder_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No forecast yet",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Fill in the form and press Predict.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for ResultsComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let total = self
            .response
            .as_ref()
            .map(|r| r.prediccion_mensual.len())
            .unwrap_or(0);
        let max_scroll = total.saturating_sub(1);

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + 10).min(max_scroll);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = match self.response {
            Some(ref response) => Self::build_table_lines(response),
            None => Self::placeholder_lines(),
        };
        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Monthly forecast ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        let total = content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::forecast::RiskLevel;

    fn response(months: &[&str]) -> PredictionResponse {
        PredictionResponse {
            riesgo_general: RiskLevel::Moderado,
            sequia_probable: false,
            prediccion_mensual: months
                .iter()
                .enumerate()
                .map(|(i, fecha)| MonthlyForecast {
                    fecha: fecha.to_string(),
                    nivel: 600.0 - i as f64 * 10.0,
                    estado: "Normal".to_string(),
                    es_sequia: false,
                    nivel_bajo: false,
                })
                .collect(),
            umbrales: None,
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_one_row_per_month_in_input_order() {
        let response = response(&["2025-01", "2025-02", "2025-03"]);
        let lines = ResultsComponent::build_table_lines(&response);

        // header + separator + rows
        let row_lines: Vec<String> = lines[2..2 + 3].iter().map(line_text).collect();
        assert_eq!(row_lines.len(), 3);
        assert!(row_lines[0].contains("2025-01"));
        assert!(row_lines[1].contains("2025-02"));
        assert!(row_lines[2].contains("2025-03"));
    }

    #[test]
    fn test_footer_shows_overall_risk() {
        let response = response(&["2025-01"]);
        let lines = ResultsComponent::build_table_lines(&response);
        let all: String = lines.iter().map(line_text).collect();
        assert!(all.contains("Moderado"));
        assert!(all.contains("1 months forecast"));
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut results = ResultsComponent::new();
        results.set_response(response(&["2025-01", "2025-02"]));

        results.update(Action::PageDown).unwrap();
        assert_eq!(results.scroll, 1);
        results.update(Action::ScrollDown).unwrap();
        assert_eq!(results.scroll, 1);
        results.update(Action::PageUp).unwrap();
        assert_eq!(results.scroll, 0);
        results.update(Action::ScrollUp).unwrap();
        assert_eq!(results.scroll, 0);
    }

    #[test]
    fn test_new_response_resets_scroll() {
        let mut results = ResultsComponent::new();
        results.set_response(response(&["2025-01", "2025-02", "2025-03"]));
        results.update(Action::ScrollDown).unwrap();
        assert_eq!(results.scroll, 1);

        results.set_response(response(&["2025-01"]));
        assert_eq!(results.scroll, 0);
    }
}
