//! About tab
//!
//! Static description of the tool plus the effective backend configuration.

use crate::component::Component;
use crate::model::horizon;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct AboutComponent {
    backend_url: String,
}

impl AboutComponent {
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.to_string(),
        }
    }

    fn field(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<16}", label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }
}

impl Component for AboutComponent {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  sequia-tui",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("  Terminal client for the reservoir drought-risk prediction"),
            Line::from("  service. Forecasts monthly reservoir levels under a chosen"),
            Line::from("  climate scenario and classifies the drought risk against"),
            Line::from("  historical thresholds."),
            Line::from(""),
            Self::field("Backend", self.backend_url.clone()),
            Self::field("Version", env!("CARGO_PKG_VERSION").to_string()),
            Self::field("Data ends", horizon::last_observation_label()),
            Line::from(""),
            Line::from(Span::styled(
                "  The forecast comes from a Prophet model trained on historical",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  reservoir volumes; this client only submits requests and",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "  renders the results.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
