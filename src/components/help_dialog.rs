//! Help dialog listing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Switch tab"),
    ("↑ / ↓", "Move between form fields"),
    ("← / → / Space", "Cycle the climate scenario"),
    ("Enter", "Next field, or submit on the Predict button"),
    ("j / k", "Scroll the results table"),
    ("Ctrl-d / Ctrl-u", "Page the results table"),
    ("r", "Re-check backend health"),
    ("y", "Export the forecast as a text report"),
    ("h", "Prediction history"),
    ("c", "Clear the form and result"),
    ("?", "This help"),
    ("q / Esc", "Quit"),
];

/// Help overlay, scrollable for short terminals
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollDown => {
                if self.scroll_offset + 1 < BINDINGS.len() {
                    self.scroll_offset += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let height = (BINDINGS.len() as u16 + 4).min(area.height);
        let popup_area = centered_popup(area, 56, height);

        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        for (keys, description) in BINDINGS.iter().skip(self.scroll_offset) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", keys),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw((*description).to_string()),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Keyboard shortcuts ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
