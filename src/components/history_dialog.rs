//! Prediction history overlay
//!
//! Lists past submissions (timestamp, horizon, scenario, resulting risk)
//! most recent first.

use crate::action::Action;
use crate::component::Component;
use crate::model::PredictionHistoryEntry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct HistoryDialog {
    pub selected_index: usize,
}

impl HistoryDialog {
    fn entry_item(entry: &PredictionHistoryEntry) -> ListItem<'static> {
        let level = match entry.user_level {
            Some(level) => format!("{:.0} hm³", level),
            None => "—".to_string(),
        };

        ListItem::new(Line::from(vec![
            Span::styled(
                format!("{}  ", entry.formatted_time()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(format!(
                "{:>2} months  {:<9} level {:<9} ",
                entry.horizon_months,
                entry.scenario.label(),
                level,
            )),
            Span::styled(
                entry.risk.label().to_string(),
                Style::default()
                    .fg(entry.risk.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", entry.formatted_duration()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
    }

    pub fn draw_with_entries(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[PredictionHistoryEntry],
    ) {
        frame.render_widget(Clear, area);
        let background = Block::default().style(Style::default().bg(Color::Reset));
        frame.render_widget(background, area);

        let margin = 2;
        let overlay_area = Rect::new(
            margin,
            margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Prediction history ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        if entries.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  No predictions yet.",
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
                Line::from("  Press h or Esc to close"),
            ])
            .block(block);
            frame.render_widget(empty, overlay_area);
            return;
        }

        let items: Vec<ListItem> = entries.iter().map(Self::entry_item).collect();
        let mut state = ListState::default();
        state.select(Some(self.selected_index.min(entries.len() - 1)));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(list, overlay_area, &mut state);
    }
}

impl Component for HistoryDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('h') | KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs the entry list; the App calls draw_with_entries.
        Ok(())
    }
}
