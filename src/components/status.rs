//! API status pill
//!
//! Small header widget reflecting the latest health probe.

use crate::model::ApiStatus;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_status_pill(frame: &mut Frame, area: Rect, status: ApiStatus) {
    let pill = Paragraph::new(Line::from(vec![
        Span::styled(
            "● ",
            Style::default()
                .fg(status.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("API {}", status.label())),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(pill, area);
}
