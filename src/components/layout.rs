//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub status: Rect,
    pub banner: Option<Rect>,
    pub content: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the main screen layout: a header row with the tab bar and the
/// API status pill, an optional error banner, the active tab's content, and
/// the key hint bar.
pub fn calculate_main_layout(area: Rect, has_banner: bool) -> MainLayout {
    let main_chunks = if has_banner {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area)
    };

    // Header: tabs on the left, status pill on the right
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(main_chunks[0]);

    let (banner, content, help) = if has_banner {
        (Some(main_chunks[1]), main_chunks[2], main_chunks[3])
    } else {
        (None, main_chunks[1], main_chunks[2])
    };

    MainLayout {
        tabs: header_chunks[0],
        status: header_chunks[1],
        banner,
        content,
        help,
    }
}

/// Split the forecast tab into the form panel and the results panel.
pub fn forecast_split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_in_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
    }

    #[test]
    fn test_centered_popup_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(area, 40, 10);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_banner_row_is_reserved_when_present() {
        let area = Rect::new(0, 0, 120, 40);
        let without = calculate_main_layout(area, false);
        let with = calculate_main_layout(area, true);

        assert!(without.banner.is_none());
        assert_eq!(with.banner.unwrap().height, 1);
        assert_eq!(with.content.height + 1, without.content.height);
    }
}
