//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::BUTTON_BAR_HEIGHT;

/// Screen areas of the main view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub tag_list: Rect,
    pub chart: Option<Rect>,
    pub buttons: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Tag list and chart side by side on top, button bar, then a one-line status bar
    #[must_use]
    pub fn main_layout(area: Rect, chart_width_percent: Option<u16>) -> AppLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BUTTON_BAR_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        let (tag_list, chart) = match chart_width_percent {
            Some(percent) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(100 - percent), Constraint::Percentage(percent)])
                    .split(rows[0]);
                (columns[0], Some(columns[1]))
            }
            None => (rows[0], None),
        };

        AppLayout {
            tag_list,
            chart,
            buttons: rows[1],
            status: rows[2],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Place a `width` x `height` popup at `(column, row)`, shifted to stay inside `bounds`
    #[must_use]
    pub fn popup_at(column: u16, row: u16, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let x = column.clamp(bounds.x, bounds.right().saturating_sub(width));
        let y = row.clamp(bounds.y, bounds.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
    }
}
