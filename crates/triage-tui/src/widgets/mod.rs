//! Dialog widgets

pub mod dialog;
pub mod warning;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Center a rectangle within another rectangle
pub(crate) fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
