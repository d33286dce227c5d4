//! Blocking warning overlay for an incomplete commit.
//!
//! Lists the exact labels that are still unclassified so the user can see
//! what remains; any key returns to the dialog.

use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use triage_app::AppState;

use super::center_rect;

/// Labels shown before the list is elided
const MAX_LISTED_LABELS: usize = 8;

/// Render the incomplete-selection warning over the dialog
pub fn render_warning(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let lines = warning_lines(&state.warning_labels);
    let modal_width = 44u16.min(area.width.saturating_sub(2));
    let modal_height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));
    let modal_area = center_rect(modal_width, modal_height, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Incomplete Selection ")
        .title_style(Style::default().fg(Color::Red).bold());

    let text: Vec<Line> = lines
        .into_iter()
        .map(|(text, emphasized)| {
            if emphasized {
                Line::from(Span::styled(text, Style::default().fg(Color::Yellow)))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, modal_area);
}

/// Build the modal's lines: prompt, the missing labels (elided past a
/// limit), and the dismiss hint. Bool marks label lines for emphasis.
fn warning_lines(labels: &[String]) -> Vec<(String, bool)> {
    let mut lines = vec![("Please classify every item:".to_string(), false)];

    for label in labels.iter().take(MAX_LISTED_LABELS) {
        lines.push((label.clone(), true));
    }
    if labels.len() > MAX_LISTED_LABELS {
        lines.push((format!("… and {} more", labels.len() - MAX_LISTED_LABELS), true));
    }

    lines.push((String::new(), false));
    lines.push(("Press any key to continue".to_string(), false));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_lists_every_label_in_order() {
        let labels = vec!["b".to_string(), "a".to_string()];
        let lines = warning_lines(&labels);
        let listed: Vec<_> = lines
            .iter()
            .filter(|(_, emphasized)| *emphasized)
            .map(|(text, _)| text.as_str())
            .collect();
        assert_eq!(listed, vec!["b", "a"]);
    }

    #[test]
    fn test_warning_elides_long_lists() {
        let labels: Vec<String> = (0..12).map(|i| format!("label{i}")).collect();
        let lines = warning_lines(&labels);
        let listed: Vec<_> = lines
            .iter()
            .filter(|(_, emphasized)| *emphasized)
            .map(|(text, _)| text.as_str())
            .collect();
        assert_eq!(listed.len(), MAX_LISTED_LABELS + 1);
        assert_eq!(listed.last().unwrap(), &"… and 4 more");
    }
}
