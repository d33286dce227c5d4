//! The classification dialog: master-control header, one row per label,
//! and a footer help line.

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use triage_app::AppState;
use triage_core::{Choice, MasterState, MasterStyle};

use super::center_rect;

/// Longest label width the dialog will reserve a column for
const MAX_LABEL_WIDTH: usize = 40;

/// Render the full dialog modal
pub fn render_dialog(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let label_width = label_column_width(state);
    // label + two option columns + borders/padding
    let modal_width = (label_width as u16 + 24).clamp(44, area.width.saturating_sub(2));
    let content_height = state.selection.len() as u16 + 9;
    let modal_height = content_height.min(area.height.saturating_sub(2));

    let modal_area = center_rect(modal_width, modal_height, area);
    frame.render_widget(Clear, modal_area);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Classify items ")
        .title_style(Style::default().fg(Color::Cyan).bold());

    let inner_area = outer_block.inner(modal_area);
    frame.render_widget(outer_block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // master controls header
        Constraint::Min(3),    // rows
        Constraint::Length(2), // footer/help
    ])
    .split(inner_area);

    // Header: the two master controls, aligned over the option columns
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(pad_label("", label_width)),
            Span::styled(
                master_control_text(state, Choice::Gui),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::raw("  "),
            Span::styled(
                master_control_text(state, Choice::Custom),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(""),
    ]);
    frame.render_widget(header, chunks[0]);

    // One row per label
    let items: Vec<ListItem> = state
        .selection
        .labels()
        .enumerate()
        .map(|(i, label)| {
            let choice = state.selection.choice(i);
            let content = Line::from(vec![
                Span::raw(pad_label(label, label_width)),
                Span::styled(
                    format!("   {}   ", radio_mark(choice, Choice::Gui)),
                    option_style(choice, Choice::Gui),
                ),
                Span::styled(
                    format!("    {}", radio_mark(choice, Choice::Custom)),
                    option_style(choice, Choice::Custom),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);

    // Footer - help text
    let footer_text = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Row  "),
        Span::styled("g/c", Style::default().fg(Color::Yellow)),
        Span::raw(" Classify  "),
        Span::styled("G/C", Style::default().fg(Color::Yellow)),
        Span::raw(" All  "),
        Span::styled("x", Style::default().fg(Color::Yellow)),
        Span::raw(" Clear  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Ok  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    let footer = Paragraph::new(footer_text).alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

/// Width of the label column: the widest label, capped
fn label_column_width(state: &AppState) -> usize {
    state
        .selection
        .labels()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
        .clamp(8, MAX_LABEL_WIDTH)
}

/// Pad or truncate a label to the column width
fn pad_label(label: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Radio mark for one option column of a row
fn radio_mark(current: Option<Choice>, column: Choice) -> &'static str {
    if current == Some(column) {
        "(•)"
    } else {
        "( )"
    }
}

fn option_style(current: Option<Choice>, column: Choice) -> Style {
    if current == Some(column) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Header text for a master control, per the configured style
fn master_control_text(state: &AppState, choice: Choice) -> String {
    match state.selection.style() {
        MasterStyle::Checkbox => {
            let mark = if state.selection.master(choice) == MasterState::On {
                "[x]"
            } else {
                "[ ]"
            };
            format!("{mark} {}", choice.as_str())
        }
        MasterStyle::Button => format!("[ {} ]", choice.as_str()),
    }
}
