//! String buffer pane rendering

use crate::machine::buffer::StringBuffer;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the string buffer pane: filled slots up to the cursor, with the
/// cursor position marked.
pub fn render_buffer_pane(frame: &mut Frame, area: Rect, buffer: &StringBuffer) {
    let block = Block::default()
        .title(format!(
            " String Buffer ({}/{}) ",
            buffer.cursor(),
            buffer.capacity()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let filled: String = (0..buffer.cursor()).map(|i| buffer.slot(i)).collect();

    let line = Line::from(vec![
        Span::styled(format!(" {}", filled), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled(
            "▏",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
