//! Register pane rendering

use crate::machine::registers::RegisterFile;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the register pane, one row per register.
pub fn render_registers_pane(frame: &mut Frame, area: Rect, registers: &RegisterFile) {
    let block = Block::default()
        .title(" Registers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines: Vec<Line> = registers
        .iter()
        .map(|(name, value)| {
            let name_style = match name {
                "PC" | "MH" => Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().fg(DEFAULT_THEME.register),
            };
            Line::from(vec![
                Span::styled(format!(" {:<4}", name), name_style),
                Span::styled(
                    format!("{:>12}", value),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
