//! Main memory pane rendering
//!
//! Shows a window of memory cells centred on the memory head, with the head
//! cell highlighted. Memory is large (thousands of cells), so only the
//! window around MH is drawn.

use crate::machine::memory::MainMemory;
use crate::machine::Word;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the memory pane with a window centred on the memory head.
pub fn render_memory_pane(frame: &mut Frame, area: Rect, memory: &MainMemory, head: Word) {
    let head_valid = head >= 0 && (head as usize) < memory.len();
    let title = if head_valid {
        format!(" Memory (MH = {}) ", head)
    } else {
        format!(" Memory (MH = {} out of bounds) ", head)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if head_valid {
            DEFAULT_THEME.border_normal
        } else {
            DEFAULT_THEME.error
        }));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total = memory.len();

    // Centre the window on the head, clamped to the address space
    let centre = if head_valid { head as usize } else { 0 };
    let half = visible_height / 2;
    let start = centre
        .saturating_sub(half)
        .min(total.saturating_sub(visible_height));
    let end = (start + visible_height).min(total);

    let lines: Vec<Line> = (start..end)
        .map(|address| {
            let is_head = head_valid && address == head as usize;
            let addr_style = if is_head {
                Style::default()
                    .fg(DEFAULT_THEME.memory_head)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let value_style = if is_head {
                Style::default()
                    .bg(DEFAULT_THEME.memory_head)
                    .fg(ratatui::style::Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.number)
            };
            let marker = if is_head { "▶" } else { " " };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), addr_style),
                Span::styled(format!("{:>5}  ", address), addr_style),
                Span::styled(format!("{:>12}", memory.cell(address)), value_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
