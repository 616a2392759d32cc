//! Source pane rendering with assembly syntax highlighting
//!
//! Displays the program listing with line numbers, a highlight on the line
//! about to execute (red when execution halted on it), and token-level
//! colouring for comments, labels, opcodes, registers, and numbers.

use crate::interpreter::decode::Opcode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn is_register_token(token: &str) -> bool {
    let upper = token.to_uppercase();
    if upper == "PC" || upper == "MH" {
        return true;
    }
    match upper.strip_prefix('R') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Token-level highlighting for one assembly line.
fn highlight_asm_line(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();

    // Comment and label lines take a single colour
    if trimmed.starts_with('#') {
        return Line::from(Span::styled(
            line,
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    if trimmed.ends_with(':') {
        return Line::from(Span::styled(
            line,
            Style::default()
                .fg(DEFAULT_THEME.label)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut spans = Vec::new();
    let mut rest = line;
    let mut first_token = true;

    while !rest.is_empty() {
        let token_start = match rest.find(|c: char| !c.is_whitespace()) {
            Some(pos) => pos,
            None => {
                spans.push(Span::raw(rest));
                break;
            }
        };
        if token_start > 0 {
            spans.push(Span::raw(&rest[..token_start]));
            rest = &rest[token_start..];
        }

        let token_end = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        let token = &rest[..token_end];

        let style = if first_token && Opcode::from_token(&token.to_uppercase()).is_some() {
            Style::default()
                .fg(DEFAULT_THEME.opcode)
                .add_modifier(Modifier::BOLD)
        } else if is_register_token(token) {
            Style::default().fg(DEFAULT_THEME.register)
        } else if token.parse::<i64>().is_ok() {
            Style::default().fg(DEFAULT_THEME.number)
        } else if !first_token {
            // Remaining bare identifiers are branch targets
            Style::default().fg(DEFAULT_THEME.label)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };

        spans.push(Span::styled(token, style));
        rest = &rest[token_end..];
        first_token = false;
    }

    Line::from(spans)
}

/// Render the source listing pane.
///
/// `current_line` is the 0-based line the engine will execute next, or the
/// line it halted on when `is_halted` is set.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    current_line: Option<usize>,
    is_halted: bool,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current line inside the visible window
    if let Some(current) = current_line {
        if current < *scroll_offset {
            *scroll_offset = current;
        } else if current >= *scroll_offset + visible_height {
            *scroll_offset = current + 1 - visible_height;
        }
    }
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = current_line == Some(idx);
            let line_num_str = format!("{:4} ", idx + 1);

            let (num_style, overlay) = if is_current && is_halted {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Some(
                        Style::default()
                            .bg(DEFAULT_THEME.error)
                            .fg(ratatui::style::Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Some(Style::default().bg(DEFAULT_THEME.current_line_bg)),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), None)
            };

            let mut content_line = highlight_asm_line(line);
            if let Some(overlay) = overlay {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(overlay);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
