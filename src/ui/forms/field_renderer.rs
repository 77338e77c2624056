//! Field rendering utilities for forms

use crate::state::{Element, FormMachine};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the input box of a form, titled with its accessibility label
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormMachine,
    input: Element,
    palette: &Palette,
) {
    let state = form.state();
    let invalid = state.tainted && !state.valid;

    let border_style = if invalid {
        Style::default().fg(palette.error)
    } else {
        Style::default().fg(palette.accent)
    };

    let content = if state.value.is_empty() {
        Span::styled(
            form.config().placeholder.clone(),
            Style::default().fg(palette.muted),
        )
    } else {
        Span::styled(state.value.clone(), Style::default().fg(palette.text))
    };
    let cursor = Span::styled("▌", Style::default().fg(palette.accent));

    let line = if state.value.is_empty() {
        Line::from(vec![cursor, content])
    } else {
        Line::from(vec![content, cursor])
    };

    let block = Block::default()
        .title(format!(" {} ", input.aria_label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
