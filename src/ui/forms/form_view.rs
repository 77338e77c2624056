//! Single-field form view

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FormElements, FormKind, FormPhase, Outcome};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form hosted by `kind`
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App, kind: FormKind, palette: &Palette) {
    let form = app.state.forms.get(kind);
    let config = form.config();
    let state = form.state();
    let elements = FormElements::for_kind(kind);

    let container = Block::default()
        .title(format!(" {} ", elements.form.aria_label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    let inner = container.inner(area);
    frame.render_widget(container, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),             // Label
            Constraint::Length(3),             // Input
            Constraint::Length(1),             // Description
            Constraint::Length(1),             // Violations
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Outcome message
            Constraint::Min(0),
        ])
        .split(inner);

    let label = Paragraph::new(Span::styled(
        config.label.clone(),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, chunks[0]);

    draw_field(frame, chunks[1], form, elements.input, palette);

    let description = Paragraph::new(Span::styled(
        config.description(),
        Style::default().fg(palette.muted),
    ));
    frame.render_widget(description, chunks[2]);

    if state.tainted && !state.valid {
        let text = state
            .violations
            .iter()
            .map(|v| v.describe(config))
            .collect::<Vec<_>>()
            .join("; ");
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(palette.error))),
            chunks[3],
        );
    }

    let submit_label = match state.phase {
        FormPhase::Submitting => "Submitting…",
        _ => elements.submit.aria_label,
    };
    let button_width = (submit_label.chars().count() as u16 + 4).min(chunks[4].width);
    let button_area = Rect {
        width: button_width,
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        submit_label,
        true,
        form.submit_enabled(),
        palette,
    );

    if let Some(message) = &state.message {
        let color = match state.last_outcome {
            Outcome::Failure => palette.error,
            _ => palette.success,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(color),
            ))),
            chunks[5],
        );
    }
}
