//! Layout components (sidebar, status bar)

use super::theme::Palette;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 20;

/// Split the screen into sidebar, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the view list
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .map(|view| {
            let style = if *view == app.state.current_view {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Span::styled(format!(" {}", view.label()), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Showcase ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted)),
    );
    frame.render_widget(list, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![Span::styled(
        format!(" {} ", view_hints(app.state.current_view)),
        Style::default().fg(palette.text),
    )];

    if let Some(message) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(palette.success),
        ));
    }

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.status_bar));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn view_hints(view: View) -> &'static str {
    match view {
        View::StringForm | View::FolderForm | View::ContactForm => {
            "Tab:next view  Enter:submit  ^R:reset  ^C:quit"
        }
        View::Article => "Tab:next view  Esc:quit",
        View::FileCard => "Tab:next view  ↑/↓:focus  Enter:press  Space:toggle",
        View::ServerData => "Tab:next view  r:reload",
        View::Counter => "Tab:next view  +/Enter:increment  -:decrement",
        View::LightSwitch => "Tab:next view  Enter:toggle theme",
        View::Carousel => "Tab:next view  ←/→:slide  o:orientation",
        View::Tags => "Tab:next view  ←/→:move  Space:toggle",
    }
}
