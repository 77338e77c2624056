//! Error dialog overlay

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render an error dialog centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str, palette: &Palette) {
    let area = frame.area();

    let lines = wrap_text(message, (MAX_WIDTH - 4) as usize);
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max("Press Esc to dismiss".len()) as u16;
    let width = (content_width + 4).min(MAX_WIDTH).min(area.width);
    // title + blank + message + blank + hint + borders
    let height = (lines.len() as u16 + 6).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error)),
        );

    frame.render_widget(dialog, dialog_area);
}

/// Greedy word wrap, measured in characters
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ThemeMode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(palette: &Palette) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, "Failed to submit string", palette))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Position of the first cell of `text` on screen
    fn find(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        let needle: Vec<String> = text.chars().map(String::from).collect();
        for y in 0..area.height {
            let row: Vec<&str> = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            if let Some(x) = row.windows(needle.len()).position(|w| w == needle.as_slice()) {
                return Some((x as u16, y));
            }
        }
        None
    }

    #[test]
    fn test_dialog_follows_palette() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let palette = Palette::for_mode(mode);
            let buffer = render(&palette);

            let (x, y) = find(&buffer, "Esc").unwrap();
            assert_eq!(buffer[(x, y)].fg, palette.accent);
            assert_eq!(buffer[(x, y)].bg, palette.background);

            let (x, y) = find(&buffer, "Failed").unwrap();
            assert_eq!(buffer[(x, y)].fg, palette.text);
        }
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_long_text() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }
}
