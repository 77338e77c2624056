//! Demo widget views

use crate::state::{
    Article, CardFocus, Carousel, Counter, Feed, FeedStatus, FileCard, Orientation, PageData,
    TagToggle, ThemeMode,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
}

pub fn draw_article(frame: &mut Frame, area: Rect, article: &Article, palette: &Palette) {
    let block = panel("Article", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            article.text.clone(),
            Style::default().fg(palette.text),
        )),
    ];
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        inner.inner(Margin::new(1, 0)),
    );
}

pub fn draw_file_card(frame: &mut Frame, area: Rect, card: &FileCard, palette: &Palette) {
    let block = panel("File Card", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(2),             // Header
            Constraint::Length(3),             // Name input
            Constraint::Length(1),             // Checkbox
            Constraint::Length(BUTTON_HEIGHT), // Footer
            Constraint::Min(0),
        ])
        .split(inner);

    let header = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(palette.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let focused = |part: CardFocus| card.focus == part;
    let border = if focused(CardFocus::Name) {
        palette.accent
    } else {
        palette.muted
    };
    let value = if card.name.is_empty() {
        Span::styled(card.input_placeholder.clone(), Style::default().fg(palette.muted))
    } else {
        Span::styled(card.name.clone(), Style::default().fg(palette.text))
    };
    frame.render_widget(
        Paragraph::new(Line::from(value)).block(
            Block::default()
                .title(format!(" {} ", card.input_label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        ),
        chunks[1],
    );

    let mark = if card.checked { "[x]" } else { "[ ]" };
    let checkbox_style = if focused(CardFocus::Framework) {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{mark} {}", card.checkbox_label),
            checkbox_style,
        )),
        chunks[2],
    );

    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Length(12), Constraint::Min(0)])
        .split(chunks[3]);
    render_button(frame, footer[0], "Cancel", focused(CardFocus::Cancel), true, palette);
    render_button(frame, footer[1], "Deploy", focused(CardFocus::Deploy), true, palette);
}

pub fn draw_server_data(frame: &mut Frame, area: Rect, data: &PageData, palette: &Palette) {
    let block = panel("Server Data", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (feed, chunk) in Feed::ALL.into_iter().zip(chunks.iter()) {
        let (text, color) = match data.get(feed) {
            FeedStatus::Idle => ("Not loaded yet (r to load)".to_string(), palette.muted),
            FeedStatus::Loading => ("Loading…".to_string(), palette.muted),
            FeedStatus::Loaded(text) => (text.trim_end().to_string(), palette.text),
            FeedStatus::Failed(reason) => (reason.clone(), palette.error),
        };
        let title = format!("{} {}", feed.label(), feed.path());
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color)))
                .wrap(Wrap { trim: false })
                .block(panel(&title, palette)),
            *chunk,
        );
    }
}

pub fn draw_counter(frame: &mut Frame, area: Rect, counter: &Counter, palette: &Palette) {
    let block = panel("Counter", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = format!("Clicked {} times", counter.count);
    let width = (label.chars().count() as u16 + 4).min(inner.width);
    let button_area = Rect {
        x: inner.x + 1,
        y: inner.y + 1,
        width,
        height: BUTTON_HEIGHT.min(inner.height),
    };
    render_button(frame, button_area, &label, true, true, palette);
}

pub fn draw_light_switch(frame: &mut Frame, area: Rect, mode: ThemeMode, palette: &Palette) {
    let block = panel("Light Switch", palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let icon = match mode {
        ThemeMode::Dark => "☾",
        ThemeMode::Light => "☀",
    };
    let text = Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(palette.accent)),
        Span::styled(
            format!("{} mode", mode.label()),
            Style::default().fg(palette.text),
        ),
        Span::styled("  (Enter to toggle)", Style::default().fg(palette.muted)),
    ]);
    frame.render_widget(Paragraph::new(text), inner);
}

pub fn draw_carousel(frame: &mut Frame, area: Rect, carousel: &Carousel, palette: &Palette) {
    let title = format!(
        "Carousel: {} ({})",
        carousel.current_slide().unwrap_or("no slides"),
        carousel.orientation.as_str()
    );
    let block = panel(&title, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if carousel.slides.is_empty() {
        return;
    }

    let direction = match carousel.orientation {
        Orientation::Horizontal => Direction::Horizontal,
        Orientation::Vertical => Direction::Vertical,
    };
    let share = 100 / carousel.slides.len() as u32;
    let constraints: Vec<_> = carousel
        .slides
        .iter()
        .map(|_| Constraint::Percentage(share as u16))
        .collect();
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(inner);

    for (idx, slide) in carousel.slides.iter().enumerate() {
        let is_current = idx == carousel.current;
        let border = if is_current {
            palette.accent
        } else {
            palette.muted
        };
        let text_style = if is_current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let widget = Paragraph::new(Span::styled(slide.clone(), text_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(widget, chunks[idx]);
    }
}

pub fn draw_tags(frame: &mut Frame, area: Rect, tags: &TagToggle, palette: &Palette) {
    let block = panel(TagToggle::GROUP_LABEL, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (idx, tag) in tags.tags.iter().enumerate() {
        let active = tags.active.get(idx).copied().unwrap_or(false);
        let mut style = if active {
            Style::default().fg(palette.background).bg(palette.accent)
        } else {
            Style::default().fg(palette.text)
        };
        if idx == tags.cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {tag} "), style));
        spans.push(Span::raw(" "));
    }

    let selected = tags.selected();
    let summary = if selected.is_empty() {
        "No tags selected".to_string()
    } else {
        format!("Selected: {}", selected.join(", "))
    };

    let mut content = vec![
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(summary, Style::default().fg(palette.muted))),
    ];
    if let Some(tag) = tags.tags.get(tags.cursor) {
        content.push(Line::from(Span::styled(
            format!("Enter: {}", TagToggle::item_label(tag)),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(Paragraph::new(content), inner);
}
