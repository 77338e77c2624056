//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod showcase;
mod theme;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.state.theme);
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

    let (sidebar_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    // Draw main content based on current view
    let state = &app.state;
    match state.current_view {
        View::StringForm | View::FolderForm | View::ContactForm => {
            if let Some(kind) = state.current_view.form_kind() {
                forms::draw_form(frame, main_area, app, kind, &palette);
            }
        }
        View::Article => showcase::draw_article(frame, main_area, &state.article, &palette),
        View::FileCard => showcase::draw_file_card(frame, main_area, &state.file_card, &palette),
        View::ServerData => {
            showcase::draw_server_data(frame, main_area, &state.page_data, &palette)
        }
        View::Counter => showcase::draw_counter(frame, main_area, &state.counter, &palette),
        View::LightSwitch => {
            showcase::draw_light_switch(frame, main_area, state.theme, &palette)
        }
        View::Carousel => showcase::draw_carousel(frame, main_area, &state.carousel, &palette),
        View::Tags => showcase::draw_tags(frame, main_area, &state.tags, &palette),
    }

    layout::draw_status_bar(frame, status_area, app, &palette);

    if let Some(error) = state.current_error() {
        components::render_error_dialog(frame, error, &palette);
    }
}
