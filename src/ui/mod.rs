mod finished;
pub mod layout;
mod quiz;
mod start;
mod status;

use crate::app::App;
use crate::models::Phase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub use finished::draw_finished;
pub use layout::{calculate_quiz_chunks, calculate_screen_chunks};
pub use quiz::draw_quiz;
pub use start::draw_start;
pub use status::{draw_load_error, draw_loading};

pub const APP_TITLE: &str = "The React Quiz";

/// Render the view for the current phase.
pub fn draw(f: &mut Frame, app: &App) {
    let state = &app.state;
    match state.phase {
        Phase::Loading => draw_loading(f, &app.source),
        Phase::LoadError => draw_load_error(f, &app.source, state.load_error.as_deref()),
        Phase::Ready => draw_start(f, state),
        Phase::Active => draw_quiz(f, state, app.highlighted),
        Phase::Finished => draw_finished(f, state, &app.recent_scores),
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(APP_TITLE)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}

fn draw_help(f: &mut Frame, area: Rect, spans: Vec<Span<'static>>) {
    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
