use super::{draw_header, draw_help, key_hint};
use crate::models::SessionState;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::format_clock;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_start(f: &mut Frame, state: &SessionState) {
    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area);

    let count = state.question_count();
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::styled(
        "Welcome to the Quiz!",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    text.push_line(Line::from(""));

    if count == 0 {
        text.push_line(Line::styled(
            "No questions available.",
            Style::default().fg(Color::Yellow),
        ));
    } else {
        text.push_line(Line::from(format!(
            "{} question{} to test your knowledge",
            count,
            if count == 1 { "" } else { "s" }
        )));
        text.push_line(Line::from(format!(
            "{} points on offer, {} on the clock",
            state.max_points(),
            format_clock(state.session_seconds)
        )));
    }

    if state.high_score > 0 {
        text.push_line(Line::from(""));
        text.push_line(Line::styled(
            format!("Highscore: {} points", state.high_score),
            Style::default().fg(Color::Cyan),
        ));
    }

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    let mut hints = Vec::new();
    if count > 0 {
        hints.extend(key_hint("Enter", " Let's start  "));
    }
    hints.extend(key_hint("q", " Quit"));
    draw_help(f, layout.help_area, hints);
}
