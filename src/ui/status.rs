use super::{draw_header, draw_help, key_hint};
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_loading(f: &mut Frame, source: &str) {
    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from("Loading questions..."));
    text.push_line(Line::from(""));
    text.push_line(Line::styled(
        source.to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.content_area);

    draw_help(f, layout.help_area, key_hint("q", " Quit"));
}

pub fn draw_load_error(f: &mut Frame, source: &str, reason: Option<&str>) {
    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::styled(
        "There was an error fetching questions.",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Source: {}", source)));
    if let Some(reason) = reason {
        text.push_line(Line::from(reason.to_string()));
    }

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        );
    f.render_widget(body, layout.content_area);

    draw_help(f, layout.help_area, key_hint("q", " Quit"));
}
