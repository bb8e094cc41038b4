use super::{draw_header, draw_help, key_hint};
use crate::db::scores::ScoreEntry;
use crate::models::SessionState;
use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{format_score_date, result_emoji};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_finished(f: &mut Frame, state: &SessionState, recent: &[ScoreEntry]) {
    let layout = calculate_screen_chunks(f.area());
    draw_header(f, layout.header_area);

    let percentage = state.percentage();
    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::styled(
        format!(
            "{} You scored {} out of {} ({}%)",
            result_emoji(percentage),
            state.score,
            state.max_points(),
            percentage
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("(Highscore: {} points)", state.high_score)));
    if state.seconds_remaining == 0 {
        text.push_line(Line::styled(
            "Time ran out!",
            Style::default().fg(Color::Red),
        ));
    }

    if !recent.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::styled(
            "Recent scores",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for entry in recent {
            text.push_line(Line::from(format!(
                "{} - {} / {} points ({} of {} answered)",
                format_score_date(entry.finished_at),
                entry.score,
                entry.max_points,
                entry.answered,
                entry.question_count
            )));
        }
    }

    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Results"));
    f.render_widget(body, layout.content_area);

    let mut hints = key_hint("r", " Restart quiz  ");
    hints.extend(key_hint("q", " Quit"));
    draw_help(f, layout.help_area, hints);
}
