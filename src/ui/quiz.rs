use super::{draw_header, key_hint};
use crate::models::SessionState;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::format_clock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

const LOW_TIME_SECONDS: u32 = 30;

pub fn draw_quiz(f: &mut Frame, state: &SessionState, highlighted: usize) {
    let layout = calculate_quiz_chunks(f.area());
    draw_header(f, layout.header_area);

    let Some(question) = state.current_question() else {
        return;
    };

    let total = state.question_count();
    let ratio = if total == 0 {
        0.0
    } else {
        state.answered_count() as f64 / total as f64
    };
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "Question {} / {}  -  {} / {} points",
            state.current_index + 1,
            total,
            state.score,
            state.max_points()
        ));
    f.render_widget(progress, layout.progress_area);

    let question_text = Paragraph::new(Text::from(question.text.as_str()))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question_text, layout.question_area);

    let answered = state.selected_option;
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let (marker, style) = match answered {
                None if i == highlighted => (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None => ("  ", Style::default()),
                Some(_) if question.is_correct(i) => (
                    "✓ ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(picked) if picked == i => ("✗ ", Style::default().fg(Color::Red)),
                Some(_) => ("  ", Style::default().fg(Color::DarkGray)),
            };
            ListItem::new(format!("{}{}. {}", marker, i + 1, option)).style(style)
        })
        .collect();

    let options_title = match answered {
        Some(picked) if question.is_correct(picked) => format!("Correct! +{} points", question.points),
        Some(_) => "Wrong answer".to_string(),
        None => format!("Options ({} points)", question.points),
    };
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title(options_title));
    f.render_widget(options, layout.options_area);

    draw_footer(f, layout.footer_area, state);
}

fn draw_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(1)])
        .split(area);

    let timer_style = if state.seconds_remaining <= LOW_TIME_SECONDS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let timer = Paragraph::new(format_clock(state.seconds_remaining))
        .style(timer_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(timer, chunks[0]);

    let mut spans: Vec<Span> = Vec::new();
    if state.has_answered() {
        let next = if state.is_last_question() {
            " Finish  "
        } else {
            " Next  "
        };
        spans.extend(key_hint("Enter", next));
    } else {
        spans.extend(key_hint("1-9", " Answer  "));
        spans.extend(key_hint("↑/↓", " Choose  "));
        spans.extend(key_hint("Enter", " Confirm  "));
    }
    spans.extend(key_hint("f", " Finish early  "));
    spans.extend(key_hint("r", " Restart  "));
    spans.extend(key_hint("q", " Quit"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
