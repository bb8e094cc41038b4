use std::time::{Duration, UNIX_EPOCH};
use unicode_width::UnicodeWidthChar;

const DATE_FORMAT_TODAY: &str = "Today %H:%M";
const DATE_FORMAT_YESTERDAY: &str = "Yesterday %H:%M";
const DATE_FORMAT_OTHER: &str = "%Y-%m-%d";

/// Shorten `s` to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push_str("...");
    out
}

/// Countdown display, `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_score_date(timestamp: u64) -> String {
    let finished = UNIX_EPOCH + Duration::from_secs(timestamp);
    let datetime: chrono::DateTime<chrono::Local> = finished.into();

    let today = chrono::Local::now().date_naive();
    let finished_date = datetime.date_naive();

    if finished_date == today {
        datetime.format(DATE_FORMAT_TODAY).to_string()
    } else if finished_date == today - chrono::Duration::days(1) {
        datetime.format(DATE_FORMAT_YESTERDAY).to_string()
    } else {
        datetime.format(DATE_FORMAT_OTHER).to_string()
    }
}

/// Verdict shown on the final screen for a score percentage.
pub fn result_emoji(percentage: u32) -> &'static str {
    match percentage {
        100.. => "🥇",
        80..=99 => "🎉",
        50..=79 => "🙃",
        1..=49 => "🤨",
        0 => "🤦",
    }
}
