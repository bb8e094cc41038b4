use crate::models::SessionState;
use rusqlite::{Connection, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// A finished run, as written to the score history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub score: u32,
    pub max_points: u32,
    pub question_count: usize,
    pub answered: usize,
}

impl ScoreRecord {
    pub fn from_state(state: &SessionState, answered: usize) -> Self {
        Self {
            score: state.score,
            max_points: state.max_points(),
            question_count: state.question_count(),
            answered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub id: u64,
    pub score: u32,
    pub max_points: u32,
    pub question_count: usize,
    pub answered: usize,
    pub finished_at: u64,
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

pub fn record_score(conn: &Connection, record: &ScoreRecord) -> Result<u64> {
    record_score_at(conn, record, now())
}

pub fn record_score_at(conn: &Connection, record: &ScoreRecord, finished_at: u64) -> Result<u64> {
    conn.execute(
        "INSERT INTO scores (score, max_points, question_count, answered, finished_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            record.score,
            record.max_points,
            record.question_count,
            record.answered,
            finished_at
        ],
    )?;

    Ok(conn.last_insert_rowid() as u64)
}

pub fn best_score(conn: &Connection) -> Result<u32> {
    conn.query_row("SELECT COALESCE(MAX(score), 0) FROM scores", [], |row| {
        row.get(0)
    })
}

/// Most recent runs first.
pub fn recent_scores(conn: &Connection, limit: usize) -> Result<Vec<ScoreEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, score, max_points, question_count, answered, finished_at
         FROM scores ORDER BY finished_at DESC, id DESC LIMIT ?",
    )?;

    let entries = stmt
        .query_map([limit], |row| {
            Ok(ScoreEntry {
                id: row.get(0)?,
                score: row.get(1)?,
                max_points: row.get(2)?,
                question_count: row.get(3)?,
                answered: row.get(4)?,
                finished_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>>>()?;

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    fn record(score: u32) -> ScoreRecord {
        ScoreRecord {
            score,
            max_points: 100,
            question_count: 10,
            answered: 10,
        }
    }

    #[test]
    fn test_best_score_empty_is_zero() {
        let conn = open_in_memory().unwrap();
        assert_eq!(best_score(&conn).unwrap(), 0);
    }

    #[test]
    fn test_best_score_is_max() {
        let conn = open_in_memory().unwrap();
        record_score(&conn, &record(40)).unwrap();
        record_score(&conn, &record(90)).unwrap();
        record_score(&conn, &record(10)).unwrap();
        assert_eq!(best_score(&conn).unwrap(), 90);
    }

    #[test]
    fn test_recent_scores_newest_first() {
        let conn = open_in_memory().unwrap();
        record_score_at(&conn, &record(10), 1_000).unwrap();
        record_score_at(&conn, &record(20), 3_000).unwrap();
        record_score_at(&conn, &record(30), 2_000).unwrap();

        let recent = recent_scores(&conn, 2).unwrap();
        let scores: Vec<u32> = recent.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![20, 30]);
        assert_eq!(recent[0].finished_at, 3_000);
    }

    #[test]
    fn test_record_returns_row_id() {
        let conn = open_in_memory().unwrap();
        assert_eq!(record_score(&conn, &record(5)).unwrap(), 1);
        assert_eq!(record_score(&conn, &record(6)).unwrap(), 2);
    }

    #[test]
    fn test_record_from_state() {
        let mut state = SessionState::default();
        state.questions = vec![crate::models::Question {
            text: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option: 0,
            points: 25,
        }];
        state.score = 25;

        let record = ScoreRecord::from_state(&state, 1);
        assert_eq!(record.score, 25);
        assert_eq!(record.max_points, 25);
        assert_eq!(record.question_count, 1);
        assert_eq!(record.answered, 1);
    }
}
