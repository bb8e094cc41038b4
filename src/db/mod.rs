use rusqlite::{Connection, Result};
use std::path::Path;

pub mod scores;

pub fn init_db(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let conn = Connection::open(db_path)?;

    run_migrations(&conn)?;

    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    run_migrations(&conn)?;
    Ok(conn)
}

pub(crate) fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            score INTEGER NOT NULL,
            max_points INTEGER NOT NULL,
            question_count INTEGER NOT NULL,
            answered INTEGER NOT NULL,
            finished_at INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_scores_finished ON scores(finished_at)",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_db_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("scores.db");
        let conn = init_db(&db_path).unwrap();
        assert!(db_path.exists());

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"scores".to_string()));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn test_scores_survive_reopen() {
        use super::scores::{best_score, record_score, ScoreRecord};

        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("scores.db");
        {
            let conn = init_db(&db_path).unwrap();
            record_score(
                &conn,
                &ScoreRecord {
                    score: 70,
                    max_points: 100,
                    question_count: 5,
                    answered: 5,
                },
            )
            .unwrap();
        }

        let conn = init_db(&db_path).unwrap();
        assert_eq!(best_score(&conn).unwrap(), 70);
    }
}
