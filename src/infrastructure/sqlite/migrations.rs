use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS articles (
            id TEXT PRIMARY KEY,
            content TEXT NOT NULL,
            companies TEXT NOT NULL DEFAULT '',
            sectors TEXT NOT NULL DEFAULT '',
            vector BLOB NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_articles_created ON articles(created_at);
        "
    ).map_err(|e| format!("Migration failed: {e}"))
}
