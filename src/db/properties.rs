use crate::db::connection::Database;
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use rusqlite::{params, Row};

/// Hard cap on rows returned by any search.
pub const MAX_ROWS: usize = 100;

const SQL_ALL: &str = r#"
    SELECT name, station, price, age, floor_plan
    FROM properties
    LIMIT ?1
"#;

// SQLite LIKE folds ASCII case only.
const SQL_LIKE: &str = r#"
    SELECT name, station, price, age, floor_plan
    FROM properties
    WHERE station LIKE ?1 ESCAPE '\' OR name LIKE ?1 ESCAPE '\'
    LIMIT ?2
"#;

const SQL_INSTR: &str = r#"
    SELECT name, station, price, age, floor_plan
    FROM properties
    WHERE instr(station, ?1) > 0 OR instr(name, ?1) > 0
    LIMIT ?2
"#;

/// Search listings whose station or name contains `keyword`.
///
/// Only an empty keyword returns the first page unfiltered; whitespace is
/// part of the substring like any other character.
/// Never returns more than [`MAX_ROWS`] rows.
pub fn search_properties(
    db: &Database,
    keyword: &str,
    case_sensitive: bool,
) -> Result<Vec<Listing>, ServerError> {
    let limit = MAX_ROWS as i64;

    let listings = db.with_conn(|conn| {
        let (sql, pattern) = match (keyword.is_empty(), case_sensitive) {
            (true, _) => (SQL_ALL, None),
            (false, false) => (SQL_LIKE, Some(format!("%{}%", escape_like(keyword)))),
            (false, true) => (SQL_INSTR, Some(keyword.to_string())),
        };

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

        let rows = match &pattern {
            Some(p) => stmt.query_map(params![p, limit], row_to_listing),
            None => stmt.query_map(params![limit], row_to_listing),
        }
        .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?);
        }
        Ok(out)
    })?;

    log::debug!(
        "search_properties keyword={keyword:?} case_sensitive={case_sensitive} rows={}",
        listings.len()
    );
    Ok(listings)
}

pub fn count_properties(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM properties", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("Count failed: {e}")))
    })
}

// NULL columns read as empty text / zero.
fn row_to_listing(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
        station: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        price: row.get::<_, Option<i64>>(2)?.unwrap_or_default(),
        age: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
        floor_plan: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

/// Escape LIKE wildcards so the keyword matches literally (`ESCAPE '\'`).
pub fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
