use crate::database::enums::database_drivers::DatabaseDrivers;

/// Quotes a table or column name in the engine's identifier style.
pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

/// Produces `count` bind placeholders in the engine's syntax, starting at
/// position one.
pub fn placeholders(engine: DatabaseDrivers, count: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => {
            vec!["?"; count].join(", ")
        }
        DatabaseDrivers::pgsql => {
            (1..=count).map(|position| format!("${}", position)).collect::<Vec<String>>().join(", ")
        }
    }
}

/// A single bind placeholder at the given one-based position.
pub fn placeholder(engine: DatabaseDrivers, position: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
        DatabaseDrivers::pgsql => format!("${}", position),
    }
}

/// The upsert tail turning an INSERT into insert-or-update on the
/// conflict column.
pub fn upsert_conflict_clause(engine: DatabaseDrivers, conflict_column: &str, update_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|column| {
                    let quoted = quote_identifier(engine, column);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                quote_identifier(engine, conflict_column),
                updates.join(", ")
            )
        }
        DatabaseDrivers::mysql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|column| {
                    let quoted = quote_identifier(engine, column);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

/// The paging tail for chunked full-table loads.
pub fn limit_offset(engine: DatabaseDrivers, start: u64, length: u64) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("LIMIT {}, {}", start, length),
        DatabaseDrivers::pgsql => format!("LIMIT {} OFFSET {}", length, start),
    }
}

/// Builds the column list of a SELECT or INSERT, quoted per engine.
pub fn column_list(engine: DatabaseDrivers, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|column| quote_identifier(engine, column))
        .collect::<Vec<String>>()
        .join(", ")
}

pub fn engine_name(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "sqlite3",
        DatabaseDrivers::mysql => "mysql",
        DatabaseDrivers::pgsql => "pgsql",
    }
}
