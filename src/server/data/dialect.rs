//! Backend-specific SQL fragments used by hand-written queries.

use sea_orm::DbBackend;

/// Aggregates the joined `charts` rows (alias `c`) into one text column holding a JSON
/// array of chart objects.
///
/// A song without charts still yields a single element whose fields are all null.
pub fn chart_json_array(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => {
            "json_agg(json_build_object('chart_id', c.chart_id, 'difficulty', c.difficulty, \
             'const', c.chart_const, 'level', c.level, 'num_notes', c.num_notes, \
             'designer', c.designer, 'description', c.description))::text"
        }
        DbBackend::MySql => {
            "CAST(JSON_ARRAYAGG(JSON_OBJECT('chart_id', c.chart_id, 'difficulty', c.difficulty, \
             'const', c.chart_const, 'level', c.level, 'num_notes', c.num_notes, \
             'designer', c.designer, 'description', c.description)) AS CHAR)"
        }
        _ => {
            "json_group_array(json_object('chart_id', c.chart_id, 'difficulty', c.difficulty, \
             'const', c.chart_const, 'level', c.level, 'num_notes', c.num_notes, \
             'designer', c.designer, 'description', c.description))"
        }
    }
}

/// Truncates a timestamp column to its `YYYY-MM-DD` day as text.
pub fn day_bucket(backend: DbBackend, column: &str) -> String {
    match backend {
        DbBackend::Postgres => format!("to_char({}, 'YYYY-MM-DD')", column),
        DbBackend::MySql => format!("DATE_FORMAT({}, '%Y-%m-%d')", column),
        _ => format!("substr({}, 1, 10)", column),
    }
}
