//! Song catalog queries.
//!
//! Songs are read together with their charts through a `LEFT JOIN` grouped by song,
//! with the charts aggregated server-side into a JSON array column. Filters on chart
//! attributes use `EXISTS` sub-selects so a matching song still carries all of its charts.

use sea_orm::{ConnectionTrait, DbBackend, DbErr, FromQueryResult};

use crate::server::{
    data::{dialect, query::QueryBuilder},
    model::song::{SongRow, SongSearchParams},
};

#[derive(FromQueryResult)]
struct SongCountRow {
    song_count: i64,
}

/// Song queries over a pool or a transaction.
///
/// `count` followed by `nth` must share one transaction to see a consistent catalog.
pub struct SongRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SongRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Base query selecting songs with their aggregated charts.
    fn song_query(backend: DbBackend, params: &SongSearchParams) -> QueryBuilder {
        let base = format!(
            "SELECT s.song_id, s.game_id, s.title, s.category, s.artist, s.jacket_url, \
             s.video_url, s.bpm_min, s.bpm_max, s.description, s.release_date, \
             {} AS charts \
             FROM songs s LEFT JOIN charts c ON c.song_id = s.song_id",
            dialect::chart_json_array(backend)
        );

        Self::apply_filters(QueryBuilder::new(backend, base), params)
            .group_by("s.song_id")
            .order_by("s.song_id")
    }

    /// Adds one predicate per present filter, all against the `songs` alias `s`.
    fn apply_filters(query: QueryBuilder, params: &SongSearchParams) -> QueryBuilder {
        query
            .filter_like("s.title", params.title.as_deref())
            .filter_eq("s.game_id", params.game_id)
            .filter_like("s.artist", params.artist.as_deref())
            .filter_eq("s.category", params.category.clone())
            .filter(params.level.clone(), |p| {
                format!(
                    "EXISTS (SELECT 1 FROM charts lc WHERE lc.song_id = s.song_id AND lc.level = {})",
                    p
                )
            })
            .filter_all(
                vec![
                    params.const_min.map(Into::into),
                    params.const_max.map(Into::into),
                ],
                |placeholders| {
                    let bounds: Vec<String> = match placeholders {
                        [min, max] => [
                            min.as_ref().map(|min| format!("rc.chart_const >= {}", min)),
                            max.as_ref().map(|max| format!("rc.chart_const <= {}", max)),
                        ]
                        .into_iter()
                        .flatten()
                        .collect(),
                        _ => Vec::new(),
                    };
                    format!(
                        "EXISTS (SELECT 1 FROM charts rc WHERE rc.song_id = s.song_id AND {})",
                        bounds.join(" AND ")
                    )
                },
            )
    }

    /// Searches songs matching every present filter, ordered by song ID.
    ///
    /// # Arguments
    /// - `params` - Sparse filters; none present returns the whole catalog
    ///
    /// # Returns
    /// - `Ok(Vec<SongRow>)` - Matching songs with their aggregated charts
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, params: &SongSearchParams) -> Result<Vec<SongRow>, DbErr> {
        let statement = Self::song_query(self.db.get_database_backend(), params).build();

        let rows = self.db.query_all_raw(statement).await?;

        rows.iter()
            .map(|row| SongRow::from_query_result(row, ""))
            .collect()
    }

    /// Counts songs matching every present filter.
    pub async fn count(&self, params: &SongSearchParams) -> Result<u64, DbErr> {
        let statement = Self::apply_filters(
            QueryBuilder::new(
                self.db.get_database_backend(),
                "SELECT COUNT(*) AS song_count FROM songs s",
            ),
            params,
        )
        .build();

        let count = match self.db.query_one_raw(statement).await? {
            Some(row) => SongCountRow::from_query_result(&row, "")?.song_count,
            None => 0,
        };

        Ok(count.max(0) as u64)
    }

    /// Gets the matching song at a zero-based position in song ID order.
    ///
    /// # Returns
    /// - `Ok(Some(SongRow))` - Song at that position
    /// - `Ok(None)` - Fewer than `index + 1` songs match
    /// - `Err(DbErr)` - Database error during query
    pub async fn nth(&self, params: &SongSearchParams, index: u64) -> Result<Option<SongRow>, DbErr> {
        let statement = Self::song_query(self.db.get_database_backend(), params)
            .limit(1)
            .offset(index)
            .build();

        match self.db.query_one_raw(statement).await? {
            Some(row) => Ok(Some(SongRow::from_query_result(&row, "")?)),
            None => Ok(None),
        }
    }
}
