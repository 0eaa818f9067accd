//! Conditional SQL construction for queries whose filters are all optional.
//!
//! `QueryBuilder` starts from a base `SELECT ... FROM ...` and appends one predicate per
//! present filter. Every value travels as a bound parameter and the placeholder for it is
//! produced at the moment the value is pushed, so the placeholder count always equals the
//! parameter count regardless of which filters were supplied. Placeholders follow the
//! connection's backend: `?` for SQLite and MySQL, `$n` for PostgreSQL.

use sea_orm::{DbBackend, Statement, Value};

pub struct QueryBuilder {
    backend: DbBackend,
    base: String,
    predicates: Vec<String>,
    values: Vec<Value>,
    group_by: Option<String>,
    order_by: Option<String>,
    limit: Option<String>,
    offset: Option<String>,
}

impl QueryBuilder {
    pub fn new(backend: DbBackend, base: impl Into<String>) -> Self {
        Self {
            backend,
            base: base.into(),
            predicates: Vec::new(),
            values: Vec::new(),
            group_by: None,
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Pushes a parameter and returns the placeholder referring to it.
    fn bind(&mut self, value: Value) -> String {
        self.values.push(value);
        match self.backend {
            DbBackend::Postgres => format!("${}", self.values.len()),
            _ => "?".to_string(),
        }
    }

    /// Adds `column = value` when the filter is present.
    ///
    /// A present filter whose value is SQL NULL still contributes the predicate, which then
    /// matches nothing. This is how an unresolved lookup narrows the result to empty.
    pub fn filter_eq<V>(self, column: &str, value: Option<V>) -> Self
    where
        V: Into<Value>,
    {
        self.filter(value, |p| format!("{} = {}", column, p))
    }

    /// Adds `column LIKE '%value%'` when the filter is present.
    pub fn filter_like(self, column: &str, value: Option<&str>) -> Self {
        self.filter(value.map(|v| format!("%{}%", v)), |p| {
            format!("{} LIKE {}", column, p)
        })
    }

    /// Adds the predicate produced by `predicate` from the value's placeholder.
    pub fn filter<V, F>(mut self, value: Option<V>, predicate: F) -> Self
    where
        V: Into<Value>,
        F: FnOnce(&str) -> String,
    {
        if let Some(value) = value {
            let placeholder = self.bind(value.into());
            self.predicates.push(predicate(&placeholder));
        }
        self
    }

    /// Adds one predicate referring to every present value, in order.
    ///
    /// Absent values are skipped. When none is present the predicate is not added.
    pub fn filter_all<F>(mut self, values: Vec<Option<Value>>, predicate: F) -> Self
    where
        F: FnOnce(&[Option<String>]) -> String,
    {
        if values.iter().all(Option::is_none) {
            return self;
        }

        let placeholders: Vec<Option<String>> = values
            .into_iter()
            .map(|value| value.map(|v| self.bind(v)))
            .collect();
        self.predicates.push(predicate(&placeholders));
        self
    }

    pub fn group_by(mut self, expr: &str) -> Self {
        self.group_by = Some(expr.to_string());
        self
    }

    pub fn order_by(mut self, expr: &str) -> Self {
        self.order_by = Some(expr.to_string());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        let placeholder = self.bind((limit as i64).into());
        self.limit = Some(placeholder);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        let placeholder = self.bind((offset as i64).into());
        self.offset = Some(placeholder);
        self
    }

    /// Number of parameters bound so far.
    #[cfg(test)]
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    /// Renders the SQL text without consuming the builder.
    pub fn sql(&self) -> String {
        let mut sql = self.base.clone();

        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group_by);
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }
        if let Some(limit) = &self.limit {
            sql.push_str(" LIMIT ");
            sql.push_str(limit);
        }
        if let Some(offset) = &self.offset {
            sql.push_str(" OFFSET ");
            sql.push_str(offset);
        }

        sql
    }

    pub fn build(self) -> Statement {
        let sql = self.sql();
        Statement::from_sql_and_values(self.backend, sql, self.values)
    }
}

/// Counts the placeholders in rendered SQL for the given backend.
#[cfg(test)]
pub(crate) fn count_placeholders(backend: DbBackend, sql: &str) -> usize {
    match backend {
        DbBackend::Postgres => {
            let bytes = sql.as_bytes();
            (0..bytes.len())
                .filter(|&i| {
                    bytes[i] == b'$' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit())
                })
                .count()
        }
        _ => sql.matches('?').count(),
    }
}
