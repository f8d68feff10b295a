use crate::{
    error::{SqlError, SqlResult},
    sql::utility::{escape_like, get_argument_parameter, get_identifier},
    value::Value,
};

/// Builder for single-table SELECT statements.
///
/// Conditions are rendered in the order they were added and joined with `AND`.
/// The LIMIT placeholder, if any, always takes the last argument slot.
#[derive(Debug, Clone)]
pub struct SqlSelectBuilder {
    table: String,
    columns: Vec<String>,
    conditions: Vec<SqlCondition>,
    limit: Option<u32>,
}

#[derive(Debug, Clone)]
enum SqlCondition {
    Equal(String, Value),
    Any(String, Vec<Value>),
    Contains(String, String),
}

/// Select SQL statement.
#[derive(Debug, Clone)]
pub struct SqlSelectStatement {
    /// Complete statement text.
    pub sql: String,
    /// WHERE clause, without the keyword.
    pub where_clause: Option<String>,
    /// LIMIT clause.
    pub limit_clause: Option<String>,
    /// Arguments, in placeholder order.
    pub arguments: Vec<Value>,
    /// Number of conditions joined in the WHERE clause.
    pub condition_count: usize,
}

impl SqlSelectBuilder {
    /// Creates a new select builder for the given table.
    pub fn new<S: Into<String>>(table: S) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            conditions: Vec::new(),
            limit: None,
        }
    }

    /// Sets selected columns. An empty list selects `*`.
    pub fn set_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds `column = value`.
    pub fn add_equal<S: Into<String>, V: Into<Value>>(&mut self, column: S, value: V) -> &mut Self {
        self.conditions
            .push(SqlCondition::Equal(column.into(), value.into()));
        self
    }

    /// Adds `column = ANY(values)`. The values are bound as one array.
    pub fn add_any<S, I, V>(&mut self, column: S, values: I) -> &mut Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.conditions.push(SqlCondition::Any(
            column.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Adds a case-insensitive substring match on `column`.
    ///
    /// The pattern is bound as `%needle%`, with LIKE wildcards inside the
    /// needle escaped so they match literally.
    pub fn add_contains<S: Into<String>, N: Into<String>>(
        &mut self,
        column: S,
        needle: N,
    ) -> &mut Self {
        self.conditions
            .push(SqlCondition::Contains(column.into(), needle.into()));
        self
    }

    /// Sets the row-count cap.
    pub const fn set_limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Builds the statement.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is empty, a set condition has no
    /// values or a substring condition has an empty needle.
    pub fn build(&self) -> SqlResult<SqlSelectStatement> {
        if self.table.is_empty() {
            return Err(SqlError::MissingTable);
        }

        let mut arguments = Vec::new();

        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns
                .iter()
                .map(|column| get_identifier(column))
                .collect::<SqlResult<Vec<_>>>()?
                .join(", ")
        };
        let mut sql = format!("SELECT {columns} FROM {}", get_identifier(&self.table)?);

        let where_clause = if self.conditions.is_empty() {
            None
        } else {
            let mut parts = Vec::with_capacity(self.conditions.len());
            for condition in &self.conditions {
                parts.push(build_condition(condition, &mut arguments)?);
            }
            Some(parts.join(" AND "))
        };
        if let Some(where_clause) = &where_clause {
            sql.push_str(" WHERE ");
            sql.push_str(where_clause);
        }

        let limit_clause = self.limit.map(|limit| {
            let parameter = push_argument(&mut arguments, limit.into());
            format!("LIMIT {parameter}")
        });
        if let Some(limit_clause) = &limit_clause {
            sql.push(' ');
            sql.push_str(limit_clause);
        }

        Ok(SqlSelectStatement {
            sql,
            where_clause,
            limit_clause,
            arguments,
            condition_count: self.conditions.len(),
        })
    }
}

fn build_condition(condition: &SqlCondition, arguments: &mut Vec<Value>) -> SqlResult<String> {
    match condition {
        SqlCondition::Equal(column, value) => {
            let column = get_identifier(column)?;
            let parameter = push_argument(arguments, value.clone());
            Ok(format!("{column} = {parameter}"))
        }
        SqlCondition::Any(column, values) => {
            if values.is_empty() {
                return Err(SqlError::EmptyValueSet(column.clone()));
            }
            let column = get_identifier(column)?;
            let parameter = push_argument(arguments, Value::Repeated(values.clone()));
            Ok(format!("{column} = ANY({parameter})"))
        }
        SqlCondition::Contains(column, needle) => {
            if needle.is_empty() {
                return Err(SqlError::EmptyPattern(column.clone()));
            }
            let column = get_identifier(column)?;
            let pattern = format!("%{}%", escape_like(needle));
            let parameter = push_argument(arguments, pattern.into());
            Ok(format!("{column} ILIKE {parameter}"))
        }
    }
}

fn push_argument(arguments: &mut Vec<Value>, value: Value) -> String {
    arguments.push(value);
    get_argument_parameter(arguments.len())
}

#[cfg(feature = "postgres")]
const _: () = {
    use postgres_types::ToSql;

    impl SqlSelectStatement {
        /// Gets the SQL parameters for the statement.
        pub fn get_sql_params(&self) -> Vec<&(dyn ToSql + Sync)> {
            self.arguments.iter().collect()
        }
    }
};
