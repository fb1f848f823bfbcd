//! Statement buffer
//!
//! A [`Statement`] accumulates SQL text and bind vars while its clauses are
//! compiled. Writes are append-only: text is never rewritten and vars are
//! never reordered once added.

use crate::clause::{Clause, ClauseKind};
use crate::dialect::{ClauseBuilders, Dialect};
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Schema metadata of the statement's model
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    pub table: String,
    /// Column used when a deterministic ordering has to be synthesized
    pub prioritized_primary_field: Option<String>,
}

impl Schema {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            prioritized_primary_field: None,
        }
    }

    pub fn with_primary_field(mut self, column: &str) -> Self {
        self.prioritized_primary_field = Some(column.to_string());
        self
    }
}

pub struct Statement {
    pub table: String,
    pub schema: Option<Schema>,
    clauses: HashMap<ClauseKind, Clause>,
    sql: String,
    vars: Vec<Value>,
    dialect: Arc<dyn Dialect>,
    clause_builders: ClauseBuilders,
    /// Space owed between clauses, written before the next non-blank text
    pending_separator: bool,
}

impl Statement {
    pub fn new(table: &str, dialect: Arc<dyn Dialect>, clause_builders: ClauseBuilders) -> Self {
        Self {
            table: table.to_string(),
            schema: None,
            clauses: HashMap::new(),
            sql: String::new(),
            vars: Vec::new(),
            dialect,
            clause_builders,
            pending_separator: false,
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Declare a clause, replacing an earlier one of the same kind
    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        let clause = clause.into();
        self.clauses.insert(clause.kind(), clause);
    }

    pub fn has_clause(&self, kind: ClauseKind) -> bool {
        self.clauses.contains_key(&kind)
    }

    pub fn clause(&self, kind: ClauseKind) -> Option<&Clause> {
        self.clauses.get(&kind)
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    pub fn write_str(&mut self, s: &str) {
        self.separate(s.chars().next());
        self.sql.push_str(s);
    }

    pub fn write_char(&mut self, ch: char) {
        self.separate(Some(ch));
        self.sql.push(ch);
    }

    /// Write an identifier through the dialect's quoting
    pub fn write_quoted(&mut self, identifier: &str) {
        self.separate(identifier.chars().next());
        self.dialect.quote_to(&mut self.sql, identifier);
    }

    /// Write the placeholder for `value`, then append it to the vars
    pub fn add_var(&mut self, value: Value) {
        self.separate(None);
        self.dialect
            .bind_var_to(&mut self.sql, self.vars.len(), &value);
        self.vars.push(value);
    }

    /// Comma-separated placeholders for `values`, appended in order
    pub fn add_vars(&mut self, values: &[Value]) {
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                self.write_char(',');
            }
            self.add_var(value.clone());
        }
    }

    /// Write the owed clause separator unless the next text starts blank
    fn separate(&mut self, next: Option<char>) {
        if std::mem::take(&mut self.pending_separator)
            && !next.is_some_and(char::is_whitespace)
        {
            self.sql.push(' ');
        }
    }

    /// Compile the declared clauses among `kinds`, in the given order.
    ///
    /// Each clause is separated from preceding text by a single space. A
    /// registered clause builder takes over its clause; any other clause
    /// uses its default rendering. A WHERE without conditions is skipped.
    pub fn build(&mut self, kinds: &[ClauseKind]) {
        for kind in kinds {
            let Some(clause) = self.clauses.get(kind).cloned() else {
                continue;
            };
            if matches!(&clause, Clause::Where(clause) if clause.exprs.is_empty()) {
                continue;
            }

            self.pending_separator =
                !self.sql.is_empty() && !self.sql.ends_with(char::is_whitespace);

            match (clause, self.clause_builders.get(*kind)) {
                (Clause::Where(clause), Some(builder)) => builder.build_where(&clause, self),
                (Clause::Limit(clause), Some(builder)) => builder.build_limit(&clause, self),
                (clause, _) => clause.build(self),
            }
            self.pending_separator = false;
        }

        #[cfg(feature = "debug-logging")]
        tracing::trace!("[BUILD] {} -> {}", self.table, self.sql);
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn vars(&self) -> &[Value] {
        &self.vars
    }

    /// The statement with its vars inlined, for logging
    pub fn explain(&self) -> String {
        self.dialect.explain(&self.sql, &self.vars)
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.vars)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clause::{Limit, OrderBy, SortOrder, Where};
    use crate::dialect::ClauseBuilder;
    use crate::expression::Expression;

    /// Dialect with `?N` placeholders and no quoting
    pub(crate) struct PlainDialect;

    impl Dialect for PlainDialect {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn bind_var_to(&self, writer: &mut String, var_index: usize, _value: &Value) {
            writer.push('?');
            writer.push_str(&var_index.to_string());
        }

        fn quote_to(&self, writer: &mut String, identifier: &str) {
            writer.push_str(identifier);
        }

        fn explain(&self, sql: &str, vars: &[Value]) -> String {
            format!("{} -- {} vars", sql, vars.len())
        }

        fn dummy_table_name(&self) -> &'static str {
            "DUMMY"
        }
    }

    pub(crate) fn plain_statement() -> Statement {
        Statement::new("users", Arc::new(PlainDialect), ClauseBuilders::new())
    }

    struct MarkerBuilder;

    impl ClauseBuilder for MarkerBuilder {
        fn build_where(&self, clause: &Where, stmt: &mut Statement) {
            stmt.write_str(&format!("<where {}>", clause.exprs.len()));
        }

        fn build_limit(&self, _clause: &Limit, stmt: &mut Statement) {
            stmt.write_str("<limit>");
        }
    }

    #[test]
    fn test_add_var_uses_current_var_count() {
        let mut stmt = plain_statement();
        stmt.add_var(Value::Int(1));
        stmt.write_str(", ");
        stmt.add_var(Value::Int(2));

        assert_eq!(stmt.sql(), "?0, ?1");
        assert_eq!(stmt.vars(), &[Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_build_default_rendering() {
        let mut stmt = plain_statement();
        stmt.add_clause(Where::new(vec![
            Expression::eq("active", true),
            Expression::gt("age", 18),
        ]));
        stmt.add_clause(OrderBy::new().column("name", SortOrder::Desc));
        stmt.add_clause(Limit::new().with_limit(10i64).with_offset(20));

        stmt.build(&ClauseKind::SELECT_ORDER);

        assert_eq!(
            stmt.sql(),
            "WHERE active = ?0 AND age > ?1 ORDER BY name DESC LIMIT 10 OFFSET 20"
        );
        assert_eq!(stmt.vars().len(), 2);
    }

    #[test]
    fn test_build_separates_from_existing_text() {
        let mut stmt = plain_statement();
        stmt.write_str("SELECT * FROM users");
        stmt.add_clause(Where::new(vec![]));
        stmt.add_clause(OrderBy::new().column("id", SortOrder::Asc));
        stmt.build(&ClauseKind::SELECT_ORDER);

        assert_eq!(stmt.sql(), "SELECT * FROM users ORDER BY id ASC");
    }

    #[test]
    fn test_build_skips_undeclared_clauses() {
        let mut stmt = plain_statement();
        stmt.add_clause(Limit::new().with_offset(5));
        stmt.build(&ClauseKind::SELECT_ORDER);

        assert_eq!(stmt.sql(), "OFFSET 5");
    }

    #[test]
    fn test_build_uses_registered_builders() {
        let mut builders = ClauseBuilders::new();
        let marker: Arc<dyn ClauseBuilder> = Arc::new(MarkerBuilder);
        builders.register(ClauseKind::Where, marker.clone());
        builders.register(ClauseKind::Limit, marker);

        let mut stmt = Statement::new("users", Arc::new(PlainDialect), builders);
        stmt.add_clause(Where::new(vec![Expression::eq("a", 1)]));
        stmt.add_clause(OrderBy::new().column("a", SortOrder::Asc));
        stmt.add_clause(Limit::new().with_limit(1i64));
        stmt.build(&ClauseKind::SELECT_ORDER);

        assert_eq!(stmt.sql(), "<where 1> ORDER BY a ASC <limit>");
    }

    #[test]
    fn test_build_skips_empty_where_with_registered_builder() {
        let mut builders = ClauseBuilders::new();
        builders.register(ClauseKind::Where, Arc::new(MarkerBuilder));

        let mut stmt = Statement::new("users", Arc::new(PlainDialect), builders);
        stmt.write_str("SELECT * FROM users");
        stmt.add_clause(Where::new(vec![]));
        stmt.build(&ClauseKind::SELECT_ORDER);

        assert_eq!(stmt.sql(), "SELECT * FROM users");
    }

    #[test]
    fn test_clause_builders_lookup_by_name() {
        let mut builders = ClauseBuilders::new();
        builders.register(ClauseKind::Limit, Arc::new(MarkerBuilder));

        assert!(builders.get_by_name("LIMIT").is_some());
        assert!(builders.get_by_name("WHERE").is_none());
        assert_eq!(builders.len(), 1);
    }
}
