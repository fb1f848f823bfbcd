//! The Oracle dialect
//!
//! [`OracleDialect`] implements the query builder's extension points:
//! `:N` placeholders, unquoted identifiers, literal-inlining explain, and
//! clause builders for WHERE and LIMIT.

use crate::explain::explain_sql;
use crate::rewrite::{rewrite_limit, rewrite_where};
use query_builder::{
    ClauseBuilder, ClauseBuilders, ClauseKind, Dialect, Expression, Limit, Statement, Value, Where,
};
use std::sync::Arc;
use type_mapping::{FieldDescriptor, TypeMappingConfig, TypeMappingError};

/// Prefix of positional bind placeholders
pub const BIND_PREFIX: char = ':';

/// Oracle's single-row dummy table
pub const DUMMY_TABLE: &str = "DUAL";

#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl OracleDialect {
    pub fn new() -> Self {
        Self
    }

    /// Expression inserting a row made only of column defaults
    pub fn default_value_of(&self) -> Expression {
        Expression::expr("VALUES (DEFAULT)", Vec::new())
    }

    /// Column type for a field, see [`type_mapping::data_type_of`]
    pub fn data_type_of(
        &self,
        field: &mut FieldDescriptor,
        config: &TypeMappingConfig,
    ) -> Result<String, TypeMappingError> {
        type_mapping::data_type_of(field, config)
    }
}

impl Dialect for OracleDialect {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn bind_var_to(&self, writer: &mut String, var_index: usize, _value: &Value) {
        writer.push(BIND_PREFIX);
        writer.push_str(&var_index.to_string());
    }

    /// Identifiers are written as given
    fn quote_to(&self, writer: &mut String, identifier: &str) {
        writer.push_str(identifier);
    }

    fn explain(&self, sql: &str, vars: &[Value]) -> String {
        explain_sql(sql, vars)
    }

    fn dummy_table_name(&self) -> &'static str {
        DUMMY_TABLE
    }

    fn clause_builders(&self) -> ClauseBuilders {
        let builder: Arc<dyn ClauseBuilder> = Arc::new(*self);
        let mut builders = ClauseBuilders::new();
        builders.register(ClauseKind::Limit, builder.clone());
        builders.register(ClauseKind::Where, builder);
        builders
    }
}

impl ClauseBuilder for OracleDialect {
    fn build_where(&self, clause: &Where, stmt: &mut Statement) {
        rewrite_where(clause, stmt);
    }

    fn build_limit(&self, clause: &Limit, stmt: &mut Statement) {
        rewrite_limit(clause, stmt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_var_uses_colon_and_index() {
        let mut sql = String::from("id = ");
        OracleDialect.bind_var_to(&mut sql, 0, &Value::Int(1));
        sql.push_str(" AND name = ");
        OracleDialect.bind_var_to(&mut sql, 1, &Value::from("x"));

        assert_eq!(sql, "id = :0 AND name = :1");
    }

    #[test]
    fn test_quote_is_passthrough() {
        let mut sql = String::new();
        OracleDialect.quote_to(&mut sql, "user_id");
        assert_eq!(sql, "user_id");
    }

    #[test]
    fn test_registers_where_and_limit_builders() {
        let builders = OracleDialect.clause_builders();

        assert_eq!(builders.len(), 2);
        assert!(builders.get_by_name("WHERE").is_some());
        assert!(builders.get_by_name("LIMIT").is_some());
        assert!(!builders.contains(ClauseKind::OrderBy));
    }

    #[test]
    fn test_default_value_expression() {
        assert_eq!(
            OracleDialect.default_value_of(),
            Expression::expr("VALUES (DEFAULT)", vec![])
        );
    }

    #[test]
    fn test_name_and_dummy_table() {
        assert_eq!(OracleDialect.name(), "oracle");
        assert_eq!(OracleDialect.dummy_table_name(), "DUAL");
    }
}
