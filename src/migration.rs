//! Table creation for Oracle
//!
//! This module renders CREATE TABLE and CREATE INDEX statements from field
//! descriptors. Indexes are created after the table.

use crate::core::Database;
use crate::errors::DialectError;
use query_builder::Dialect;
use type_mapping::{DataType, FieldDescriptor, TypeMappingConfig};

const NOT_NULL: &str = " NOT NULL";

/// Generate the CREATE TABLE statement for `fields`.
///
/// Fails on the first field whose type cannot be mapped.
pub fn create_table_sql(
    dialect: &dyn Dialect,
    table: &str,
    fields: &mut [FieldDescriptor],
    config: &TypeMappingConfig,
) -> Result<String, DialectError> {
    let mut sql = String::from("CREATE TABLE ");
    dialect.quote_to(&mut sql, table);
    sql.push_str(" (");

    for (idx, field) in fields.iter_mut().enumerate() {
        if idx > 0 {
            sql.push_str(", ");
        }
        let sql_type = type_mapping::data_type_of(field, config)?;
        dialect.quote_to(&mut sql, &field.name);
        sql.push(' ');
        sql.push_str(&column_definition(field, sql_type));
    }

    let primary_keys: Vec<&str> = fields
        .iter()
        .filter(|field| field.primary_key)
        .map(|field| field.name.as_str())
        .collect();
    if !primary_keys.is_empty() {
        sql.push_str(", PRIMARY KEY (");
        for (idx, column) in primary_keys.iter().enumerate() {
            if idx > 0 {
                sql.push(',');
            }
            dialect.quote_to(&mut sql, column);
        }
        sql.push(')');
    }

    sql.push(')');
    Ok(sql)
}

/// Resolved type plus the DEFAULT and NOT NULL constraints of built-in kinds.
///
/// Custom types already carry their constraints inline.
fn column_definition(field: &FieldDescriptor, mut sql_type: String) -> String {
    if matches!(field.data_type, DataType::Custom(_)) {
        return sql_type;
    }

    if let Some(value) = field.default_value().filter(|value| !value.is_empty()) {
        sql_type.push_str(" DEFAULT ");
        sql_type.push_str(value);
    }
    if (field.is_not_null() || field.primary_key) && !sql_type.ends_with(NOT_NULL) {
        sql_type.push_str(NOT_NULL);
    }
    sql_type
}

/// Generate CREATE INDEX statements for indexed and unique fields.
///
/// Custom-typed fields declare UNIQUE inline, so they only get an index
/// when tagged `INDEX`. Primary key columns are already indexed by their
/// constraint and get no extra unique index.
pub fn create_indexes_sql(
    dialect: &dyn Dialect,
    table: &str,
    fields: &[FieldDescriptor],
) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| {
            let inline_unique = matches!(field.data_type, DataType::Custom(_));
            let unique = field.is_unique() && !inline_unique && !field.primary_key;
            let prefix = if unique {
                "CREATE UNIQUE INDEX "
            } else {
                "CREATE INDEX "
            };

            let index_name = if field.is_indexed() {
                match field.tag_settings.get("INDEX") {
                    Some(name) if name != "INDEX" => name.to_string(),
                    _ => format!("idx_{}_{}", table, field.name),
                }
            } else if unique {
                format!("uk_{}_{}", table, field.name)
            } else {
                return None;
            };

            let mut sql = String::from(prefix);
            dialect.quote_to(&mut sql, &index_name);
            sql.push_str(" ON ");
            dialect.quote_to(&mut sql, table);
            sql.push_str(" (");
            dialect.quote_to(&mut sql, &field.name);
            sql.push(')');
            Some(sql)
        })
        .collect()
}

impl Database {
    /// Create the table and its indexes.
    ///
    /// Nothing is executed when a field type cannot be mapped.
    pub async fn auto_migrate(
        &mut self,
        table: &str,
        fields: &mut [FieldDescriptor],
    ) -> Result<(), DialectError> {
        let create_table = create_table_sql(self.dialect(), table, fields, self.type_mapping())?;
        let indexes = create_indexes_sql(self.dialect(), table, fields);

        tracing::info!("Creating table with SQL: {}", create_table);
        self.exec(&create_table).await?;

        for index_sql in indexes {
            tracing::info!("Creating index with SQL: {}", index_sql);
            self.exec(&index_sql).await?;
        }

        Ok(())
    }
}
