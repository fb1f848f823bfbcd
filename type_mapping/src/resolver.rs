//! Oracle column type resolution
//!
//! This module maps a [`FieldDescriptor`] to the column type text used in
//! Oracle DDL, including the constraints Oracle wants inline.

use crate::errors::TypeMappingError;
use crate::field::{DataType, FieldDescriptor};
use serde::{Deserialize, Serialize};

/// Default size applied to unsized string columns
pub const DEFAULT_STRING_SIZE: u32 = 1024;

/// Size used for unsized string columns that must be usable as index keys
pub const INDEXABLE_STRING_SIZE: u32 = 191;

/// Strings at or above this size become CLOB
const VARCHAR2_LIMIT: u32 = 2000;

/// Numeric sizes at or below this many bits map to SMALLINT
const SMALLINT_BITS: u32 = 8;

const IDENTITY_SUFFIX: &str = " GENERATED BY DEFAULT AS IDENTITY";

/// Settings that influence type resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMappingConfig {
    /// Size for string columns declared without one; 0 disables the default
    pub default_string_size: u32,
}

impl Default for TypeMappingConfig {
    fn default() -> Self {
        Self {
            default_string_size: DEFAULT_STRING_SIZE,
        }
    }
}

impl TypeMappingConfig {
    pub fn new(default_string_size: u32) -> Self {
        Self {
            default_string_size,
        }
    }
}

/// Resolve the Oracle column type for a field.
///
/// The `RESTRICT` tag is removed from the descriptor first, Oracle has no
/// matching keyword.
pub fn data_type_of(
    field: &mut FieldDescriptor,
    config: &TypeMappingConfig,
) -> Result<String, TypeMappingError> {
    field.tag_settings.remove("RESTRICT");

    let sql_type = match &field.data_type {
        DataType::Bool | DataType::Int | DataType::Uint | DataType::Float => {
            let mut sql_type = if field.data_type == DataType::Float {
                "FLOAT".to_string()
            } else if field.size <= SMALLINT_BITS {
                "SMALLINT".to_string()
            } else {
                "INTEGER".to_string()
            };
            if field.auto_increment {
                sql_type.push_str(IDENTITY_SUFFIX);
            }
            sql_type
        }
        DataType::String => {
            let size = string_size(field, config);
            if size == 0 || size >= VARCHAR2_LIMIT {
                "CLOB".to_string()
            } else {
                format!("VARCHAR2({})", size)
            }
        }
        DataType::Time => {
            if field.is_not_null() || field.primary_key {
                "TIMESTAMP NOT NULL".to_string()
            } else {
                "TIMESTAMP".to_string()
            }
        }
        DataType::Bytes => "BLOB".to_string(),
        DataType::Custom(raw) => custom_type(field, raw)?,
    };

    #[cfg(feature = "debug-logging")]
    tracing::trace!("[DATA_TYPE_OF] {} -> {}", field.name, sql_type);

    Ok(sql_type)
}

/// Declared size, then the configured default, then the index-safe size
/// for keys, defaulted and indexed columns. 0 means unbounded.
fn string_size(field: &FieldDescriptor, config: &TypeMappingConfig) -> u32 {
    if field.size > 0 {
        return field.size;
    }
    if config.default_string_size > 0 {
        return config.default_string_size;
    }
    let has_index = field.is_indexed() || field.is_unique();
    if field.primary_key || field.has_default_value() || has_index {
        INDEXABLE_STRING_SIZE
    } else {
        0
    }
}

fn custom_type(field: &FieldDescriptor, raw: &str) -> Result<String, TypeMappingError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TypeMappingError::InvalidType {
            field: field.name.clone(),
            type_name: field.data_type.name().to_string(),
        });
    }

    let mut parts = vec![if raw.eq_ignore_ascii_case("text") {
        "CLOB".to_string()
    } else {
        raw.to_string()
    }];

    let tags = &field.tag_settings;
    let default = field.default_value().filter(|value| !value.is_empty());
    if let Some(value) = default {
        parts.push(format!("DEFAULT {}", value));
    }
    if field.is_not_null() {
        parts.push("NOT NULL".to_string());
    }
    if let Some(unique) = tags.get("UNIQUE").filter(|value| !value.is_empty()) {
        parts.push(unique.to_string());
    }
    if default.is_some() {
        if let Some(comment) = tags.get("COMMENT") {
            parts.push(format!("COMMENT {}", comment));
        }
    }

    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unsized_config() -> TypeMappingConfig {
        TypeMappingConfig::new(0)
    }

    fn resolve(mut field: FieldDescriptor, config: &TypeMappingConfig) -> String {
        data_type_of(&mut field, config).unwrap()
    }

    // ========================================
    // Numeric kinds
    // ========================================

    #[test]
    fn test_small_integer_maps_to_smallint() {
        let field = FieldDescriptor::new("flag", DataType::Int).with_size(8);
        assert_eq!(resolve(field, &unsized_config()), "SMALLINT");

        let field = FieldDescriptor::new("active", DataType::Bool).with_size(1);
        assert_eq!(resolve(field, &unsized_config()), "SMALLINT");
    }

    #[test]
    fn test_wide_integer_maps_to_integer() {
        let field = FieldDescriptor::new("count", DataType::Int).with_size(64);
        assert_eq!(resolve(field, &unsized_config()), "INTEGER");

        let field = FieldDescriptor::new("count", DataType::Uint).with_size(32);
        assert_eq!(resolve(field, &unsized_config()), "INTEGER");
    }

    #[test]
    fn test_auto_increment_appends_identity() {
        let field = FieldDescriptor::new("id", DataType::Int)
            .with_size(64)
            .auto_increment();
        assert_eq!(
            resolve(field, &unsized_config()),
            "INTEGER GENERATED BY DEFAULT AS IDENTITY"
        );

        let field = FieldDescriptor::new("id", DataType::Int)
            .with_size(8)
            .auto_increment();
        assert_eq!(
            resolve(field, &unsized_config()),
            "SMALLINT GENERATED BY DEFAULT AS IDENTITY"
        );
    }

    #[test]
    fn test_float_ignores_size() {
        let field = FieldDescriptor::new("ratio", DataType::Float).with_size(4);
        assert_eq!(resolve(field, &unsized_config()), "FLOAT");
    }

    // ========================================
    // Strings
    // ========================================

    #[test]
    fn test_unsized_plain_string_is_unbounded() {
        let field = FieldDescriptor::new("bio", DataType::String);
        let sql_type = resolve(field, &unsized_config());

        assert_eq!(sql_type, "CLOB");
        assert!(!sql_type.contains('('));
    }

    #[test]
    fn test_unsized_key_string_uses_indexable_size() {
        let field = FieldDescriptor::new("code", DataType::String).primary_key();
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(191)");

        let field = FieldDescriptor::new("code", DataType::String).with_default("'x'");
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(191)");

        let field = FieldDescriptor::new("email", DataType::String).unique();
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(191)");

        let field = FieldDescriptor::new("slug", DataType::String).indexed(None);
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(191)");
    }

    #[test]
    fn test_default_tag_alone_uses_indexable_size() {
        let field = FieldDescriptor::new("code", DataType::String).with_tag("DEFAULT", "'x'");
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(191)");
    }

    #[test]
    fn test_configured_default_string_size_wins_over_fallback() {
        let field = FieldDescriptor::new("code", DataType::String).primary_key();
        assert_eq!(
            resolve(field, &TypeMappingConfig::default()),
            "VARCHAR2(1024)"
        );
    }

    #[test]
    fn test_declared_string_size_is_used() {
        let field = FieldDescriptor::new("name", DataType::String).with_size(64);
        assert_eq!(
            resolve(field, &TypeMappingConfig::default()),
            "VARCHAR2(64)"
        );
    }

    #[test]
    fn test_large_string_becomes_clob() {
        let field = FieldDescriptor::new("body", DataType::String)
            .with_size(2500)
            .primary_key()
            .unique();
        assert_eq!(resolve(field, &unsized_config()), "CLOB");

        let field = FieldDescriptor::new("body", DataType::String).with_size(2000);
        assert_eq!(resolve(field, &unsized_config()), "CLOB");

        let field = FieldDescriptor::new("body", DataType::String).with_size(1999);
        assert_eq!(resolve(field, &unsized_config()), "VARCHAR2(1999)");
    }

    // ========================================
    // Time, bytes, custom
    // ========================================

    #[test]
    fn test_time_not_null_for_required_or_key() {
        let field = FieldDescriptor::new("created_at", DataType::Time);
        assert_eq!(resolve(field, &unsized_config()), "TIMESTAMP");

        let field = FieldDescriptor::new("created_at", DataType::Time).not_null();
        assert_eq!(resolve(field, &unsized_config()), "TIMESTAMP NOT NULL");

        let field = FieldDescriptor::new("at", DataType::Time).primary_key();
        assert_eq!(resolve(field, &unsized_config()), "TIMESTAMP NOT NULL");
    }

    #[test]
    fn test_time_not_null_from_tag() {
        let field =
            FieldDescriptor::new("created_at", DataType::Time).with_tag("NOT NULL", "NOT NULL");
        assert_eq!(resolve(field, &unsized_config()), "TIMESTAMP NOT NULL");
    }

    #[test]
    fn test_bytes_map_to_blob() {
        let field = FieldDescriptor::new("payload", DataType::Bytes).with_size(10);
        assert_eq!(resolve(field, &unsized_config()), "BLOB");
    }

    #[test]
    fn test_custom_type_passes_through_with_constraints() {
        let field = FieldDescriptor::new("amount", DataType::Custom("NUMBER(10,2)".into()));
        assert_eq!(resolve(field, &unsized_config()), "NUMBER(10,2)");

        let field = FieldDescriptor::new("amount", DataType::Custom("NUMBER(10,2)".into()))
            .not_null()
            .unique();
        assert_eq!(
            resolve(field, &unsized_config()),
            "NUMBER(10,2) NOT NULL UNIQUE"
        );
    }

    #[test]
    fn test_custom_type_default_and_comment() {
        let field = FieldDescriptor::new("state", DataType::Custom("CHAR(1)".into()))
            .with_default("'N'")
            .not_null()
            .with_comment("'state flag'");
        assert_eq!(
            resolve(field, &unsized_config()),
            "CHAR(1) DEFAULT 'N' NOT NULL COMMENT 'state flag'"
        );

        // A comment alone is not emitted
        let field = FieldDescriptor::new("state", DataType::Custom("CHAR(1)".into()))
            .with_comment("'state flag'");
        assert_eq!(resolve(field, &unsized_config()), "CHAR(1)");
    }

    #[test]
    fn test_custom_type_skips_empty_default_tag() {
        let field = FieldDescriptor::new("state", DataType::Custom("CHAR(1)".into()))
            .with_tag("DEFAULT", "")
            .with_comment("'state flag'")
            .not_null();
        assert_eq!(resolve(field, &unsized_config()), "CHAR(1) NOT NULL");
    }

    #[test]
    fn test_custom_text_becomes_clob() {
        let field = FieldDescriptor::new("notes", DataType::Custom("Text".into()));
        assert_eq!(resolve(field, &unsized_config()), "CLOB");
    }

    #[test]
    fn test_empty_custom_type_is_invalid() {
        let mut field = FieldDescriptor::new("mystery", DataType::Custom(String::new()));
        let err = data_type_of(&mut field, &unsized_config()).unwrap_err();

        assert_eq!(
            err,
            TypeMappingError::InvalidType {
                field: "mystery".to_string(),
                type_name: String::new(),
            }
        );
    }

    #[test]
    fn test_restrict_tag_is_stripped() {
        let mut field = FieldDescriptor::new("owner_id", DataType::Int)
            .with_size(64)
            .with_tag("RESTRICT", "RESTRICT");
        let sql_type = data_type_of(&mut field, &unsized_config()).unwrap();

        assert_eq!(sql_type, "INTEGER");
        assert!(!field.tag_settings.contains("RESTRICT"));
    }
}
