//! Field descriptors
//!
//! This module defines the dialect-agnostic description of a mapped column,
//! as produced by the host's schema reflection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Logical kind of a mapped field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Time,
    Bytes,
    /// Raw type name declared by the model, passed through to DDL
    Custom(String),
}

impl DataType {
    /// Type name used in diagnostics
    pub fn name(&self) -> &str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Uint => "uint",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::Bytes => "bytes",
            DataType::Custom(raw) => raw,
        }
    }
}

/// Free-form tag map attached to a field.
///
/// Keys are normalized to upper case so `not null` and `NOT NULL` address the
/// same setting. Flag-style tags store their own key as the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSettings(BTreeMap<String, String>);

impl TagSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tag with an explicit value
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_uppercase(), value.into());
    }

    /// Set a flag tag (the value repeats the key)
    pub fn flag(&mut self, key: &str) {
        let key = key.to_uppercase();
        self.0.insert(key.clone(), key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_uppercase())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(&key.to_uppercase())
    }

    /// A tag counts as set only when its value is non-empty
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }
}

/// Description of a mapped column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
    /// Declared size; bits for numeric kinds, characters for strings, 0 when unspecified
    pub size: u32,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub tag_settings: TagSettings,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: 0,
            primary_key: false,
            auto_increment: false,
            not_null: false,
            default_value: None,
            tag_settings: TagSettings::new(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self.tag_settings.flag("NOT NULL");
        self
    }

    /// Declare a default value; mirrored into the `DEFAULT` tag
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.tag_settings.insert("DEFAULT", value.clone());
        self.default_value = Some(value);
        self
    }

    pub fn unique(mut self) -> Self {
        self.tag_settings.flag("UNIQUE");
        self
    }

    /// Mark the field as indexed, optionally naming the index
    pub fn indexed(mut self, index_name: Option<&str>) -> Self {
        match index_name {
            Some(name) => self.tag_settings.insert("INDEX", name),
            None => self.tag_settings.flag("INDEX"),
        }
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.tag_settings.insert("COMMENT", comment);
        self
    }

    pub fn with_tag(mut self, key: &str, value: impl Into<String>) -> Self {
        self.tag_settings.insert(key, value);
        self
    }

    /// Default value text, from the field or its `DEFAULT` tag
    pub fn default_value(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .or_else(|| self.tag_settings.get("DEFAULT"))
    }

    /// A `DEFAULT` tag counts even when empty
    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some() || self.tag_settings.contains("DEFAULT")
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null || self.tag_settings.is_set("NOT NULL")
    }

    pub fn is_unique(&self) -> bool {
        self.tag_settings.is_set("UNIQUE")
    }

    pub fn is_indexed(&self) -> bool {
        self.tag_settings.is_set("INDEX")
    }
}
