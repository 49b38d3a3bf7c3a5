//! Core type definitions

pub mod document;
pub mod merge;
pub mod schema;
pub mod validator;
pub mod value;

pub use document::{ConfigDocument, DocumentDraft, ScopeType};
pub use merge::deep_merge;
pub use schema::{FieldType, Schema, SchemaField};
pub use validator::{Validator, Violation};
pub use value::Value;
