mod schema_document;

pub use schema_document::RootOperationType;
pub use schema_document::SchemaDocument;
pub use schema_document::UnsupportedDefinition;
