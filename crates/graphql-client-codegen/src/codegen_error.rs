use crate::loc;
use thiserror::Error;

/// GraphQL constructs the generator deliberately does not model.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnsupportedConstruct {
    DirectiveDefinition,
    Interface,
    TypeExtension,
    Union,
}
impl std::fmt::Display for UnsupportedConstruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DirectiveDefinition => "directive definition",
            Self::Interface => "interface type",
            Self::TypeExtension => "type extension",
            Self::Union => "union type",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CodegenError {
    #[error(
        "The schema document declares more than one `schema` definition block \
        (at {location1} and {location2})."
    )]
    DuplicateSchemaDefinition {
        location1: loc::SourcePosition,
        location2: loc::SourcePosition,
    },

    #[error(
        "The `{type_name}` type normalizes two members to the same Rust name \
        `{member_name}`: `{wire_name1}` and `{wire_name2}`."
    )]
    DuplicateMemberName {
        member_name: String,
        type_name: String,
        wire_name1: String,
        wire_name2: String,
    },

    #[error(
        "Multiple definitions of the `{type_name}` type (at {location1} and \
        {location2})."
    )]
    DuplicateTypeDefinition {
        location1: loc::SourcePosition,
        location2: loc::SourcePosition,
        type_name: String,
    },

    #[error("The `{type_name}` enum (at {location}) defines no values.")]
    EnumWithNoValues {
        location: loc::SourcePosition,
        type_name: String,
    },

    #[error("`{client_name}` is not a valid name for the generated client type.")]
    InvalidClientName {
        client_name: String,
    },

    #[error("Generated code failed to parse as a Rust file: {message}")]
    InvalidGeneratedCode {
        message: String,
    },

    #[error("`{namespace}` is not a valid module namespace.")]
    InvalidNamespace {
        namespace: String,
    },

    #[error("`{path}` is not a valid path to the client runtime crate: {message}")]
    InvalidRuntimePath {
        message: String,
        path: String,
    },

    #[error(
        "`{rust_type}` (used for the `{graphql_name}` GraphQL type) is not a \
        valid Rust type: {message}"
    )]
    InvalidRustType {
        graphql_name: String,
        message: String,
        rust_type: String,
    },

    #[error(
        "`{referenced_by}` (at {location}) must reference an {expected_kind} \
        type, but `{type_name}` is not one."
    )]
    MismatchedTypeReference {
        expected_kind: &'static str,
        location: loc::SourcePosition,
        referenced_by: String,
        type_name: String,
    },

    #[error("Failed to parse GraphQL schema document: {message}")]
    Parse {
        message: String,
    },

    #[error("No `schema` definition block was found in the GraphQL document.")]
    SchemaNotFound,

    #[error(
        "`{type_name}` is referenced by `{referenced_by}` (at {location}) but \
        is not defined as an object or input object type in the schema."
    )]
    UndefinedTypeReference {
        location: loc::SourcePosition,
        referenced_by: String,
        type_name: String,
    },

    #[error(
        "The default value `{literal}` of `{type_name}.{field_name}` (at \
        {location}) is not a literal of a supported shape for its type."
    )]
    UnsupportedDefaultValue {
        field_name: String,
        literal: String,
        location: loc::SourcePosition,
        type_name: String,
    },

    #[error(
        "`{type_name}` (at {location}) uses a GraphQL {construct}, which \
        cannot be represented in a generated client."
    )]
    UnsupportedTypeConstruct {
        construct: UnsupportedConstruct,
        location: loc::SourcePosition,
        type_name: String,
    },
}
