use crate::loc;
use crate::model::FieldDefinition;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassKind {
    /// Generated from an `input` definition: serialized, fields only.
    Input,

    /// Generated from a `type` definition: deserialized, with selector
    /// accessors for object-typed fields.
    Object,
}

/// A generated struct, built from a GraphQL object or input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDefinition {
    pub(super) def_location: loc::SourcePosition,
    pub(super) description: Option<String>,
    pub(super) fields: Vec<FieldDefinition>,
    pub(super) kind: ClassKind,
    pub(super) name: String,
    pub(super) wire_name: String,
}
impl ClassDefinition {
    pub fn def_location(&self) -> loc::SourcePosition {
        self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in schema declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// The Rust type name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The GraphQL type name.
    pub fn wire_name(&self) -> &str {
        self.wire_name.as_str()
    }
}
