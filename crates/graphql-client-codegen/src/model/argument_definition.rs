use crate::types::TypeDescriptor;

/// A parameter of a selector accessor, mirroring a GraphQL field argument.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub(super) name: String,
    pub(super) type_descriptor: TypeDescriptor,
    pub(super) type_name: String,
    pub(super) wire_name: String,
}
impl ArgumentDefinition {
    /// The Rust parameter name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// The Rust type of the parameter (e.g. `::std::option::Option<i32>`).
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// The argument name as written in the schema.
    pub fn wire_name(&self) -> &str {
        self.wire_name.as_str()
    }
}
