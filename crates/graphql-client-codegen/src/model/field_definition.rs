use crate::loc;
use crate::model::ArgumentDefinition;
use crate::model::DefaultValue;
use crate::types::TypeDescriptor;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(super) arguments: Vec<ArgumentDefinition>,
    pub(super) def_location: loc::SourcePosition,
    pub(super) default_value: Option<DefaultValue>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_descriptor: TypeDescriptor,
    pub(super) wire_name: String,
}
impl FieldDefinition {
    /// Arguments in schema declaration order. Always empty for input fields.
    pub fn arguments(&self) -> &[ArgumentDefinition] {
        &self.arguments
    }

    pub fn def_location(&self) -> loc::SourcePosition {
        self.def_location
    }

    /// The SDL default literal. Only input fields carry one.
    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The Rust member name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn requires_selector(&self) -> bool {
        self.type_descriptor.requires_selector()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    /// The field name as written in the schema, and as it appears on the
    /// wire.
    pub fn wire_name(&self) -> &str {
        self.wire_name.as_str()
    }
}
