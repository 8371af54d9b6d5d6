use crate::model::ClassDefinition;
use crate::model::ClassKind;
use crate::model::EnumDefinition;
use crate::model::ScalarDefinition;
use indexmap::IndexMap;

/// Everything the code synthesizer emits for one schema, keyed by GraphQL
/// type name and kept in schema declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientModel {
    pub(super) classes: IndexMap<String, ClassDefinition>,
    pub(super) client_name: String,
    pub(super) enums: IndexMap<String, EnumDefinition>,
    pub(super) mutation_root: Option<String>,
    pub(super) query_root: Option<String>,
    pub(super) scalars: Vec<ScalarDefinition>,
}
impl ClientModel {
    /// Looks up an object or input class by GraphQL type name.
    pub fn class(&self, wire_name: &str) -> Option<&ClassDefinition> {
        self.classes.get(wire_name)
    }

    /// Object classes followed by input classes, each group in declaration
    /// order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    pub fn client_name(&self) -> &str {
        self.client_name.as_str()
    }

    pub fn enum_definition(&self, wire_name: &str) -> Option<&EnumDefinition> {
        self.enums.get(wire_name)
    }

    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.enums.values()
    }

    pub fn input_classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes().filter(|class| class.kind() == ClassKind::Input)
    }

    /// The Rust type bound as the mutation root, if the schema declares one.
    pub fn mutation_root(&self) -> Option<&str> {
        self.mutation_root.as_deref()
    }

    pub fn object_classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes().filter(|class| class.kind() == ClassKind::Object)
    }

    /// The Rust type bound as the query root, if the schema declares one.
    pub fn query_root(&self) -> Option<&str> {
        self.query_root.as_deref()
    }

    pub fn scalars(&self) -> &[ScalarDefinition] {
        &self.scalars
    }
}
