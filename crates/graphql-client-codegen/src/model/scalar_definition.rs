/// A custom scalar, emitted as a type alias of the Rust type it maps to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarDefinition {
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) rust_type: String,
}
impl ScalarDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn rust_type(&self) -> &str {
        self.rust_type.as_str()
    }
}
