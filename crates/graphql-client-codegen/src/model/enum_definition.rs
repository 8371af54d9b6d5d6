#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumMember {
    pub(super) description: Option<String>,
    pub(super) member_name: String,
    pub(super) wire_name: String,
}
impl EnumMember {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The Rust variant name.
    pub fn member_name(&self) -> &str {
        self.member_name.as_str()
    }

    /// The enum value as written in the schema.
    pub fn wire_name(&self) -> &str {
        self.wire_name.as_str()
    }
}

/// A generated enumeration along with its wire-name conversion table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDefinition {
    pub(super) description: Option<String>,
    pub(super) members: Vec<EnumMember>,
    pub(super) name: String,
}
impl EnumDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Members in schema declaration order.
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// The wire name a Rust variant converts to.
    pub fn member_to_wire(&self, member_name: &str) -> Option<&str> {
        self.members.iter()
            .find(|member| member.member_name == member_name)
            .map(EnumMember::wire_name)
    }

    /// The Rust type name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The Rust variant a wire name converts to.
    pub fn wire_to_member(&self, wire_name: &str) -> Option<&str> {
        self.members.iter()
            .find(|member| member.wire_name == wire_name)
            .map(EnumMember::member_name)
    }
}
