/// The resolved classification of a field or argument type reference.
///
/// Named categories hold only the referenced type's name, so descriptors for
/// self-referencing or mutually-referencing types stay finite. Every level
/// carries its own nullability: `[String!]` and `[String]!` are distinct.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeDescriptor {
    Enum {
        name: String,
        nullable: bool,
    },
    List {
        element: Box<TypeDescriptor>,
        nullable: bool,
    },
    Object {
        name: String,
        nullable: bool,
    },
    Scalar {
        name: String,
        nullable: bool,
    },
}
impl TypeDescriptor {
    /// Recursively unwrap list descriptors and return the inner-most named
    /// descriptor.
    pub fn innermost(&self) -> &TypeDescriptor {
        match self {
            Self::List { element, .. } => element.innermost(),
            Self::Enum { .. }
            | Self::Object { .. }
            | Self::Scalar { .. } => self,
        }
    }

    /// Name of the inner-most named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::List { element, .. } => element.innermost_name(),
            Self::Enum { name, .. }
            | Self::Object { name, .. }
            | Self::Scalar { name, .. } => name.as_str(),
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::Enum { nullable, .. }
            | Self::List { nullable, .. }
            | Self::Object { nullable, .. }
            | Self::Scalar { nullable, .. } => *nullable,
        }
    }

    /// Indicates if a field of this type is exposed through a selector
    /// accessor rather than a plain field.
    ///
    /// True for objects and for lists (at any depth) of objects.
    pub fn requires_selector(&self) -> bool {
        match self {
            Self::Object { .. } => true,
            Self::List { element, .. } => element.requires_selector(),
            Self::Enum { .. } | Self::Scalar { .. } => false,
        }
    }
}
impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let nullable_suffix = if self.nullable() { "" } else { "!" };
        match self {
            Self::List { element, .. } =>
                write!(f, "[{element}]{nullable_suffix}"),

            Self::Enum { name, .. }
            | Self::Object { name, .. }
            | Self::Scalar { name, .. } =>
                write!(f, "{name}{nullable_suffix}"),
        }
    }
}
