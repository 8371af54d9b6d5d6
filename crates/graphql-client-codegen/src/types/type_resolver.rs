use crate::ast;
use crate::loc;
use crate::schema::SchemaDocument;
use crate::types::TypeDescriptor;
use crate::CodegenError;
use crate::UnsupportedConstruct;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, CodegenError>;

/// Scalars every GraphQL schema provides without declaring them.
pub const BUILTIN_SCALAR_NAMES: &[&str] = &[
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

/// Classifies SDL type references into [`TypeDescriptor`]s.
///
/// Named references are resolved by name only: enums and scalars by
/// membership in their known-name sets, everything else (object and input
/// object references alike) as [`TypeDescriptor::Object`].
#[derive(Clone, Debug)]
pub struct TypeResolver {
    enum_names: HashSet<String>,
    scalar_names: HashSet<String>,
    unsupported_names: HashMap<String, UnsupportedConstruct>,
}
impl TypeResolver {
    /// Builds a resolver over the enums and scalars declared in `document`.
    ///
    /// Interface and union types declared in the document are known as well,
    /// so that references to them fail to resolve.
    pub fn from_document(document: &SchemaDocument) -> Self {
        let mut resolver = Self::new(
            document.enums().iter().map(|enum_def| enum_def.name.as_str()),
            document.scalars().iter().map(|scalar_def| scalar_def.name.as_str()),
        );

        for def in document.unsupported_definitions() {
            if matches!(
                def.construct,
                UnsupportedConstruct::Interface | UnsupportedConstruct::Union,
            ) {
                resolver.unsupported_names.insert(def.name.to_string(), def.construct);
            }
        }

        resolver
    }

    /// Builds a resolver over the given enum and custom scalar names. The
    /// built-in scalars are always known.
    pub fn new<'a>(
        enum_names: impl IntoIterator<Item = &'a str>,
        scalar_names: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            enum_names: enum_names.into_iter().map(str::to_string).collect(),
            scalar_names:
                BUILTIN_SCALAR_NAMES.iter()
                    .copied()
                    .chain(scalar_names)
                    .map(str::to_string)
                    .collect(),
            unsupported_names: HashMap::new(),
        }
    }

    pub fn is_enum(&self, type_name: &str) -> bool {
        self.enum_names.contains(type_name)
    }

    pub fn is_scalar(&self, type_name: &str) -> bool {
        self.scalar_names.contains(type_name)
    }

    /// Resolves `ast_type`, a type reference found at `location`.
    ///
    /// A reference to an interface or union type fails with
    /// [`CodegenError::UnsupportedTypeConstruct`].
    pub fn resolve(
        &self,
        ast_type: &ast::Type,
        location: loc::SourcePosition,
    ) -> Result<TypeDescriptor> {
        self.resolve_impl(ast_type, /* nullable = */ true, location)
    }

    fn resolve_impl(
        &self,
        ast_type: &ast::Type,
        nullable: bool,
        location: loc::SourcePosition,
    ) -> Result<TypeDescriptor> {
        match ast_type {
            ast::Type::ListType(inner) => Ok(TypeDescriptor::List {
                element: Box::new(self.resolve_impl(inner, true, location)?),
                nullable,
            }),

            ast::Type::NamedType(name) =>
                self.resolve_named(name, nullable, location),

            ast::Type::NonNullType(inner) =>
                self.resolve_impl(inner, false, location),
        }
    }

    fn resolve_named(
        &self,
        name: &str,
        nullable: bool,
        location: loc::SourcePosition,
    ) -> Result<TypeDescriptor> {
        if let Some(construct) = self.unsupported_names.get(name) {
            return Err(CodegenError::UnsupportedTypeConstruct {
                construct: *construct,
                location,
                type_name: name.to_string(),
            });
        }

        let name = name.to_string();
        Ok(if self.enum_names.contains(&name) {
            TypeDescriptor::Enum { name, nullable }
        } else if self.scalar_names.contains(&name) {
            TypeDescriptor::Scalar { name, nullable }
        } else {
            TypeDescriptor::Object { name, nullable }
        })
    }
}
