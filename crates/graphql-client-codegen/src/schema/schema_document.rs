use crate::ast;
use crate::loc;
use crate::CodegenError;
use crate::UnsupportedConstruct;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, CodegenError>;

/// A type named as an operation root in the `schema { ... }` block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RootOperationType {
    pub location: loc::SourcePosition,
    pub type_name: String,
}

/// A definition the generator does not model, recorded so the model builder
/// can reject it with a precise location.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedDefinition {
    pub construct: UnsupportedConstruct,
    pub location: loc::SourcePosition,
    pub name: String,
}

/// The top-level definitions extracted from one SDL document, each list in
/// source order.
#[derive(Debug)]
pub struct SchemaDocument {
    enums: Vec<ast::EnumType>,
    inputs: Vec<ast::InputObjectType>,
    mutation_type: Option<RootOperationType>,
    objects: Vec<ast::ObjectType>,
    query_type: Option<RootOperationType>,
    scalars: Vec<ast::ScalarType>,
    subscription_type: Option<RootOperationType>,
    unsupported: Vec<UnsupportedDefinition>,
}
impl SchemaDocument {
    /// Parses SDL text into a [`SchemaDocument`].
    ///
    /// Fails with [`CodegenError::SchemaNotFound`] when the text is valid
    /// GraphQL but contains no `schema { ... }` block.
    pub fn parse(sdl: &str) -> Result<Self> {
        let ast_doc = ast::parse_schema(sdl).map_err(|err| CodegenError::Parse {
            message: err.to_string(),
        })?;

        let mut visitor = DocumentVisitor::default();
        for def in ast_doc.definitions {
            visitor.visit_ast_def(def)?;
        }

        if visitor.schema_def_location.is_none() {
            return Err(CodegenError::SchemaNotFound);
        }

        log::debug!(
            "Extracted {} object types, {} input types, {} enums and {} \
            custom scalars from the schema document.",
            visitor.document.objects.len(),
            visitor.document.inputs.len(),
            visitor.document.enums.len(),
            visitor.document.scalars.len(),
        );

        Ok(visitor.document)
    }

    pub fn enums(&self) -> &[ast::EnumType] {
        &self.enums
    }

    pub fn inputs(&self) -> &[ast::InputObjectType] {
        &self.inputs
    }

    pub fn mutation_type(&self) -> Option<&RootOperationType> {
        self.mutation_type.as_ref()
    }

    pub fn objects(&self) -> &[ast::ObjectType] {
        &self.objects
    }

    pub fn query_type(&self) -> Option<&RootOperationType> {
        self.query_type.as_ref()
    }

    pub fn scalars(&self) -> &[ast::ScalarType] {
        &self.scalars
    }

    /// Recorded for completeness; subscriptions are not generated.
    pub fn subscription_type(&self) -> Option<&RootOperationType> {
        self.subscription_type.as_ref()
    }

    pub fn unsupported_definitions(&self) -> &[UnsupportedDefinition] {
        &self.unsupported
    }
}

struct DocumentVisitor {
    document: SchemaDocument,
    schema_def_location: Option<loc::SourcePosition>,
    type_locations: IndexMap<String, loc::SourcePosition>,
}
impl std::default::Default for DocumentVisitor {
    fn default() -> Self {
        Self {
            document: SchemaDocument {
                enums: vec![],
                inputs: vec![],
                mutation_type: None,
                objects: vec![],
                query_type: None,
                scalars: vec![],
                subscription_type: None,
                unsupported: vec![],
            },
            schema_def_location: None,
            type_locations: IndexMap::new(),
        }
    }
}
impl DocumentVisitor {
    fn visit_ast_def(&mut self, def: ast::Definition) -> Result<()> {
        use ast::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(schema_def),

            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(type_def),

            Definition::TypeExtension(type_ext) => {
                let (name, position) = type_extension_name_and_pos(&type_ext);
                self.record_unsupported(
                    UnsupportedConstruct::TypeExtension,
                    name,
                    position,
                );
                Ok(())
            },

            Definition::DirectiveDefinition(directive_def) => {
                self.record_unsupported(
                    UnsupportedConstruct::DirectiveDefinition,
                    format!("@{}", directive_def.name),
                    directive_def.position,
                );
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        schema_def: ast::SchemaDefinition,
    ) -> Result<()> {
        let location = loc::SourcePosition::from_pos(schema_def.position);
        if let Some(existing_location) = self.schema_def_location {
            return Err(CodegenError::DuplicateSchemaDefinition {
                location1: existing_location,
                location2: location,
            });
        }
        self.schema_def_location = Some(location);

        let root = |type_name: Option<String>| type_name.map(|type_name| {
            RootOperationType {
                location,
                type_name,
            }
        });
        self.document.query_type = root(schema_def.query);
        self.document.mutation_type = root(schema_def.mutation);
        self.document.subscription_type = root(schema_def.subscription);

        if let Some(subscription_type) = &self.document.subscription_type {
            log::debug!(
                "Ignoring the `{}` subscription root; subscriptions are not \
                generated.",
                subscription_type.type_name,
            );
        }

        Ok(())
    }

    fn visit_ast_type_def(&mut self, def: ast::TypeDefinition) -> Result<()> {
        use ast::TypeDefinition;
        match def {
            TypeDefinition::Enum(enum_def) => {
                self.track_type_name(&enum_def.name, enum_def.position)?;
                self.document.enums.push(enum_def);
            },

            TypeDefinition::InputObject(input_def) => {
                self.track_type_name(&input_def.name, input_def.position)?;
                self.document.inputs.push(input_def);
            },

            TypeDefinition::Interface(iface_def) => {
                self.track_type_name(&iface_def.name, iface_def.position)?;
                self.record_unsupported(
                    UnsupportedConstruct::Interface,
                    iface_def.name,
                    iface_def.position,
                );
            },

            TypeDefinition::Object(obj_def) => {
                self.track_type_name(&obj_def.name, obj_def.position)?;
                self.document.objects.push(obj_def);
            },

            TypeDefinition::Scalar(scalar_def) => {
                self.track_type_name(&scalar_def.name, scalar_def.position)?;
                self.document.scalars.push(scalar_def);
            },

            TypeDefinition::Union(union_def) => {
                self.track_type_name(&union_def.name, union_def.position)?;
                self.record_unsupported(
                    UnsupportedConstruct::Union,
                    union_def.name,
                    union_def.position,
                );
            },
        }
        Ok(())
    }

    fn record_unsupported(
        &mut self,
        construct: UnsupportedConstruct,
        name: String,
        position: ast::Pos,
    ) {
        log::trace!("Recording unsupported {construct} `{name}`.");
        self.document.unsupported.push(UnsupportedDefinition {
            construct,
            location: loc::SourcePosition::from_pos(position),
            name,
        });
    }

    fn track_type_name(&mut self, name: &str, position: ast::Pos) -> Result<()> {
        let location = loc::SourcePosition::from_pos(position);
        if let Some(existing_location) = self.type_locations.get(name) {
            return Err(CodegenError::DuplicateTypeDefinition {
                location1: *existing_location,
                location2: location,
                type_name: name.to_string(),
            });
        }
        self.type_locations.insert(name.to_string(), location);
        Ok(())
    }
}

fn type_extension_name_and_pos(ext: &ast::TypeExtension) -> (String, ast::Pos) {
    use ast::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
        TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
        TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
        TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
        TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
        TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
    }
}
