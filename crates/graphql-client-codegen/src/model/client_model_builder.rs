use crate::ast;
use crate::loc;
use crate::model::ArgumentDefinition;
use crate::model::ClassDefinition;
use crate::model::ClassKind;
use crate::model::ClientModel;
use crate::model::DefaultValue;
use crate::model::EnumDefinition;
use crate::model::EnumMember;
use crate::model::FieldDefinition;
use crate::model::ScalarDefinition;
use crate::model::default_value::ast_value_to_graphql_string;
use crate::naming;
use crate::schema::RootOperationType;
use crate::schema::SchemaDocument;
use crate::types::RustTypeRenderer;
use crate::types::TypeDescriptor;
use crate::types::TypeResolver;
use crate::CodegenError;
use crate::CodegenOptions;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, CodegenError>;

/// Name of the projection parameter every selector accessor takes last.
pub(crate) const SELECTOR_PARAM_NAME: &str = "selector";

/// Rust type of custom scalars without a configured mapping.
pub(crate) const UNMAPPED_SCALAR_RUST_TYPE: &str = "::std::string::String";

/// Turns a [`SchemaDocument`] into a [`ClientModel`].
pub struct ClientModelBuilder<'a> {
    document: &'a SchemaDocument,
    input_names: HashSet<&'a str>,
    object_names: HashSet<&'a str>,
    options: &'a CodegenOptions,
    resolver: TypeResolver,
}
impl<'a> ClientModelBuilder<'a> {
    pub fn new(
        document: &'a SchemaDocument,
        options: &'a CodegenOptions,
    ) -> Self {
        Self {
            document,
            input_names: document.inputs().iter()
                .map(|def| def.name.as_str())
                .collect(),
            object_names: document.objects().iter()
                .map(|def| def.name.as_str())
                .collect(),
            options,
            resolver: TypeResolver::from_document(document),
        }
    }

    pub fn build(self) -> Result<ClientModel> {
        if let Some(def) = self.document.unsupported_definitions().first() {
            return Err(CodegenError::UnsupportedTypeConstruct {
                construct: def.construct,
                location: def.location,
                type_name: def.name.to_string(),
            });
        }

        let scalars = self.build_scalars();

        let mut classes = IndexMap::new();
        for def in self.document.objects() {
            let class = self.build_object_class(def)?;
            classes.insert(def.name.to_string(), class);
        }
        for def in self.document.inputs() {
            let class = self.build_input_class(def)?;
            classes.insert(def.name.to_string(), class);
        }

        let mut enums = IndexMap::new();
        for def in self.document.enums() {
            enums.insert(def.name.to_string(), self.build_enum(def)?);
        }

        let query_root = self.resolve_root("query", self.document.query_type())?;
        let mutation_root =
            self.resolve_root("mutation", self.document.mutation_type())?;

        log::debug!(
            "Built client model with {} classes, {} enums and {} scalars.",
            classes.len(),
            enums.len(),
            scalars.len(),
        );

        Ok(ClientModel {
            classes,
            client_name: naming::type_name(self.options.client_name()),
            enums,
            mutation_root,
            query_root,
            scalars,
        })
    }

    fn build_arguments(
        &self,
        owner_name: &str,
        arguments: &[ast::InputValue],
    ) -> Result<Vec<ArgumentDefinition>> {
        let mut member_names = MemberNames::new(owner_name);

        arguments.iter().map(|arg| {
            let location = loc::SourcePosition::from_pos(arg.position);
            let type_descriptor =
                self.resolver.resolve(&arg.value_type, location)?;
            self.check_class_reference(
                &type_descriptor,
                ClassKind::Input,
                format!("{owner_name}({}:)", arg.name),
                location,
            )?;

            let mut name = naming::member_name(&arg.name);
            if name == SELECTOR_PARAM_NAME {
                name.push('_');
            }
            member_names.insert(&name, &arg.name)?;

            Ok(ArgumentDefinition {
                type_name: RustTypeRenderer::storage_type(&type_descriptor),
                name,
                type_descriptor,
                wire_name: arg.name.to_string(),
            })
        }).collect()
    }

    fn build_enum(&self, def: &ast::EnumType) -> Result<EnumDefinition> {
        if def.values.is_empty() {
            return Err(CodegenError::EnumWithNoValues {
                location: loc::SourcePosition::from_pos(def.position),
                type_name: def.name.to_string(),
            });
        }

        let mut member_names = MemberNames::new(&def.name);
        let members = def.values.iter().map(|value| {
            let member_name = naming::variant_name(&value.name);
            member_names.insert(&member_name, &value.name)?;
            Ok(EnumMember {
                description: value.description.to_owned(),
                member_name,
                wire_name: value.name.to_string(),
            })
        }).collect::<Result<Vec<_>>>()?;

        log::trace!("Built enum `{}` with {} members.", def.name, members.len());
        Ok(EnumDefinition {
            description: def.description.to_owned(),
            members,
            name: naming::type_name(&def.name),
        })
    }

    fn build_input_class(
        &self,
        def: &ast::InputObjectType,
    ) -> Result<ClassDefinition> {
        let mut member_names = MemberNames::new(&def.name);
        let fields = def.fields.iter().map(|field| {
            let location = loc::SourcePosition::from_pos(field.position);
            let field_path = format!("{}.{}", def.name, field.name);
            let type_descriptor =
                self.resolver.resolve(&field.value_type, location)?;
            self.check_class_reference(
                &type_descriptor,
                ClassKind::Input,
                field_path,
                location,
            )?;

            let default_value = match &field.default_value {
                Some(ast_value) => Some(
                    DefaultValue::from_ast(ast_value).ok_or_else(|| {
                        CodegenError::UnsupportedDefaultValue {
                            field_name: field.name.to_string(),
                            literal: ast_value_to_graphql_string(ast_value),
                            location,
                            type_name: def.name.to_string(),
                        }
                    })?
                ),
                None => None,
            };

            let name = naming::member_name(&field.name);
            member_names.insert(&name, &field.name)?;
            Ok(FieldDefinition {
                arguments: vec![],
                def_location: location,
                default_value,
                description: field.description.to_owned(),
                name,
                type_descriptor,
                wire_name: field.name.to_string(),
            })
        }).collect::<Result<Vec<_>>>()?;

        log::trace!("Built input class `{}` with {} fields.", def.name, fields.len());
        Ok(ClassDefinition {
            def_location: loc::SourcePosition::from_pos(def.position),
            description: def.description.to_owned(),
            fields,
            kind: ClassKind::Input,
            name: naming::type_name(&def.name),
            wire_name: def.name.to_string(),
        })
    }

    fn build_object_class(
        &self,
        def: &ast::ObjectType,
    ) -> Result<ClassDefinition> {
        let mut member_names = MemberNames::new(&def.name);
        let fields = def.fields.iter().map(|field| {
            let location = loc::SourcePosition::from_pos(field.position);
            let field_path = format!("{}.{}", def.name, field.name);
            let type_descriptor =
                self.resolver.resolve(&field.field_type, location)?;
            self.check_class_reference(
                &type_descriptor,
                ClassKind::Object,
                field_path.to_owned(),
                location,
            )?;

            let arguments =
                if type_descriptor.requires_selector() {
                    self.build_arguments(&field_path, &field.arguments)?
                } else {
                    if !field.arguments.is_empty() {
                        log::debug!(
                            "`{field_path}` takes arguments but is exposed as a \
                            plain field; its arguments are not generated."
                        );
                    }
                    vec![]
                };

            let name = naming::member_name(&field.name);
            member_names.insert(&name, &field.name)?;
            Ok(FieldDefinition {
                arguments,
                def_location: location,
                default_value: None,
                description: field.description.to_owned(),
                name,
                type_descriptor,
                wire_name: field.name.to_string(),
            })
        }).collect::<Result<Vec<_>>>()?;

        log::trace!("Built object class `{}` with {} fields.", def.name, fields.len());
        Ok(ClassDefinition {
            def_location: loc::SourcePosition::from_pos(def.position),
            description: def.description.to_owned(),
            fields,
            kind: ClassKind::Object,
            name: naming::type_name(&def.name),
            wire_name: def.name.to_string(),
        })
    }

    fn build_scalars(&self) -> Vec<ScalarDefinition> {
        self.document.scalars().iter()
            .filter(|def| {
                let is_builtin =
                    RustTypeRenderer::builtin_scalar_type(&def.name).is_some();
                if is_builtin {
                    log::debug!(
                        "Skipping declaration of built-in scalar `{}`.",
                        def.name,
                    );
                }
                !is_builtin
            })
            .map(|def| ScalarDefinition {
                description: def.description.to_owned(),
                name: naming::type_name(&def.name),
                rust_type: self.options.scalar_type(&def.name)
                    .unwrap_or(UNMAPPED_SCALAR_RUST_TYPE)
                    .to_string(),
            })
            .collect()
    }

    /// Checks that the class an object-category descriptor refers to exists
    /// and is of the kind the referencing position requires.
    fn check_class_reference(
        &self,
        type_descriptor: &TypeDescriptor,
        expected_kind: ClassKind,
        referenced_by: String,
        location: loc::SourcePosition,
    ) -> Result<()> {
        let TypeDescriptor::Object { name, .. } = type_descriptor.innermost() else {
            return Ok(());
        };

        let (matches_kind, expected_kind) = match expected_kind {
            ClassKind::Input =>
                (self.input_names.contains(name.as_str()), "input object"),
            ClassKind::Object =>
                (self.object_names.contains(name.as_str()), "object"),
        };
        if matches_kind {
            return Ok(());
        }

        if self.input_names.contains(name.as_str())
            || self.object_names.contains(name.as_str()) {
            Err(CodegenError::MismatchedTypeReference {
                expected_kind,
                location,
                referenced_by,
                type_name: name.to_string(),
            })
        } else {
            Err(CodegenError::UndefinedTypeReference {
                location,
                referenced_by,
                type_name: name.to_string(),
            })
        }
    }

    fn resolve_root(
        &self,
        operation: &str,
        root: Option<&RootOperationType>,
    ) -> Result<Option<String>> {
        let Some(root) = root else {
            log::debug!("No {operation} root declared; binding `NoOperation`.");
            return Ok(None);
        };

        if !self.object_names.contains(root.type_name.as_str()) {
            return Err(CodegenError::UndefinedTypeReference {
                location: root.location,
                referenced_by: format!("schema.{operation}"),
                type_name: root.type_name.to_string(),
            });
        }
        Ok(Some(naming::type_name(&root.type_name)))
    }
}

/// Tracks the Rust names already taken within one generated type.
struct MemberNames<'a> {
    owner_name: &'a str,
    wire_names: IndexMap<String, String>,
}
impl<'a> MemberNames<'a> {
    fn new(owner_name: &'a str) -> Self {
        Self {
            owner_name,
            wire_names: IndexMap::new(),
        }
    }

    fn insert(&mut self, member_name: &str, wire_name: &str) -> Result<()> {
        if let Some(existing_wire_name) = self.wire_names.get(member_name) {
            return Err(CodegenError::DuplicateMemberName {
                member_name: member_name.to_string(),
                type_name: self.owner_name.to_string(),
                wire_name1: existing_wire_name.to_string(),
                wire_name2: wire_name.to_string(),
            });
        }
        self.wire_names.insert(member_name.to_string(), wire_name.to_string());
        Ok(())
    }
}
