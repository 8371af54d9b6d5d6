use crate::codegen::class_emitter;
use crate::codegen::emit_context;
use crate::codegen::emit_context::EmitContext;
use crate::codegen::enum_emitter;
use crate::codegen::root_client_emitter;
use crate::model::ClientModel;
use crate::naming;
use crate::CodegenError;
use crate::CodegenOptions;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// First line of every generated file.
pub const GENERATED_HEADER: &str =
    "// @generated by graphql-client-codegen. Do not edit by hand.\n";

/// Renders a [`ClientModel`] as a single formatted Rust source file.
///
/// Items are emitted in a fixed order (root client, custom scalar aliases,
/// object classes, input classes, enums, enum registration) and each group
/// keeps schema declaration order, so identical inputs always produce
/// byte-identical output.
pub struct CodeSynthesizer<'a> {
    model: &'a ClientModel,
    options: &'a CodegenOptions,
}
impl<'a> CodeSynthesizer<'a> {
    pub fn new(model: &'a ClientModel, options: &'a CodegenOptions) -> Self {
        Self {
            model,
            options,
        }
    }

    pub fn synthesize(&self) -> Result<String> {
        let ctx = EmitContext::new(self.model, self.options.runtime_crate())?;
        self.check_client_name()?;

        let mut items = vec![root_client_emitter::emit_root_client(&ctx)?];
        for scalar in self.model.scalars() {
            let docs = emit_context::doc_attrs(scalar.description());
            let alias = naming::ident(scalar.name());
            let rust_type =
                emit_context::parse_type(scalar.rust_type(), scalar.name())?;
            items.push(quote! {
                #(#docs)*
                pub type #alias = #rust_type;
            });
        }
        for class in self.model.object_classes() {
            items.push(class_emitter::emit_object_class(&ctx, class)?);
        }
        for class in self.model.input_classes() {
            items.push(class_emitter::emit_input_class(&ctx, class)?);
        }
        for def in self.model.enums() {
            items.push(enum_emitter::emit_enum(def));
        }
        items.push(enum_emitter::emit_registration(&ctx));

        let tokens = self.wrap_in_namespace(quote! { #(#items)* })?;
        let file = syn::parse2::<syn::File>(tokens).map_err(|err| {
            CodegenError::InvalidGeneratedCode {
                message: err.to_string(),
            }
        })?;

        log::debug!(
            "Synthesized {} top-level items into namespace `{}`.",
            file.items.len(),
            self.options.namespace(),
        );
        Ok(format!("{GENERATED_HEADER}\n{}", prettyplease::unparse(&file)))
    }

    /// The root client shares the file with every generated type, so its
    /// name must be a plain identifier none of them use.
    fn check_client_name(&self) -> Result<()> {
        let client_name = self.model.client_name();
        let collides =
            self.model.classes().any(|class| class.name() == client_name)
            || self.model.enums().any(|def| def.name() == client_name)
            || self.model.scalars().iter().any(|def| def.name() == client_name);
        if collides {
            return Err(CodegenError::InvalidClientName {
                client_name: client_name.to_string(),
            });
        }
        Ok(())
    }

    /// Nests `items` in one `pub mod` per namespace segment.
    ///
    /// Segments are separated by `::` or `.` and normalized to snake_case
    /// module names (`Acme.Api` => `acme::api`).
    fn wrap_in_namespace(&self, items: TokenStream) -> Result<TokenStream> {
        let namespace = self.options.namespace().trim();
        if namespace.is_empty() {
            return Ok(items);
        }

        let invalid_namespace = || CodegenError::InvalidNamespace {
            namespace: namespace.to_string(),
        };
        let modules = namespace.replace("::", ".")
            .split('.')
            .map(|segment| {
                let segment = segment.trim();
                if segment.is_empty() {
                    return Err(invalid_namespace());
                }
                let module_name = naming::member_name(segment);
                syn::parse_str::<syn::Ident>(&module_name)
                    .map_err(|_| invalid_namespace())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(modules.iter().rev().fold(items, |inner, module| quote! {
            pub mod #module {
                #inner
            }
        }))
    }
}
