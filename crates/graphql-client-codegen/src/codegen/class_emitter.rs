use crate::codegen::default_value_emitter;
use crate::codegen::emit_context;
use crate::codegen::emit_context::EmitContext;
use crate::codegen::selector_accessor;
use crate::model::ClassDefinition;
use crate::model::ClientModel;
use crate::model::UNMAPPED_SCALAR_RUST_TYPE;
use crate::naming;
use crate::types::RustTypeRenderer;
use crate::types::TypeDescriptor;
use crate::CodegenError;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// Emits the deserializable struct for an object type.
///
/// Leaf-typed fields (scalars, enums and lists of them) are plain public
/// fields. Object-typed fields are stored in a private backing field and
/// exposed only through their selector accessor.
///
/// A response only carries the fields its query selected, so every field
/// that has a natural empty value falls back to it when absent.
pub(super) fn emit_object_class(
    ctx: &EmitContext<'_>,
    class: &ClassDefinition,
) -> Result<TokenStream> {
    let docs = emit_context::doc_attrs(class.description());
    let struct_name = naming::ident(class.name());

    let mut fields = vec![];
    let mut accessors = vec![];
    for field in class.fields() {
        let wire_name = field.wire_name();
        let field_type = emit_context::parse_type(
            &RustTypeRenderer::response_field_storage_type(field.type_descriptor()),
            &format!("{}.{}", class.wire_name(), field.wire_name()),
        )?;
        let serde_attr = if defaults_when_absent(ctx.model, field.type_descriptor()) {
            quote! { #[serde(default, rename = #wire_name)] }
        } else {
            quote! { #[serde(rename = #wire_name)] }
        };

        if field.requires_selector() {
            let backing_field =
                naming::ident(&naming::backing_field_name(field.name()));
            fields.push(quote! {
                #serde_attr
                #backing_field: #field_type
            });
            accessors.push(
                selector_accessor::emit_selector_accessor(ctx, class, field)?
            );
        } else {
            let field_docs = emit_context::doc_attrs(field.description());
            let field_name = naming::ident(field.name());
            fields.push(quote! {
                #(#field_docs)*
                #serde_attr
                pub #field_name: #field_type
            });
        }
    }

    let accessor_impl = if accessors.is_empty() {
        quote! {}
    } else {
        quote! {
            impl #struct_name {
                #(#accessors)*
            }
        }
    };

    Ok(quote! {
        #(#docs)*
        #[derive(Clone, Debug, ::serde::Deserialize)]
        pub struct #struct_name {
            #(#fields,)*
        }
        #accessor_impl
    })
}

/// Indicates if a response field stored for `descriptor` can fall back to
/// `Default::default()` when the response omits it.
///
/// Options, lists, built-in scalars and enums all have a default, as does a
/// non-null object since it's stored as an `Option`. A non-null custom scalar
/// only has one when it's left unmapped (and so is a `String`).
fn defaults_when_absent(model: &ClientModel, descriptor: &TypeDescriptor) -> bool {
    match descriptor {
        TypeDescriptor::Scalar { name, nullable: false } => {
            if RustTypeRenderer::builtin_scalar_type(name).is_some() {
                return true;
            }
            let alias = naming::type_name(name);
            model.scalars().iter()
                .find(|scalar| scalar.name() == alias)
                .is_none_or(|scalar| scalar.rust_type() == UNMAPPED_SCALAR_RUST_TYPE)
        },

        TypeDescriptor::Enum { .. }
        | TypeDescriptor::List { .. }
        | TypeDescriptor::Object { .. }
        | TypeDescriptor::Scalar { nullable: true, .. } => true,
    }
}

/// Emits the serializable struct for an input object type, along with a
/// `new()` constructor applying the schema's default values.
///
/// The constructor takes every non-null field without a default, in
/// declaration order. Nullable fields without a default start out as
/// `None`.
pub(super) fn emit_input_class(
    ctx: &EmitContext<'_>,
    class: &ClassDefinition,
) -> Result<TokenStream> {
    let docs = emit_context::doc_attrs(class.description());
    let struct_name = naming::ident(class.name());

    let mut fields = vec![];
    let mut params = vec![];
    let mut initializers = vec![];
    for field in class.fields() {
        let field_docs = emit_context::doc_attrs(field.description());
        let field_name = naming::ident(field.name());
        let wire_name = field.wire_name();
        let field_type = emit_context::parse_type(
            &RustTypeRenderer::field_storage_type(field.type_descriptor()),
            &format!("{}.{}", class.wire_name(), field.wire_name()),
        )?;
        let descriptor = field.type_descriptor();

        // An explicit `null` and an omitted field mean different things to a
        // GraphQL server; unset fields are omitted.
        let serde_attr = if descriptor.nullable() {
            quote! {
                #[serde(
                    rename = #wire_name,
                    skip_serializing_if = "::std::option::Option::is_none",
                )]
            }
        } else {
            quote! { #[serde(rename = #wire_name)] }
        };
        fields.push(quote! {
            #(#field_docs)*
            #serde_attr
            pub #field_name: #field_type
        });

        let initializer = match field.default_value() {
            Some(default_value) => {
                let value = default_value_emitter::default_value_expr(
                    ctx.model,
                    descriptor,
                    default_value,
                ).ok_or_else(|| CodegenError::UnsupportedDefaultValue {
                    field_name: wire_name.to_string(),
                    literal: default_value.to_string(),
                    location: field.def_location(),
                    type_name: class.wire_name().to_string(),
                })?;
                quote! { #field_name: #value }
            },

            None if descriptor.nullable() =>
                quote! { #field_name: ::std::option::Option::None },

            None => {
                params.push(quote! { #field_name: #field_type });
                quote! { #field_name }
            },
        };
        initializers.push(initializer);
    }

    let allow_new_without_default = if params.is_empty() {
        quote! { #[allow(clippy::new_without_default)] }
    } else {
        quote! {}
    };

    Ok(quote! {
        #(#docs)*
        #[derive(Clone, Debug, ::serde::Serialize)]
        pub struct #struct_name {
            #(#fields,)*
        }
        impl #struct_name {
            #allow_new_without_default
            pub fn new(#(#params),*) -> Self {
                Self {
                    #(#initializers,)*
                }
            }
        }
    })
}
