use crate::codegen::emit_context;
use crate::codegen::emit_context::EmitContext;
use crate::model::ClassDefinition;
use crate::model::FieldDefinition;
use crate::model::SELECTOR_PARAM_NAME;
use crate::naming;
use crate::types::RustTypeRenderer;
use crate::types::TypeDescriptor;
use crate::CodegenError;
use proc_macro2::Ident;
use proc_macro2::TokenStream;
use quote::format_ident;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// Emits the accessor method for an object-typed field.
///
/// The accessor takes the field's GraphQL arguments followed by a projection
/// over the field's inner-most object type, and returns the projection
/// results wrapped in the field's declared list/nullability shape. The
/// `selector` attribute carries the wire name so the runtime can translate
/// calls into a selection set.
pub(super) fn emit_selector_accessor(
    ctx: &EmitContext<'_>,
    class: &ClassDefinition,
    field: &FieldDefinition,
) -> Result<TokenStream> {
    let runtime = &ctx.runtime;
    let projection_param = &ctx.projection_param;
    let descriptor = field.type_descriptor();

    let docs = emit_context::doc_attrs(field.description());
    let method_name = naming::ident(field.name());
    let wire_name = field.wire_name();
    let backing_field = naming::ident(&naming::backing_field_name(field.name()));
    let selector = naming::ident(SELECTOR_PARAM_NAME);

    let object_type = naming::ident(&naming::type_name(descriptor.innermost_name()));
    let return_type = emit_context::parse_type(
        &RustTypeRenderer::selector_return_type(
            descriptor,
            &projection_param.to_string(),
        ),
        &format!("{}.{}", class.wire_name(), wire_name),
    )?;

    let mut params = vec![];
    for arg in field.arguments() {
        let arg_name = naming::ident(arg.name());
        let arg_type = emit_context::parse_type(
            arg.type_name(),
            &format!("{}.{}({}:)", class.wire_name(), wire_name, arg.wire_name()),
        )?;
        params.push(quote! { #arg_name: #arg_type });
    }

    // Arguments only shape the selection the runtime builds from the
    // attribute; the accessor body never reads them.
    let allow_unused = if params.is_empty() {
        quote! {}
    } else {
        quote! { #[allow(unused_variables)] }
    };

    let value = format_ident!("value");
    let projection = match descriptor {
        // Stored as an `Option` so responses which didn't select the field
        // still deserialize.
        TypeDescriptor::Object { nullable: false, .. } => {
            let item = format_ident!("item0");
            let missing = format!(
                "`{}.{}` is absent from the response; it was not selected",
                class.wire_name(),
                wire_name,
            );
            quote! {
                match #value.as_deref() {
                    ::std::option::Option::Some(#item) => selector(#item),
                    ::std::option::Option::None => ::std::panic!(#missing),
                }
            }
        },
        _ => projection_expr(descriptor, &value, 0),
    };

    Ok(quote! {
        #(#docs)*
        #[#runtime::selector(name = #wire_name)]
        #allow_unused
        pub fn #method_name<#projection_param>(
            &self,
            #(#params,)*
            #selector: impl ::std::ops::Fn(&#object_type) -> #projection_param,
        ) -> #return_type {
            let #value = &self.#backing_field;
            #projection
        }
    })
}

/// Builds the expression applying `selector` to every object reachable
/// through `value`, keeping the list and nullability wrappers of
/// `descriptor`.
///
/// Non-null objects are only reached here as list elements, which are
/// stored unboxed.
///
/// Closure parameters are suffixed with their nesting depth so nested
/// closures never shadow one another.
fn projection_expr(
    descriptor: &TypeDescriptor,
    value: &Ident,
    depth: usize,
) -> TokenStream {
    let item = format_ident!("item{depth}");
    match descriptor {
        TypeDescriptor::Object { nullable: false, .. } =>
            quote! { selector(#value) },

        TypeDescriptor::Object { nullable: true, .. } =>
            quote! { #value.as_ref().map(|#item| selector(#item)) },

        TypeDescriptor::List { element, nullable: false } => {
            let inner = projection_expr(element, &item, depth + 1);
            quote! {
                #value.iter()
                    .map(|#item| #inner)
                    .collect::<::std::vec::Vec<_>>()
            }
        },

        TypeDescriptor::List { element, nullable: true } => {
            let list = format_ident!("list{depth}");
            let inner = projection_expr(element, &item, depth + 1);
            quote! {
                #value.as_ref().map(|#list| {
                    #list.iter()
                        .map(|#item| #inner)
                        .collect::<::std::vec::Vec<_>>()
                })
            }
        },

        // Leaf values inside a list of objects can't occur; a list element
        // is either all objects or none.
        TypeDescriptor::Enum { .. } | TypeDescriptor::Scalar { .. } =>
            quote! { ::std::clone::Clone::clone(#value) },
    }
}
