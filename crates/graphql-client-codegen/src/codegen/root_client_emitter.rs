use crate::codegen::emit_context::EmitContext;
use crate::naming;
use crate::CodegenError;
use proc_macro2::TokenStream;
use quote::quote;

type Result<T> = std::result::Result<T, CodegenError>;

/// Emits the root client: a newtype over the runtime's `Client`, bound to the
/// schema's query and mutation root types.
///
/// A missing root is bound to the runtime's `NoOperation` marker.
pub(super) fn emit_root_client(ctx: &EmitContext<'_>) -> Result<TokenStream> {
    let runtime = &ctx.runtime;
    let client_name = ctx.model.client_name();
    let client = syn::parse_str::<syn::Ident>(client_name).map_err(|_| {
        CodegenError::InvalidClientName {
            client_name: client_name.to_string(),
        }
    })?;

    let root_type = |root: Option<&str>| match root {
        Some(name) => {
            let name = naming::ident(name);
            quote! { #name }
        },
        None => quote! { #runtime::NoOperation },
    };
    let query = root_type(ctx.model.query_root());
    let mutation = root_type(ctx.model.mutation_root());

    let doc = format!(
        " Entry point for queries against `{}` and mutations against `{}`.",
        ctx.model.query_root().unwrap_or("NoOperation"),
        ctx.model.mutation_root().unwrap_or("NoOperation"),
    );

    Ok(quote! {
        #[doc = #doc]
        pub struct #client {
            inner: #runtime::Client<#query, #mutation>,
        }
        impl #client {
            pub fn new(
                transport: #runtime::Transport,
                pipeline: ::std::option::Option<#runtime::QueryPipeline>,
            ) -> Self {
                Self {
                    inner: #runtime::Client::new(transport, pipeline),
                }
            }
        }
        impl ::std::ops::Deref for #client {
            type Target = #runtime::Client<#query, #mutation>;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }
    })
}
