use crate::model::ClientModel;
use crate::naming;
use crate::CodegenError;
use proc_macro2::Ident;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, CodegenError>;

/// Names for the projection type parameter of selector accessors, in order
/// of preference.
const PROJECTION_PARAM_CANDIDATES: &[&str] = &["T", "TProjected", "TSelected"];

/// State shared by every emitter during one synthesis run.
pub(super) struct EmitContext<'a> {
    pub(super) model: &'a ClientModel,
    pub(super) projection_param: Ident,
    pub(super) runtime: syn::Path,
}
impl<'a> EmitContext<'a> {
    pub(super) fn new(
        model: &'a ClientModel,
        runtime_crate: &str,
    ) -> Result<Self> {
        let runtime = syn::parse_str::<syn::Path>(runtime_crate).map_err(|err| {
            CodegenError::InvalidRuntimePath {
                message: err.to_string(),
                path: runtime_crate.to_string(),
            }
        })?;

        Ok(Self {
            model,
            projection_param: projection_param_for(model),
            runtime,
        })
    }
}

/// Parses a Rust type string produced by the model (or configured for a
/// custom scalar).
pub(super) fn parse_type(
    rust_type: &str,
    graphql_name: &str,
) -> Result<syn::Type> {
    syn::parse_str::<syn::Type>(rust_type).map_err(|err| {
        CodegenError::InvalidRustType {
            graphql_name: graphql_name.to_string(),
            message: err.to_string(),
            rust_type: rust_type.to_string(),
        }
    })
}

/// `#[doc = "..."]` attributes for a schema description, one per line.
pub(super) fn doc_attrs(description: Option<&str>) -> Vec<TokenStream> {
    let Some(description) = description else {
        return vec![];
    };

    description.trim().lines().map(|line| {
        let line = format!(" {}", line.trim_end());
        quote! { #[doc = #line] }
    }).collect()
}

/// The first candidate type parameter name no generated type uses.
fn projection_param_for(model: &ClientModel) -> Ident {
    let taken = model.classes().map(|class| class.name())
        .chain(model.enums().map(|def| def.name()))
        .chain(model.scalars().iter().map(|def| def.name()))
        .chain(std::iter::once(model.client_name()))
        .collect::<HashSet<_>>();

    let mut suffix = 0usize;
    loop {
        for candidate in PROJECTION_PARAM_CANDIDATES {
            let name = if suffix == 0 {
                candidate.to_string()
            } else {
                format!("{candidate}{suffix}")
            };
            if !taken.contains(name.as_str()) {
                return naming::ident(&name);
            }
        }
        suffix += 1;
    }
}
