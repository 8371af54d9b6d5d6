use crate::model::ClientModel;
use crate::model::ClientModelBuilder;
use crate::CodegenError;
use crate::CodegenOptions;
use crate::SchemaDocument;
use quote::ToTokens;

pub(super) fn build_model(sdl: &str) -> Result<ClientModel, CodegenError> {
    let doc = SchemaDocument::parse(sdl)?;
    ClientModelBuilder::new(&doc, &CodegenOptions::default()).build()
}

/// Generates a client for `sdl` and parses the output back into a syntax
/// tree.
pub(super) fn generate_file(
    sdl: &str,
    options: &CodegenOptions,
) -> Result<syn::File, CodegenError> {
    let source = crate::generate_client(sdl, options)?;
    Ok(syn::parse_file(&source).expect("generated code failed to parse"))
}

/// Normalized token text, for comparing generated fragments against
/// `quote!`-ed expectations.
///
/// Whitespace is dropped since `quote!` and `syn` space multi-character
/// punctuation differently. Trailing commas are dropped since the formatter
/// adds them to any list it breaks across lines.
pub(super) fn tokens(node: &impl ToTokens) -> String {
    node.to_token_stream()
        .to_string()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .replace(",)", ")")
        .replace(",]", "]")
        .replace(",}", "}")
}

/// Items at the top level of the file, or inside the nested modules of a
/// namespace.
pub(super) fn namespace_items<'a>(
    file: &'a syn::File,
    namespace: &[&str],
) -> &'a [syn::Item] {
    let mut items = file.items.as_slice();
    for module_name in namespace {
        items = items.iter()
            .find_map(|item| match item {
                syn::Item::Mod(module) if module.ident == module_name =>
                    module.content.as_ref().map(|(_, items)| items.as_slice()),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no `{module_name}` module generated"));
    }
    items
}

pub(super) fn find_struct<'a>(
    items: &'a [syn::Item],
    name: &str,
) -> &'a syn::ItemStruct {
    items.iter()
        .find_map(|item| match item {
            syn::Item::Struct(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{name}` struct generated"))
}

pub(super) fn find_enum<'a>(
    items: &'a [syn::Item],
    name: &str,
) -> &'a syn::ItemEnum {
    items.iter()
        .find_map(|item| match item {
            syn::Item::Enum(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{name}` enum generated"))
}

pub(super) fn find_fn<'a>(items: &'a [syn::Item], name: &str) -> &'a syn::ItemFn {
    items.iter()
        .find_map(|item| match item {
            syn::Item::Fn(item) if item.sig.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{name}` function generated"))
}

/// Finds a method in the inherent `impl` block of `type_name`.
pub(super) fn find_method<'a>(
    items: &'a [syn::Item],
    type_name: &str,
    method_name: &str,
) -> &'a syn::ImplItemFn {
    items.iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item) if item.trait_.is_none()
                && tokens(&item.self_ty) == type_name => Some(item),
            _ => None,
        })
        .flat_map(|item| item.items.iter())
        .find_map(|item| match item {
            syn::ImplItem::Fn(method) if method.sig.ident == method_name =>
                Some(method),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no `{type_name}::{method_name}` method generated"))
}

pub(super) fn find_field<'a>(
    item: &'a syn::ItemStruct,
    field_name: &str,
) -> &'a syn::Field {
    item.fields.iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == field_name))
        .unwrap_or_else(|| panic!("no `{field_name}` field on `{}`", item.ident))
}

/// The `name = value` (or bare `name`) entries of every `#[serde(...)]`
/// attribute on a field or variant, in order.
pub(super) fn serde_args(attrs: &[syn::Attribute]) -> Vec<(String, Option<String>)> {
    let mut args = vec![];
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            let name = tokens(&meta.path);
            let value = if meta.input.peek(syn::Token![=]) {
                let value: syn::LitStr = meta.value()?.parse()?;
                Some(value.value())
            } else {
                None
            };
            args.push((name, value));
            Ok(())
        }).expect("malformed serde attribute");
    }
    args
}

/// The string value of the `#[serde(rename = "...")]` attribute on a field
/// or variant.
pub(super) fn serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    serde_args(attrs).into_iter()
        .find_map(|(name, value)| (name == "rename").then_some(value).flatten())
}

/// Indicates if a field carries `#[serde(default)]`.
pub(super) fn has_serde_default(attrs: &[syn::Attribute]) -> bool {
    serde_args(attrs).iter().any(|(name, value)| name == "default" && value.is_none())
}

/// The concatenated `#[doc = "..."]` text of an item.
pub(super) fn doc_text(attrs: &[syn::Attribute]) -> String {
    attrs.iter()
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(meta) if meta.path.is_ident("doc") => match &meta.value {
                syn::Expr::Lit(syn::ExprLit { lit: syn::Lit::Str(lit), .. }) =>
                    Some(lit.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
