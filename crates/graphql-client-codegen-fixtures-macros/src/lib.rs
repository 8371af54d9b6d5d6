//! Attribute macros of the stand-in client runtime.

use proc_macro::TokenStream;

/// Marks a generated selector accessor with the wire name of its field.
///
/// A real runtime's call-site analyzer reads this marker to build selection
/// sets. Here the marker's arguments are only checked for shape and the
/// accessor is passed through unchanged.
#[proc_macro_attribute]
pub fn selector(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut wire_name: Option<syn::LitStr> = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            wire_name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported selector property"))
        }
    });
    syn::parse_macro_input!(args with parser);

    match wire_name {
        Some(wire_name) if !wire_name.value().is_empty() => item,
        Some(wire_name) => syn::Error::new(wire_name.span(), "empty selector name")
            .to_compile_error()
            .into(),
        None => syn::Error::new(
            proc_macro2::Span::call_site(),
            "missing `name = \"...\"` selector property",
        ).to_compile_error().into(),
    }
}
