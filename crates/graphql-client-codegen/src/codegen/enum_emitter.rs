use crate::codegen::emit_context;
use crate::codegen::emit_context::EmitContext;
use crate::model::EnumDefinition;
use crate::naming;
use proc_macro2::TokenStream;
use quote::format_ident;
use quote::quote;

pub(super) fn emit_enum(def: &EnumDefinition) -> TokenStream {
    let docs = emit_context::doc_attrs(def.description());
    let enum_name = naming::ident(def.name());
    let variants = def.members().iter().enumerate().map(|(idx, member)| {
        let member_docs = emit_context::doc_attrs(member.description());
        let variant = naming::ident(member.member_name());
        let wire_name = member.wire_name();
        // Stands in for the value of an enum field a response didn't select.
        let default_attr = if idx == 0 {
            quote! { #[default] }
        } else {
            quote! {}
        };
        quote! {
            #(#member_docs)*
            #default_attr
            #[serde(rename = #wire_name)]
            #variant
        }
    });

    quote! {
        #(#docs)*
        #[derive(
            Clone,
            Copy,
            Debug,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Deserialize,
            ::serde::Serialize,
        )]
        pub enum #enum_name {
            #(#variants,)*
        }
    }
}

/// Emits `register_enum_converters()`, which hands the runtime both
/// directions of every enum's wire-name table.
///
/// The function is emitted even when the schema defines no enums so that
/// callers can register unconditionally.
pub(super) fn emit_registration(ctx: &EmitContext<'_>) -> TokenStream {
    let runtime = &ctx.runtime;
    let enums = ctx.model.enums().collect::<Vec<_>>();
    let registry = if enums.is_empty() {
        format_ident!("_registry")
    } else {
        format_ident!("registry")
    };

    let registrations = enums.iter().map(|def| {
        let enum_name = naming::ident(def.name());
        let mut to_member = vec![];
        let mut to_wire = vec![];
        for member in def.members() {
            let wire_name = member.wire_name();
            let variant = naming::ident(member.member_name());
            to_member.push(quote! { (#wire_name, #enum_name::#variant) });
            to_wire.push(quote! { (#enum_name::#variant, #wire_name) });
        }
        quote! {
            #registry.register::<#enum_name>(
                ::std::collections::HashMap::from([#(#to_member),*]),
                ::std::collections::HashMap::from([#(#to_wire),*]),
            );
        }
    });

    quote! {
        /// Registers the wire-name conversions of every generated enum with
        /// the runtime.
        pub fn register_enum_converters(
            #registry: &mut #runtime::EnumConverterRegistry,
        ) {
            #(#registrations)*
        }
    }
}
