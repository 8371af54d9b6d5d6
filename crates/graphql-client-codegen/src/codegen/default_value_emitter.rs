use crate::model::ClientModel;
use crate::model::DefaultValue;
use crate::naming;
use crate::types::TypeDescriptor;
use proc_macro2::Literal;
use proc_macro2::TokenStream;
use quote::quote;

/// Renders a default value literal as a Rust expression of the field's
/// storage type.
///
/// Returns `None` when the literal's shape doesn't fit the field's type
/// (e.g. a string for an `Int` field, or an enum value the enum doesn't
/// define).
pub(super) fn default_value_expr(
    model: &ClientModel,
    descriptor: &TypeDescriptor,
    value: &DefaultValue,
) -> Option<TokenStream> {
    if let DefaultValue::Null = value {
        return descriptor.nullable()
            .then(|| quote! { ::std::option::Option::None });
    }

    let expr = non_null_value_expr(model, descriptor, value)?;
    Some(if descriptor.nullable() {
        quote! { ::std::option::Option::Some(#expr) }
    } else {
        expr
    })
}

fn non_null_value_expr(
    model: &ClientModel,
    descriptor: &TypeDescriptor,
    value: &DefaultValue,
) -> Option<TokenStream> {
    match descriptor {
        TypeDescriptor::Enum { name, .. } => {
            let DefaultValue::Enum(wire_name) = value else {
                return None;
            };
            let def = model.enum_definition(name)?;
            let enum_type = naming::ident(def.name());
            let member = naming::ident(def.wire_to_member(wire_name)?);
            Some(quote! { #enum_type::#member })
        },

        TypeDescriptor::List { element, .. } => {
            let items = match value {
                DefaultValue::List(values) => values.iter()
                    .map(|value| default_value_expr(model, element, value))
                    .collect::<Option<Vec<_>>>()?,

                // A single value is coerced into a one-element list.
                single => vec![default_value_expr(model, element, single)?],
            };
            Some(quote! { ::std::vec![#(#items),*] })
        },

        TypeDescriptor::Object { .. } => None,

        TypeDescriptor::Scalar { name, .. } =>
            scalar_value_expr(name, value),
    }
}

fn scalar_value_expr(scalar_name: &str, value: &DefaultValue) -> Option<TokenStream> {
    match (scalar_name, value) {
        ("Boolean", DefaultValue::Boolean(value)) => Some(quote! { #value }),

        ("Float", DefaultValue::Float(value)) => float_literal(*value),
        ("Float", DefaultValue::Int(value)) => float_literal(*value as f64),

        ("ID", DefaultValue::Int(value)) => {
            let value = value.to_string();
            Some(quote! { ::std::string::String::from(#value) })
        },
        ("ID" | "String", DefaultValue::String(value)) =>
            Some(quote! { ::std::string::String::from(#value) }),

        ("Int", DefaultValue::Int(value)) => {
            let value = i32::try_from(*value).ok()?;
            Some(int_literal(value.into()))
        },

        ("Boolean" | "Float" | "ID" | "Int" | "String", _) => None,

        // Custom scalars are aliases of a configured Rust type which is
        // expected to convert from the literal's natural Rust type.
        (_, DefaultValue::Boolean(value)) =>
            Some(quote! { ::std::convert::From::from(#value) }),
        (_, DefaultValue::Float(value)) => {
            let literal = float_literal(*value)?;
            Some(quote! { ::std::convert::From::from(#literal) })
        },
        (_, DefaultValue::Int(value)) => {
            let literal = int_literal(*value);
            Some(quote! { ::std::convert::From::from(#literal) })
        },
        (_, DefaultValue::String(value)) =>
            Some(quote! { ::std::convert::From::from(#value) }),
        (_, DefaultValue::Enum(_) | DefaultValue::List(_) | DefaultValue::Null) =>
            None,
    }
}

fn float_literal(value: f64) -> Option<TokenStream> {
    if !value.is_finite() {
        return None;
    }
    let literal = Literal::f64_unsuffixed(value.abs());
    Some(if value.is_sign_negative() {
        quote! { -#literal }
    } else {
        quote! { #literal }
    })
}

fn int_literal(value: i64) -> TokenStream {
    let literal = Literal::u64_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { -#literal }
    } else {
        quote! { #literal }
    }
}
