use crate::codegen::default_value_emitter::default_value_expr;
use crate::codegen::tests::test_utils::build_model;
use crate::codegen::tests::test_utils::tokens;
use crate::model::ClientModel;
use crate::model::DefaultValue;
use crate::types::TypeDescriptor;
use quote::quote;

fn test_model() -> ClientModel {
    build_model(concat!(
        "schema { query: Query }\n",
        "type Query { x: Int }\n",
        "enum Status { ACTIVE IN_PROGRESS }\n",
        "scalar Cents\n",
    )).expect("model build failed")
}

fn scalar(name: &str, nullable: bool) -> TypeDescriptor {
    TypeDescriptor::Scalar {
        name: name.to_string(),
        nullable,
    }
}

fn list_of(element: TypeDescriptor, nullable: bool) -> TypeDescriptor {
    TypeDescriptor::List {
        element: Box::new(element),
        nullable,
    }
}

fn render(descriptor: &TypeDescriptor, value: &DefaultValue) -> Option<String> {
    default_value_expr(&test_model(), descriptor, value).map(|expr| tokens(&expr))
}

#[test]
fn negative_numbers_render_as_negated_literals() {
    assert_eq!(
        render(&scalar("Int", false), &DefaultValue::Int(-5)),
        Some(tokens(&quote! { -5 })),
    );
    assert_eq!(
        render(&scalar("Float", false), &DefaultValue::Float(-0.25)),
        Some(tokens(&quote! { -0.25 })),
    );
    assert_eq!(
        render(&scalar("Int", false), &DefaultValue::Int(i32::MIN.into())),
        Some(tokens(&quote! { -2147483648 })),
    );
}

#[test]
fn ints_outside_the_i32_range_are_rejected() {
    assert_eq!(
        render(&scalar("Int", false), &DefaultValue::Int(i64::from(i32::MAX) + 1)),
        None,
    );
}

#[test]
fn ids_accept_strings_and_ints() {
    assert_eq!(
        render(&scalar("ID", false), &DefaultValue::Int(7)),
        Some(tokens(&quote! { ::std::string::String::from("7") })),
    );
    assert_eq!(
        render(&scalar("ID", true), &DefaultValue::String("abc".to_string())),
        Some(tokens(&quote! {
            ::std::option::Option::Some(::std::string::String::from("abc"))
        })),
    );
}

#[test]
fn custom_scalars_convert_from_the_literal() {
    assert_eq!(
        render(&scalar("Cents", false), &DefaultValue::Int(100)),
        Some(tokens(&quote! { ::std::convert::From::from(100) })),
    );
    assert_eq!(
        render(&scalar("Cents", false), &DefaultValue::Enum("ACTIVE".to_string())),
        None,
    );
}

#[test]
fn nested_lists_keep_element_nullability() {
    let descriptor = list_of(list_of(scalar("Int", true), false), true);
    let value = DefaultValue::List(vec![
        DefaultValue::List(vec![DefaultValue::Int(1), DefaultValue::Null]),
    ]);

    assert_eq!(
        render(&descriptor, &value),
        Some(tokens(&quote! {
            ::std::option::Option::Some(::std::vec![
                ::std::vec![
                    ::std::option::Option::Some(1),
                    ::std::option::Option::None
                ]
            ])
        })),
    );
}

#[test]
fn enum_defaults_resolve_through_wire_names() {
    let descriptor = list_of(
        TypeDescriptor::Enum {
            name: "Status".to_string(),
            nullable: false,
        },
        false,
    );
    let value = DefaultValue::List(vec![
        DefaultValue::Enum("IN_PROGRESS".to_string()),
        DefaultValue::Enum("ACTIVE".to_string()),
    ]);

    assert_eq!(
        render(&descriptor, &value),
        Some(tokens(&quote! {
            ::std::vec![Status::InProgress, Status::Active]
        })),
    );
    assert_eq!(
        render(&descriptor, &DefaultValue::Enum("InProgress".to_string())),
        None,
    );
}

#[test]
fn null_elements_in_non_null_lists_are_rejected() {
    let descriptor = list_of(scalar("String", false), true);
    let value = DefaultValue::List(vec![DefaultValue::Null]);

    assert_eq!(render(&descriptor, &value), None);
}
