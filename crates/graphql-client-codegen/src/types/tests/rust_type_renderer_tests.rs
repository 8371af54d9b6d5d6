use crate::loc;
use crate::types::tests::test_utils::parse_type_ref;
use crate::types::RustTypeRenderer;
use crate::types::TypeDescriptor;
use crate::types::TypeResolver;

fn descriptor(type_ref: &str) -> TypeDescriptor {
    TypeResolver::new(["Color"], ["DateTime"])
        .resolve(
            &parse_type_ref(type_ref),
            loc::SourcePosition { col: 1, line: 1 },
        )
        .expect("resolution failed")
}

#[test]
fn builtin_scalars_map_to_rust_primitives() {
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("Int!")),
        "::core::primitive::i32",
    );
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("Float!")),
        "::core::primitive::f64",
    );
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("Boolean!")),
        "::core::primitive::bool",
    );
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("String!")),
        "::std::string::String",
    );
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("ID!")),
        "::std::string::String",
    );
}

#[test]
fn custom_scalars_and_enums_use_their_own_names() {
    assert_eq!(RustTypeRenderer::storage_type(&descriptor("DateTime!")), "DateTime");
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("Color")),
        "::std::option::Option<Color>",
    );
}

#[test]
fn nullable_lists_and_elements_wrap_independently() {
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("[Int!]")),
        "::std::option::Option<::std::vec::Vec<::core::primitive::i32>>",
    );
    assert_eq!(
        RustTypeRenderer::storage_type(&descriptor("[Int]!")),
        "::std::vec::Vec<::std::option::Option<::core::primitive::i32>>",
    );
}

#[test]
fn object_fields_are_boxed_outside_of_lists() {
    assert_eq!(
        RustTypeRenderer::field_storage_type(&descriptor("User!")),
        "::std::boxed::Box<User>",
    );
    assert_eq!(
        RustTypeRenderer::field_storage_type(&descriptor("User")),
        "::std::option::Option<::std::boxed::Box<User>>",
    );
    assert_eq!(
        RustTypeRenderer::field_storage_type(&descriptor("[User]!")),
        "::std::vec::Vec<::std::option::Option<User>>",
    );

    // Parameters are never boxed.
    assert_eq!(RustTypeRenderer::storage_type(&descriptor("User!")), "User");
}

#[test]
fn response_fields_store_non_null_objects_as_optional() {
    assert_eq!(
        RustTypeRenderer::response_field_storage_type(&descriptor("User!")),
        "::std::option::Option<::std::boxed::Box<User>>",
    );
    assert_eq!(
        RustTypeRenderer::response_field_storage_type(&descriptor("User")),
        "::std::option::Option<::std::boxed::Box<User>>",
    );
    assert_eq!(
        RustTypeRenderer::response_field_storage_type(&descriptor("[User!]!")),
        "::std::vec::Vec<User>",
    );
    assert_eq!(
        RustTypeRenderer::response_field_storage_type(&descriptor("Int!")),
        "::core::primitive::i32",
    );
}

#[test]
fn selector_return_types_replace_objects_with_the_projection() {
    assert_eq!(
        RustTypeRenderer::selector_return_type(&descriptor("User!"), "T"),
        "T",
    );
    assert_eq!(
        RustTypeRenderer::selector_return_type(&descriptor("User"), "T"),
        "::std::option::Option<T>",
    );
    assert_eq!(
        RustTypeRenderer::selector_return_type(&descriptor("[[User!]]!"), "T"),
        "::std::vec::Vec<::std::option::Option<::std::vec::Vec<T>>>",
    );
}
