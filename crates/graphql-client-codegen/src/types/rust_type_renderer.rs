use crate::naming;
use crate::types::TypeDescriptor;

const BOX_PATH: &str = "::std::boxed::Box";
const OPTION_PATH: &str = "::std::option::Option";
const STRING_PATH: &str = "::std::string::String";
const VEC_PATH: &str = "::std::vec::Vec";

/// Renders [`TypeDescriptor`]s as Rust type strings.
///
/// Paths to std types and primitives are fully qualified so that schema
/// types named `Option`, `String`, `i32` and the like can't shadow them in
/// generated code.
pub struct RustTypeRenderer;
impl RustTypeRenderer {
    /// The Rust type a built-in GraphQL scalar maps to, if `scalar_name` is
    /// one.
    pub fn builtin_scalar_type(scalar_name: &str) -> Option<&'static str> {
        match scalar_name {
            "Boolean" => Some("::core::primitive::bool"),
            "Float" => Some("::core::primitive::f64"),
            "ID" | "String" => Some(STRING_PATH),
            "Int" => Some("::core::primitive::i32"),
            _ => None,
        }
    }

    /// The type of a parameter accepting a value of `descriptor`.
    pub fn storage_type(descriptor: &TypeDescriptor) -> String {
        Self::render_storage_type(descriptor, /* box_objects = */ false)
    }

    /// The type of an input struct field holding a value of `descriptor`.
    ///
    /// Objects outside of a list are boxed so that self-referencing and
    /// mutually-referencing types have a finite size.
    pub fn field_storage_type(descriptor: &TypeDescriptor) -> String {
        Self::render_storage_type(descriptor, /* box_objects = */ true)
    }

    /// The type of a response struct field holding a value of `descriptor`.
    ///
    /// Same as [`field_storage_type()`](Self::field_storage_type) except that
    /// a non-null object outside of a list is stored as an `Option`: a
    /// response only carries the fields its query selected, so the object
    /// may be absent even though the schema declares it non-null.
    pub fn response_field_storage_type(descriptor: &TypeDescriptor) -> String {
        match descriptor {
            TypeDescriptor::Object { name, nullable: false } => Self::wrap_nullable(
                true,
                format!("{BOX_PATH}<{}>", naming::type_name(name)),
            ),
            _ => Self::field_storage_type(descriptor),
        }
    }

    fn render_storage_type(descriptor: &TypeDescriptor, box_objects: bool) -> String {
        let inner = match descriptor {
            TypeDescriptor::List { element, .. } => format!(
                "{VEC_PATH}<{}>",
                Self::render_storage_type(element, false),
            ),

            TypeDescriptor::Object { name, .. } if box_objects =>
                format!("{BOX_PATH}<{}>", naming::type_name(name)),

            TypeDescriptor::Scalar { name, .. } =>
                match Self::builtin_scalar_type(name) {
                    Some(builtin) => builtin.to_string(),
                    None => naming::type_name(name),
                },

            TypeDescriptor::Enum { name, .. }
            | TypeDescriptor::Object { name, .. } =>
                naming::type_name(name),
        };
        Self::wrap_nullable(descriptor.nullable(), inner)
    }

    /// The type a selector accessor returns for `descriptor` when the
    /// caller's projection returns `projected`.
    ///
    /// Each object position becomes `projected`; list and nullability
    /// wrappers are kept as declared.
    pub fn selector_return_type(
        descriptor: &TypeDescriptor,
        projected: &str,
    ) -> String {
        let inner = match descriptor {
            TypeDescriptor::List { element, .. } => format!(
                "{VEC_PATH}<{}>",
                Self::selector_return_type(element, projected),
            ),

            TypeDescriptor::Object { .. } => projected.to_string(),

            TypeDescriptor::Enum { .. } | TypeDescriptor::Scalar { .. } =>
                return Self::storage_type(descriptor),
        };
        Self::wrap_nullable(descriptor.nullable(), inner)
    }

    fn wrap_nullable(nullable: bool, inner: String) -> String {
        if nullable {
            format!("{OPTION_PATH}<{inner}>")
        } else {
            inner
        }
    }
}
