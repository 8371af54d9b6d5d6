//! The generation model: ordered, fully-resolved definitions ready for code
//! synthesis.

mod argument_definition;
mod class_definition;
mod client_model;
mod client_model_builder;
mod default_value;
mod enum_definition;
mod field_definition;
mod scalar_definition;

pub use argument_definition::ArgumentDefinition;
pub use class_definition::ClassDefinition;
pub use class_definition::ClassKind;
pub use client_model::ClientModel;
pub use client_model_builder::ClientModelBuilder;
pub(crate) use client_model_builder::SELECTOR_PARAM_NAME;
pub(crate) use client_model_builder::UNMAPPED_SCALAR_RUST_TYPE;
pub use default_value::DefaultValue;
pub use enum_definition::EnumDefinition;
pub use enum_definition::EnumMember;
pub use field_definition::FieldDefinition;
pub use scalar_definition::ScalarDefinition;
