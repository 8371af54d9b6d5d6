mod rust_type_renderer;
mod type_descriptor;
mod type_resolver;

pub use rust_type_renderer::RustTypeRenderer;
pub use type_descriptor::TypeDescriptor;
pub use type_resolver::BUILTIN_SCALAR_NAMES;
pub use type_resolver::TypeResolver;

#[cfg(test)]
mod tests;
