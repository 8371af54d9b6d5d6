mod rust_type_renderer_tests;
mod type_resolver_tests;
