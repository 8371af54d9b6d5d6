//! Rendering of a [`ClientModel`](crate::model::ClientModel) into Rust
//! source text.
//!
//! Each emitter produces the tokens for one category of generated items;
//! [`CodeSynthesizer`] orders them, nests them in the target namespace and
//! formats the result.

mod class_emitter;
mod code_synthesizer;
mod default_value_emitter;
mod emit_context;
mod enum_emitter;
mod root_client_emitter;
mod selector_accessor;

pub use code_synthesizer::CodeSynthesizer;
pub use code_synthesizer::GENERATED_HEADER;

#[cfg(test)]
mod tests;
