use anyhow::Context;
use graphql_client_codegen::CodegenOptions;
use std::path::PathBuf;

const SCHEMA_PATH: &str = "schema/fixture.graphqls";

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed={SCHEMA_PATH}");

    let sdl = std::fs::read_to_string(SCHEMA_PATH)
        .with_context(|| format!("Failed to read {SCHEMA_PATH}"))?;
    let options = CodegenOptions::new("")
        .with_runtime_crate("crate::runtime")
        .with_scalar_type("Score", "::core::primitive::f64")
        .with_scalar_type("Slug", "::std::string::String");
    let source = graphql_client_codegen::generate_client(&sdl, &options)
        .with_context(|| format!("Failed to generate a client from {SCHEMA_PATH}"))?;

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR is not set")?);
    std::fs::write(out_dir.join("fixture_client.rs"), source)
        .context("Failed to write the generated client")?;
    Ok(())
}
