//! # `mgen compile`
//!
//! Loads declaration documents, compiles the batch, and prints the
//! registries as JSON to stdout.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mgen_compile::{compile_with, CompileOptions};
use mgen_core::Registries;

use crate::load::load_documents;

/// Compile declaration documents and print the registries as JSON.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Declaration documents, compiled as one batch in argument order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Fail when a model field references a type no language declares.
    #[arg(long)]
    pub check_refs: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: &CompileArgs) -> Result<()> {
    let registries = compile_batch(&args.files, args.check_refs)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&registries)?
    } else {
        serde_json::to_string(&registries)?
    };
    println!("{output}");
    Ok(())
}

/// Load every file into one batch and compile it. Shared with `mgen check`.
pub(crate) fn compile_batch(files: &[PathBuf], check_refs: bool) -> Result<Registries> {
    let mut records = Vec::new();
    for file in files {
        records.extend(load_documents(file)?);
    }
    tracing::debug!(records = records.len(), files = files.len(), "batch loaded");

    let options = CompileOptions {
        check_references: check_refs,
    };
    let registries = compile_with(&records, &options)?;
    tracing::info!(
        languages = registries.types.language_count(),
        models = registries.models.len(),
        "compilation succeeded"
    );
    Ok(registries)
}
