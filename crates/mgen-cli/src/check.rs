//! # `mgen check`
//!
//! Validates declaration documents without emitting the registries. Exits
//! non-zero on the first violated rule, which makes the command usable as
//! a pre-commit or CI gate for declaration documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::compile::compile_batch;

/// Validate declarations without emitting registries.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Declaration documents, checked as one batch in argument order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Also require every model field to reference a declared type.
    #[arg(long)]
    pub check_refs: bool,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let registries = compile_batch(&args.files, args.check_refs)?;
    println!(
        "ok: {} languages, {} models",
        registries.types.language_count(),
        registries.models.len()
    );
    Ok(())
}
