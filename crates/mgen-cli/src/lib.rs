//! # mgen-cli — Compiler Driver
//!
//! Handler modules for the `mgen` binary. Each subcommand owns a module
//! with its clap `Args` struct and a `run` function; `main.rs` only
//! assembles and dispatches. Document loading lives in [`load`] so the
//! compiler crates stay free of I/O.

pub mod check;
pub mod compile;
pub mod load;
