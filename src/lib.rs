// lib.rs - shpack library root

//! # shpack - single-header packer for C/C++ libraries
//!
//! Concatenates intro, public, private and outro file groups into one
//! amalgamated header. Private sources lose any `#include` of a header that
//! is itself part of the pack, and the implementation half is wrapped in
//! `#ifdef <MACRO>_IMPLEMENTATION`.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use shpack::prelude::*;
//!
//! let tokens: Vec<String> = ["--macro", "NK", "--pub", "nk.h"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let args = match parse_args(&tokens)? {
//!     Command::Pack(args) => args,
//!     _ => return Ok(()),
//! };
//! let options = validate_options(args)?;
//! let document = Amalgamation::load(&options)?.render()?;
//! # Ok::<(), PackError>(())
//! ```

pub mod cli;
pub mod emit;
pub mod error;
pub mod resolve;
pub mod strip;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{parse_args, validate_options, Args, Command, Config, Options};
    pub use crate::emit::{write_amalgamation, Amalgamation};
    pub use crate::error::PackError;
    pub use crate::resolve::{resolve_file_list, FileGroup};
    pub use crate::strip::{omit_includes, IncludeFilter};
}

pub use cli::{Args, Command, Options};
pub use emit::Amalgamation;
pub use error::PackError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
