#![forbid(unsafe_code)]

//! @acp:module "cxxinit Library"
//! @acp:summary "Scaffold makefile-driven C++ projects"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # cxxinit
//!
//! Writes a `makefile` and a few placeholder sources into an empty
//! directory, so `make` works straight away.
//!
//! ## Features
//!
//! - **Optional libraries**: ROOT (`-r`), HDF5 (`-d`), ndhist (`-n`)
//! - **Python extension module**: `-p <name>` adds `src/<name>.cxx` and a
//!   shared-library link rule
//! - **Executables**: `-e <prefix>` builds every `src/<prefix>*.cxx`
//! - **Safe by default**: refuses to touch a directory that has any entries
//!
//! ## Example
//!
//! ```rust,no_run
//! use cxxinit::{execute_scaffold, Flags, ScaffoldOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let report = execute_scaffold(ScaffoldOptions {
//!         root: ".".into(),
//!         flags: Flags {
//!             hdf5: true,
//!             exe_prefix: Some("run-".into()),
//!             ..Default::default()
//!         },
//!     })?;
//!
//!     println!("wrote {} files", report.written.len());
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod makefile;
pub mod preflight;
pub mod sources;

// Re-exports
pub use commands::{execute_scaffold, scaffold, ScaffoldOptions, ScaffoldReport};
pub use config::{Advisory, Flags, Library, ProjectConfig, Validated, DEFAULT_EXE_PREFIX};
pub use error::{Result, ScaffoldError};
pub use makefile::{render_makefile, MAKEFILE_NAME};
pub use preflight::ensure_empty;
pub use sources::{SourceFile, SourceRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
