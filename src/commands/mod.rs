//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides the implementation behind the `cxxinit` binary.

pub mod scaffold;

pub use scaffold::{execute_scaffold, scaffold, ScaffoldOptions, ScaffoldReport};
