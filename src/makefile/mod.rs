//! @acp:module "Makefile Emitter"
//! @acp:summary "Render the generated makefile from an ordered list of sections"
//! @acp:domain cli
//! @acp:layer output
//!
//! Each section is a pure function of the [`RenderContext`] that returns one
//! text fragment. [`SECTIONS`] fixes the order; [`render_makefile`] joins them.
//! Sections whose feature is disabled return an empty string.
//!
//! ## Layout
//!
//! 1. header comment
//! 2. basic setup (dirs, compiler, object list)
//! 3. top level objects (python module, executables)
//! 4. libraries (ROOT, HDF5, ndhist, Python)
//! 5. `all` rule
//! 6. build rules (python link, executable link)
//! 7. compile rule
//! 8. dependency generation and clean rules
//!
//! The configuration helpers (`root-config`, `h5c++`, ...) only appear as
//! `$(shell ...)` text. Nothing here runs them.

mod header;
mod libraries;
mod rules;
mod setup;
mod targets;

use chrono::{DateTime, Utc};

use crate::config::ProjectConfig;

/// File name of the generated build description
pub const MAKEFILE_NAME: &str = "makefile";

/// Section banner used between the major blocks
pub(crate) const BANNER: &str =
    "\n# _______________________________________________________________\n";

/// Inputs shared by every section
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ProjectConfig,
    pub generated_at: DateTime<Utc>,
}

/// A single makefile fragment renderer
pub type Section = fn(&RenderContext<'_>) -> String;

/// Makefile sections, in output order
pub const SECTIONS: &[(&str, Section)] = &[
    ("header", header::render),
    ("setup", setup::render),
    ("top-level-objects", targets::render_objects),
    ("libraries", libraries::render),
    ("all", rules::render_all),
    ("build-rules", targets::render_rules),
    ("compile", rules::render_compile),
    ("dependencies", rules::render_dependencies),
];

/// Render the complete makefile text
pub fn render_makefile(config: &ProjectConfig, generated_at: DateTime<Utc>) -> String {
    let ctx = RenderContext {
        config,
        generated_at,
    };

    let mut output = String::new();
    for (name, section) in SECTIONS {
        let fragment = section(&ctx);
        tracing::debug!("rendered makefile section '{}' ({} bytes)", name, fragment.len());
        output.push_str(&fragment);
    }
    output
}
