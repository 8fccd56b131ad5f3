//! @acp:module "Configuration"
//! @acp:summary "Project configuration built from command-line flags"
//! @acp:domain cli
//! @acp:layer config
//!
//! Flags are collected into [`Flags`] and validated once into an immutable
//! [`ProjectConfig`]. Auto-corrections made along the way are reported as
//! [`Advisory`] values rather than printed here.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, ScaffoldError};
use crate::sources::DUMMY_FUNCTION;

/// Executable prefix used when neither a prefix nor a module name is given
pub const DEFAULT_EXE_PREFIX: &str = "test-";

/// Optional external libraries the generated makefile can link against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Library {
    Root,
    Hdf5,
    Ndhist,
    Python,
}

impl Library {
    /// Get all supported libraries, in makefile order
    pub fn all() -> &'static [Library] {
        &[Library::Root, Library::Hdf5, Library::Ndhist, Library::Python]
    }

    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Library::Root => "ROOT",
            Library::Hdf5 => "HDF5",
            Library::Ndhist => "ndhist",
            Library::Python => "Python",
        }
    }

    /// Get the configuration helper the generated makefile calls
    pub fn helper(&self) -> &'static str {
        match self {
            Library::Root => "root-config",
            Library::Hdf5 => "h5c++",
            Library::Ndhist => "ndhist-config",
            Library::Python => "python3-config",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw flag values, before defaults and cross-flag rules are applied
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// `-r`
    pub root: bool,
    /// `-d`
    pub hdf5: bool,
    /// `-n`
    pub ndhist: bool,
    /// `-p <name>`
    pub python_module: Option<String>,
    /// `-e <prefix>`
    pub exe_prefix: Option<String>,
}

/// Library toggles after validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Libraries {
    pub root: bool,
    pub hdf5: bool,
    pub ndhist: bool,
}

/// Validated, immutable project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub libraries: Libraries,
    pub python_module: Option<String>,
    pub exe_prefix: Option<String>,
}

/// Non-fatal auto-correction applied during validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// No prefix and no module name, prefix defaulted
    DefaultExePrefix(&'static str),
    /// ndhist requested without HDF5, HDF5 enabled
    ImpliedHdf5,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DefaultExePrefix(prefix) => write!(
                f,
                "no executable prefix or python module given, using prefix '{}'",
                prefix
            ),
            Advisory::ImpliedHdf5 => write!(f, "ndhist requires HDF5, turning on HDF5 (-d)"),
        }
    }
}

/// Result of validating [`Flags`]
#[derive(Debug, Clone)]
pub struct Validated {
    pub config: ProjectConfig,
    pub advisories: Vec<Advisory>,
}

impl ProjectConfig {
    /// Apply defaults and cross-flag rules, in order: default prefix,
    /// implied HDF5, prefix/module collision. Names that would overwrite a
    /// generated source or be picked up by the executable wildcard are
    /// rejected after that.
    pub fn from_flags(flags: Flags) -> Result<Validated> {
        let mut advisories = Vec::new();

        let Flags {
            root,
            mut hdf5,
            ndhist,
            python_module,
            mut exe_prefix,
        } = flags;

        if exe_prefix.is_none() && python_module.is_none() {
            exe_prefix = Some(DEFAULT_EXE_PREFIX.to_string());
            advisories.push(Advisory::DefaultExePrefix(DEFAULT_EXE_PREFIX));
        }

        if ndhist && !hdf5 {
            hdf5 = true;
            advisories.push(Advisory::ImpliedHdf5);
        }

        if let (Some(module), Some(prefix)) = (&python_module, &exe_prefix) {
            if module == prefix {
                return Err(ScaffoldError::NameCollision {
                    name: module.clone(),
                });
            }
        }

        if let Some(module) = &python_module {
            if !is_c_identifier(module) {
                return Err(ScaffoldError::InvalidModuleName {
                    name: module.clone(),
                });
            }
            if module == DUMMY_FUNCTION {
                return Err(ScaffoldError::ReservedName {
                    name: module.clone(),
                });
            }
        }

        if let Some(prefix) = &exe_prefix {
            if !is_valid_prefix(prefix) {
                return Err(ScaffoldError::InvalidExePrefix {
                    prefix: prefix.clone(),
                });
            }

            // every src/<prefix>*.cxx is linked as an executable
            let dummy_source = format!("{DUMMY_FUNCTION}.cxx");
            if dummy_source.starts_with(prefix.as_str()) {
                return Err(ScaffoldError::PrefixClaimsSource {
                    prefix: prefix.clone(),
                    file: dummy_source,
                });
            }
            if let Some(module) = &python_module {
                if module.starts_with(prefix.as_str()) {
                    return Err(ScaffoldError::PrefixClaimsSource {
                        prefix: prefix.clone(),
                        file: format!("{module}.cxx"),
                    });
                }
            }
        }

        Ok(Validated {
            config: ProjectConfig {
                libraries: Libraries { root, hdf5, ndhist },
                python_module,
                exe_prefix,
            },
            advisories,
        })
    }

    /// Check whether a library block belongs in the makefile
    pub fn uses(&self, library: Library) -> bool {
        match library {
            Library::Root => self.libraries.root,
            Library::Hdf5 => self.libraries.hdf5,
            Library::Ndhist => self.libraries.ndhist,
            Library::Python => self.python_module.is_some(),
        }
    }

    /// Enabled libraries, in makefile order
    pub fn enabled_libraries(&self) -> Vec<Library> {
        Library::all()
            .iter()
            .copied()
            .filter(|lib| self.uses(*lib))
            .collect()
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && !prefix
            .chars()
            .any(|c| {
                c.is_whitespace()
                    || matches!(
                        c,
                        '/' | '\\' | '%' | '$' | '#' | ':' | ';' | '=' | '*' | '?' | '[' | ']' | '(' | ')'
                    )
            })
}
