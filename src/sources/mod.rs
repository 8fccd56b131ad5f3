//! @acp:module "Placeholder Sources"
//! @acp:summary "Render the dummy C++ sources the generated makefile builds"
//! @acp:domain cli
//! @acp:layer output
//!
//! Templates are embedded at compile time and rendered with handlebars in
//! strict mode: referencing an unknown variable is an error.

use std::collections::HashSet;
use std::path::PathBuf;

use handlebars::Handlebars;
use serde::Serialize;

use crate::config::{Library, ProjectConfig};
use crate::error::{Result, ScaffoldError};

/// Directory holding compiled sources, relative to the project root
pub const SRC_DIR: &str = "src";
/// Directory holding headers, relative to the project root
pub const INCLUDE_DIR: &str = "include";

/// Name of the placeholder function every source calls
pub const DUMMY_FUNCTION: &str = "dummy";
/// Input the placeholder function refuses with an exception
pub const FORBIDDEN_INPUT: i32 = 42;

const DUMMY_HEADER: &str = include_str!("templates/dummy.hh.hbs");
const DUMMY_SOURCE: &str = include_str!("templates/dummy.cxx.hbs");
const MAIN_SOURCE: &str = include_str!("templates/main.cxx.hbs");
const PYTHON_MODULE: &str = include_str!("templates/python_module.cxx.hbs");

/// A rendered file, with its path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Data every source template is rendered against
#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    header: String,
    guard: String,
    function: &'static str,
    forbidden: i32,
    project: &'a ProjectConfig,
    libraries: Vec<Library>,
}

/// Renders placeholder sources for a project configuration
pub struct SourceRenderer {
    registry: Handlebars<'static>,
}

impl SourceRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        Self { registry }
    }

    /// Render every file the configuration calls for: the dummy header and
    /// source always, then the python module and the executable main when
    /// enabled.
    pub fn render(&self, config: &ProjectConfig) -> Result<Vec<SourceFile>> {
        let data = TemplateContext {
            header: format!("{DUMMY_FUNCTION}.hh"),
            guard: format!("{}_HH", DUMMY_FUNCTION.to_uppercase()),
            function: DUMMY_FUNCTION,
            forbidden: FORBIDDEN_INPUT,
            project: config,
            libraries: config.enabled_libraries(),
        };

        let mut files = vec![
            SourceFile {
                path: PathBuf::from(INCLUDE_DIR).join(&data.header),
                contents: self.render_template("dummy.hh", DUMMY_HEADER, &data)?,
            },
            SourceFile {
                path: PathBuf::from(SRC_DIR).join(format!("{DUMMY_FUNCTION}.cxx")),
                contents: self.render_template("dummy.cxx", DUMMY_SOURCE, &data)?,
            },
        ];

        if let Some(module) = &config.python_module {
            files.push(SourceFile {
                path: PathBuf::from(SRC_DIR).join(format!("{module}.cxx")),
                contents: self.render_template("python_module.cxx", PYTHON_MODULE, &data)?,
            });
        }

        if let Some(prefix) = &config.exe_prefix {
            files.push(SourceFile {
                path: PathBuf::from(SRC_DIR).join(format!("{prefix}main.cxx")),
                contents: self.render_template("main.cxx", MAIN_SOURCE, &data)?,
            });
        }

        let mut seen = HashSet::new();
        for file in &files {
            if !seen.insert(&file.path) {
                return Err(ScaffoldError::DuplicateOutput {
                    path: file.path.clone(),
                });
            }
        }

        Ok(files)
    }

    fn render_template<T: Serialize>(
        &self,
        name: &'static str,
        template: &str,
        data: &T,
    ) -> Result<String> {
        self.registry
            .render_template(template, data)
            .map_err(|e| ScaffoldError::Template {
                name,
                source: Box::new(e),
            })
    }
}

impl Default for SourceRenderer {
    fn default() -> Self {
        Self::new()
    }
}
