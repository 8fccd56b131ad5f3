//! @acp:module "Errors"
//! @acp:summary "Error types for project scaffolding"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Everything that can stop a scaffold run
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory already has entries (hidden ones included)
    #[error("directory {} is not empty (found: {})", .path.display(), .entries.join(", "))]
    DirectoryNotEmpty { path: PathBuf, entries: Vec<String> },

    /// Module name and executable prefix would produce clashing outputs
    #[error("python module name and executable prefix are both '{name}', they must differ")]
    NameCollision { name: String },

    /// Module name is not usable as a C identifier
    #[error("'{name}' is not a valid python module name (use letters, digits and '_', not starting with a digit)")]
    InvalidModuleName { name: String },

    /// Module name would replace the placeholder source
    #[error("'{name}' is reserved for the placeholder source, pick another python module name")]
    ReservedName { name: String },

    /// Executable wildcard `src/<prefix>*.cxx` would also match another source
    #[error("executable prefix '{prefix}' would build src/{file} as an executable, pick another prefix")]
    PrefixClaimsSource { prefix: String, file: String },

    /// Two generated files would land on the same path
    #[error("generated file {} would be written twice", .path.display())]
    DuplicateOutput { path: PathBuf },

    /// Executable prefix is not usable in a file name
    #[error("'{prefix}' is not a valid executable prefix (must be non-empty, without whitespace, path separators or make metacharacters)")]
    InvalidExePrefix { prefix: String },

    /// Filesystem failure while checking or writing the project
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A placeholder source template failed to render
    #[error("failed to render template '{name}': {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl ScaffoldError {
    /// Usage errors are caused by the invocation itself; the CLI prints the
    /// usage synopsis alongside them.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ScaffoldError::DirectoryNotEmpty { .. }
                | ScaffoldError::NameCollision { .. }
                | ScaffoldError::InvalidModuleName { .. }
                | ScaffoldError::InvalidExePrefix { .. }
                | ScaffoldError::ReservedName { .. }
                | ScaffoldError::PrefixClaimsSource { .. }
        )
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_classification() {
        let collision = ScaffoldError::NameCollision { name: "foo".into() };
        assert!(collision.is_usage());

        let io = ScaffoldError::io(
            "write",
            "makefile",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io.is_usage());
    }

    #[test]
    fn test_not_empty_message_lists_entries() {
        let err = ScaffoldError::DirectoryNotEmpty {
            path: PathBuf::from("proj"),
            entries: vec![".git".into(), "README".into()],
        };
        assert_eq!(
            err.to_string(),
            "directory proj is not empty (found: .git, README)"
        );
    }
}
