//! @acp:module "Scaffold Command"
//! @acp:summary "Validate flags, check the directory and write the project"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements the single `cxxinit` action. Everything is validated before
//! the first byte is written; after that each write is fatal on failure.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use console::style;

use crate::config::{Advisory, Flags, ProjectConfig};
use crate::error::{Result, ScaffoldError};
use crate::makefile::{render_makefile, MAKEFILE_NAME};
use crate::preflight::ensure_empty;
use crate::sources::{SourceRenderer, INCLUDE_DIR, SRC_DIR};

/// Options for the scaffold command
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory to populate
    pub root: PathBuf,
    /// Raw flag values
    pub flags: Flags,
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub config: ProjectConfig,
    pub advisories: Vec<Advisory>,
    /// Written files, relative to the project root, in write order
    pub written: Vec<PathBuf>,
}

/// Execute the scaffold command, printing progress to the terminal
pub fn execute_scaffold(options: ScaffoldOptions) -> Result<ScaffoldReport> {
    let validated = ProjectConfig::from_flags(options.flags)?;
    for advisory in &validated.advisories {
        eprintln!("{} {}", style("⚠").yellow(), advisory);
    }

    ensure_empty(&options.root)?;

    let written = scaffold(&options.root, &validated.config, Utc::now())?;
    for path in &written {
        println!("{} Created {}", style("✓").green(), path.display());
    }

    print_next_steps(&validated.config);

    Ok(ScaffoldReport {
        config: validated.config,
        advisories: validated.advisories,
        written,
    })
}

/// Write the makefile and placeholder sources into `root`.
///
/// Does not check that `root` is empty; callers run
/// [`ensure_empty`](crate::preflight::ensure_empty) first.
pub fn scaffold(
    root: &Path,
    config: &ProjectConfig,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    let sources = SourceRenderer::new().render(config)?;
    let makefile = render_makefile(config, generated_at);

    for dir in [SRC_DIR, INCLUDE_DIR] {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::io("create directory", &path, e))?;
    }

    let mut written = Vec::with_capacity(sources.len() + 1);

    write_file(root, Path::new(MAKEFILE_NAME), &makefile)?;
    written.push(PathBuf::from(MAKEFILE_NAME));

    for file in sources {
        write_file(root, &file.path, &file.contents)?;
        written.push(file.path);
    }

    Ok(written)
}

fn write_file(root: &Path, relative: &Path, contents: &str) -> Result<()> {
    let path = root.join(relative);
    fs::write(&path, contents).map_err(|e| ScaffoldError::io("write", &path, e))?;
    tracing::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

fn print_next_steps(config: &ProjectConfig) {
    println!("\n{}", style("Next steps:").bold());
    println!("  1. Run {} to build everything", style("make").cyan());

    let mut step = 2;
    if let Some(prefix) = &config.exe_prefix {
        println!(
            "  {}. Try {}",
            step,
            style(format!("./bin/{prefix}main 1")).cyan()
        );
        step += 1;
    }
    if let Some(module) = &config.python_module {
        println!(
            "  {}. Try {} from the bin/ directory",
            step,
            style(format!("python3 -c 'import {module}; print({module}.dummy(\"hi\", 1))'")).cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::makefile::tests::{assert_well_formed, fixed_time};
    use tempfile::TempDir;

    fn config(flags: Flags) -> ProjectConfig {
        ProjectConfig::from_flags(flags).unwrap().config
    }

    #[test]
    fn test_scaffold_default_project() {
        let temp = TempDir::new().unwrap();
        let written = scaffold(temp.path(), &config(Flags::default()), fixed_time()).unwrap();

        assert_eq!(
            written,
            vec![
                PathBuf::from("makefile"),
                PathBuf::from("include").join("dummy.hh"),
                PathBuf::from("src").join("dummy.cxx"),
                PathBuf::from("src").join("test-main.cxx"),
            ]
        );
        for path in &written {
            assert!(temp.path().join(path).is_file(), "{}", path.display());
        }

        let makefile = fs::read_to_string(temp.path().join("makefile")).unwrap();
        assert_well_formed(&makefile);
        assert!(makefile.contains("EXE_PREFIX    := test-"));
    }

    #[test]
    fn test_execute_refuses_non_empty_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".keep"), "").unwrap();

        let err = execute_scaffold(ScaffoldOptions {
            root: temp.path().to_path_buf(),
            flags: Flags::default(),
        })
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryNotEmpty { .. }));
        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_execute_collision_writes_nothing() {
        let temp = TempDir::new().unwrap();

        let err = execute_scaffold(ScaffoldOptions {
            root: temp.path().to_path_buf(),
            flags: Flags {
                python_module: Some("foo".into()),
                exe_prefix: Some("foo".into()),
                ..Default::default()
            },
        })
        .unwrap_err();

        assert!(err.is_usage());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_second_run_fails() {
        let temp = TempDir::new().unwrap();
        let options = ScaffoldOptions {
            root: temp.path().to_path_buf(),
            flags: Flags {
                python_module: Some("foo".into()),
                ..Default::default()
            },
        };

        let report = execute_scaffold(options.clone()).unwrap();
        assert!(report.advisories.is_empty());
        assert!(temp.path().join("src").join("foo.cxx").is_file());

        let err = execute_scaffold(options).unwrap_err();
        assert!(matches!(err, ScaffoldError::DirectoryNotEmpty { .. }));
    }

    #[test]
    fn test_execute_reports_implied_hdf5() {
        let temp = TempDir::new().unwrap();
        let report = execute_scaffold(ScaffoldOptions {
            root: temp.path().to_path_buf(),
            flags: Flags {
                ndhist: true,
                exe_prefix: Some("run-".into()),
                ..Default::default()
            },
        })
        .unwrap();

        assert_eq!(report.advisories, vec![Advisory::ImpliedHdf5]);
        assert!(report.config.libraries.hdf5);

        let makefile = fs::read_to_string(temp.path().join("makefile")).unwrap();
        assert!(makefile.contains("# --- HDF5"));
        assert!(makefile.contains("# --- ndhist"));
    }
}
