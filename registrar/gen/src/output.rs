//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of code generation: validating each
//! module, rendering its container class and handing the source to a
//! [`FileEmitter`].
//!
//! ## Output Structure
//!
//! One Java file per module, placed by package:
//! ```text
//! generated/
//! └── com/example/core/
//!     └── CoreModule.java
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: Every module is validated before anything is rendered
//! - **All or nothing per pass**: Every module is rendered before the first
//!   file is written, so a bad module leaves the output untouched
//! - **Atomic writes**: Each file goes through a temp file in the target
//!   directory that is then persisted over the final path

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use registrar_define::ModuleMeta;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::codegen::generate_container;
use crate::config::{GeneratorConfig, RuntimeTypes};
use crate::errors::GeneratorError;
use crate::validation::validate_module;

/// One rendered compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    pub type_name: String,
    pub source: String,
}

impl GeneratedUnit {
    /// Path of the unit relative to an output root, e.g. `com/example/Core.java`.
    pub fn relative_path(&self) -> PathBuf {
        relative_path(&self.package, &self.type_name)
    }
}

fn relative_path(package: &str, type_name: &str) -> PathBuf {
    let mut path: PathBuf = package.split('.').filter(|s| !s.is_empty()).collect();
    path.push(format!("{}.java", type_name));
    path
}

/// Receives generated source files.
///
/// Implementations decide where the source goes. Failures are reported, never
/// retried; the caller decides whether to re-run the whole pass.
pub trait FileEmitter {
    /// Emits one source file and returns the path it was written to.
    fn emit(
        &mut self,
        package: &str,
        type_name: &str,
        contents: &str,
    ) -> Result<PathBuf, GeneratorError>;
}

/// Writes each file under `root`, in a directory per package segment.
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    root: PathBuf,
}

impl DirectoryEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileEmitter for DirectoryEmitter {
    fn emit(
        &mut self,
        package: &str,
        type_name: &str,
        contents: &str,
    ) -> Result<PathBuf, GeneratorError> {
        let path = self.root.join(relative_path(package, type_name));
        write_atomic(&path, contents)?;
        info!(path = %path.display(), "Wrote generated source");
        Ok(path)
    }
}

/// Prints each file to stdout under a `=== <path> ===` header.
#[derive(Debug, Clone, Default)]
pub struct DryRunEmitter;

impl FileEmitter for DryRunEmitter {
    fn emit(
        &mut self,
        package: &str,
        type_name: &str,
        contents: &str,
    ) -> Result<PathBuf, GeneratorError> {
        let path = relative_path(package, type_name);
        println!("=== {} ===\n{}", path.display(), contents);
        Ok(path)
    }
}

/// Keeps every file in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryEmitter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl FileEmitter for MemoryEmitter {
    fn emit(
        &mut self,
        package: &str,
        type_name: &str,
        contents: &str,
    ) -> Result<PathBuf, GeneratorError> {
        let path = relative_path(package, type_name);
        self.files.insert(path.clone(), contents.to_string());
        Ok(path)
    }
}

/// Writes a file atomically using a temp file and rename.
///
/// The temp file is created in the target's own directory so the final
/// rename never crosses file systems.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be created or written
/// - The temp file cannot be persisted over `path`
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let write_error = |path: &Path, source: std::io::Error| GeneratorError::WriteError {
        path: path.display().to_string(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        debug!("Creating parent directory: {:?}", parent);
        fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| write_error(parent, e))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| write_error(temp_file.path(), e))?;

    debug!("Persisting file atomically");
    temp_file
        .persist(path)
        .map_err(|e| write_error(path, e.error))?;
    Ok(())
}

/// Validates `module` and renders its container class.
///
/// ## Errors
///
/// Returns any validation error, a `GeneratorError::ConfigError` if the
/// configured runtime class names are malformed, or a generation error.
pub fn generate_module(
    module: &ModuleMeta,
    config: &GeneratorConfig,
) -> Result<GeneratedUnit, GeneratorError> {
    let rt = config.runtime.resolve()?;
    render_unit(module, &rt, config)
}

#[instrument(skip_all, fields(module = %module.name))]
fn render_unit(
    module: &ModuleMeta,
    rt: &RuntimeTypes,
    config: &GeneratorConfig,
) -> Result<GeneratedUnit, GeneratorError> {
    validate_module(module)?;
    let file = generate_container(module, rt, &config.banner)?;
    let unit = GeneratedUnit {
        package: file.package().to_string(),
        type_name: file.type_name().to_string(),
        source: file.render(&config.indent),
    };
    debug!(bytes = unit.source.len(), "Rendered container");
    Ok(unit)
}

/// Generates every module and hands each file to `emitter`.
///
/// All modules are rendered before the first file is emitted. Two modules
/// that generate the same class fail the whole pass.
///
/// ## Returns
///
/// The paths reported by the emitter, in module order.
///
/// ## Errors
///
/// Returns the first validation, generation or emission error, or
/// `GeneratorError::DuplicateEntranceClass`.
#[instrument(skip_all, fields(modules = modules.len()))]
pub fn generate_and_write_all(
    modules: &[ModuleMeta],
    config: &GeneratorConfig,
    emitter: &mut dyn FileEmitter,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let rt = config.runtime.resolve()?;

    let units = modules
        .iter()
        .map(|module| render_unit(module, &rt, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut owners: HashMap<(&str, &str), &str> = HashMap::new();
    for (module, unit) in modules.iter().zip(&units) {
        let key = (unit.package.as_str(), unit.type_name.as_str());
        if let Some(first) = owners.insert(key, module.name.as_str()) {
            return Err(GeneratorError::DuplicateEntranceClass {
                entrance_class: format!("{}.{}", unit.package, unit.type_name),
                first: first.to_string(),
                second: module.name.clone(),
            });
        }
    }

    let mut written = Vec::with_capacity(units.len());
    for unit in &units {
        written.push(emitter.emit(&unit.package, &unit.type_name, &unit.source)?);
    }
    info!(files = written.len(), "Generation complete");
    Ok(written)
}
