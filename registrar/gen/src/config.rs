//! Generator configuration.
//!
//! The generated container calls into a runtime library whose class names
//! are fixed per runtime release. They are configurable so the generator can
//! target a relocated or shaded runtime without a rebuild.
//!
//! ## Examples
//!
//! ```
//! use registrar_gen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//! indent = "  "
//!
//! [runtime]
//! provider = "jakarta.inject.Provider"
//! "#).unwrap();
//!
//! assert_eq!(config.indent, "  ");
//! assert_eq!(config.runtime.provider, "jakarta.inject.Provider");
//! // Unspecified names keep their defaults
//! assert!(config.runtime.registry.ends_with(".Registry"));
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::GeneratorError;
use crate::java::ClassName;

/// Top-level generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// One level of indentation in the generated source.
    pub indent: String,
    /// First line of the generated class javadoc.
    pub banner: String,
    pub runtime: RuntimeApi,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            banner: "Generated by registrar-gen, don't edit it.".to_string(),
            runtime: RuntimeApi::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a TOML configuration document.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, GeneratorError> {
        toml::from_str(source).map_err(|e| GeneratorError::ConfigError(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let source = fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&source).map_err(|e| match e {
            GeneratorError::ConfigError(message) => {
                GeneratorError::ConfigError(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    /// Sets the indent to `width` spaces.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }
}

/// Fully-qualified names of the runtime API the generated code calls into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeApi {
    /// Base class of every generated container.
    pub module_container: String,
    pub module_data: String,
    pub module_task_options: String,
    pub module_activator: String,
    /// Activator class that means "no custom activator".
    pub default_activator: String,
    pub bootstrap_mode: String,
    pub service_central: String,
    pub registry: String,
    pub task_container: String,
    pub thread_mode: String,
    pub service_dependency: String,
    /// Launcher class that means "use the built-in launcher".
    pub default_launcher: String,
    /// Holder of the static helpers (`singletonProvider`, `emptyAnyArray`, ...).
    pub builtins: String,
    pub provider: String,
    pub pair: String,
    /// Holder of the static `to(key, value)` pair factory.
    pub tuples: String,
}

impl Default for RuntimeApi {
    fn default() -> Self {
        Self {
            module_container: "com.bilibili.brouter.api.internal.module.ModuleContainer".to_string(),
            module_data: "com.bilibili.brouter.api.internal.module.ModuleData".to_string(),
            module_task_options: "com.bilibili.brouter.api.internal.module.ModuleTaskOptions"
                .to_string(),
            module_activator: "com.bilibili.brouter.api.ModuleActivator".to_string(),
            default_activator: "com.bilibili.brouter.api.internal.module.DefaultModuleActivator"
                .to_string(),
            bootstrap_mode: "com.bilibili.brouter.api.BootStrapMode".to_string(),
            service_central: "com.bilibili.brouter.api.ServiceCentral".to_string(),
            registry: "com.bilibili.brouter.api.internal.Registry".to_string(),
            task_container: "com.bilibili.brouter.api.task.TaskContainer".to_string(),
            thread_mode: "com.bilibili.brouter.api.task.ThreadMode".to_string(),
            service_dependency: "com.bilibili.brouter.api.task.ServiceDependency".to_string(),
            default_launcher: "com.bilibili.brouter.api.Launcher".to_string(),
            builtins: "com.bilibili.brouter.api.internal.BuiltInKt".to_string(),
            provider: "javax.inject.Provider".to_string(),
            pair: "kotlin.Pair".to_string(),
            tuples: "kotlin.TuplesKt".to_string(),
        }
    }
}

impl RuntimeApi {
    /// Parses every configured name.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` naming the offending key.
    pub fn resolve(&self) -> Result<RuntimeTypes, GeneratorError> {
        let parse = |key: &str, value: &str| {
            ClassName::parse(value).map_err(|e| {
                GeneratorError::ConfigError(format!("runtime.{} is invalid: {}", key, e))
            })
        };

        Ok(RuntimeTypes {
            module_container: parse("module_container", &self.module_container)?,
            module_data: parse("module_data", &self.module_data)?,
            module_task_options: parse("module_task_options", &self.module_task_options)?,
            module_activator: parse("module_activator", &self.module_activator)?,
            default_activator: parse("default_activator", &self.default_activator)?,
            bootstrap_mode: parse("bootstrap_mode", &self.bootstrap_mode)?,
            service_central: parse("service_central", &self.service_central)?,
            registry: parse("registry", &self.registry)?,
            task_container: parse("task_container", &self.task_container)?,
            thread_mode: parse("thread_mode", &self.thread_mode)?,
            service_dependency: parse("service_dependency", &self.service_dependency)?,
            default_launcher: parse("default_launcher", &self.default_launcher)?,
            builtins: parse("builtins", &self.builtins)?,
            provider: parse("provider", &self.provider)?,
            pair: parse("pair", &self.pair)?,
            tuples: parse("tuples", &self.tuples)?,
            object: ClassName::top("java.lang", "Object"),
            string: ClassName::top("java.lang", "String"),
            class: ClassName::top("java.lang", "Class"),
            override_annotation: ClassName::top("java.lang", "Override"),
        })
    }
}

/// [`RuntimeApi`] with every name parsed, ready for the emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeTypes {
    pub module_container: ClassName,
    pub module_data: ClassName,
    pub module_task_options: ClassName,
    pub module_activator: ClassName,
    pub default_activator: ClassName,
    pub bootstrap_mode: ClassName,
    pub service_central: ClassName,
    pub registry: ClassName,
    pub task_container: ClassName,
    pub thread_mode: ClassName,
    pub service_dependency: ClassName,
    pub default_launcher: ClassName,
    pub builtins: ClassName,
    pub provider: ClassName,
    pub pair: ClassName,
    pub tuples: ClassName,
    pub object: ClassName,
    pub string: ClassName,
    pub class: ClassName,
    pub override_annotation: ClassName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = GeneratorConfig::from_toml_str("indnet = \"  \"");
        assert!(matches!(result, Err(GeneratorError::ConfigError(_))));
    }

    #[test]
    fn invalid_runtime_name_reports_key() {
        let mut api = RuntimeApi::default();
        api.registry = "com..Registry".to_string();

        match api.resolve() {
            Err(GeneratorError::ConfigError(message)) => {
                assert!(message.contains("runtime.registry"), "got: {}", message);
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn default_runtime_resolves() {
        let types = RuntimeApi::default().resolve().unwrap();
        assert_eq!(types.module_container.simple_name(), "ModuleContainer");
        assert_eq!(types.provider.canonical(), "javax.inject.Provider");
        assert!(types.object.is_java_lang());
    }

    #[test]
    fn config_loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registrar.toml");
        fs::write(&path, "banner = \"Do not edit.\"\n").unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.banner, "Do not edit.");
        assert_eq!(config.indent, "    ");
    }

    #[test]
    fn missing_config_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let result = GeneratorConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(GeneratorError::ReadError { .. })));
    }

    #[test]
    fn indent_width_override() {
        let config = GeneratorConfig::default().with_indent_width(2);
        assert_eq!(config.indent, "  ");
    }
}
