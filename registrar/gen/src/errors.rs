//! Error types for the registrar generator.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse module metadata
    #[error("Failed to parse module metadata '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to read an input or configuration file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The entrance class cannot be split into package and type name.
    ///
    /// Generated containers must live in a named package, so
    /// `CoreModule` is rejected while `com.example.CoreModule` is accepted.
    #[error(
        "Module '{module}' has entrance class '{entrance_class}' without a package; use a fully-qualified name such as 'com.example.{entrance_class}'"
    )]
    MalformedEntranceClass {
        module: String,
        entrance_class: String,
    },

    /// A class reference is not a valid Java type name.
    #[error("Invalid class name '{name}': {reason}")]
    InvalidClassName { name: String, reason: String },

    /// A field or method name is not a Java identifier.
    #[error("Invalid {role} '{name}': not a Java identifier")]
    InvalidIdentifier { name: String, role: String },

    /// Two modules generate the same container class.
    #[error("Modules '{first}' and '{second}' both use entrance class '{entrance_class}'")]
    DuplicateEntranceClass {
        entrance_class: String,
        first: String,
        second: String,
    },

    /// The module has no name.
    #[error("Module with entrance class '{entrance_class}' has an empty name")]
    EmptyModuleName { entrance_class: String },

    /// Two tasks in the same module share a name.
    #[error("Module '{module}' declares task '{task}' more than once")]
    DuplicateTaskName { module: String, task: String },

    /// A service or task output is not exposed as any type.
    ///
    /// Without at least one alias nothing registers the provider, so the
    /// generated code would construct values nobody can look up.
    #[error("Module '{module}': {owner} declares no service types")]
    MissingServiceTypes { module: String, owner: String },
}
