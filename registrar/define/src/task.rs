//! Task definitions.
//!
//! A task is a named unit of deferred work. The runtime schedules it on the
//! requested thread once its dependencies are satisfied, constructs the
//! action class, executes it and publishes any services the action produced.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::dependency::Dependency;

/// Thread affinity of a task.
///
/// ## Examples
///
/// ```
/// use registrar_define::ThreadMode;
///
/// assert_eq!(ThreadMode::Background.to_string(), "BACKGROUND");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadMode {
    /// Run on the main (UI) thread
    Main,
    /// Run on a background worker
    Background,
    /// Run wherever the scheduler finds convenient
    #[default]
    Any,
}

/// How a produced service is read from the finished action object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAccessor {
    /// `action.<name>`
    Field(String),
    /// `action.<name>()`
    Method(String),
}

/// A service captured from a task's action after it executes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceOutput {
    /// Service name the output is published under.
    pub name: String,
    /// Type of the captured value (class name or Java primitive).
    pub return_type: String,
    pub accessor: ServiceAccessor,
    /// Service types (aliases) the output is exposed as. At least one.
    pub service_types: Vec<String>,
}

/// A task definition.
///
/// ## Examples
///
/// ```
/// use registrar_define::{Dependency, TaskMeta, ThreadMode};
///
/// let mut task = TaskMeta::new("warmup", "com.example.WarmupAction");
/// task.thread_mode = ThreadMode::Background;
/// task.dependencies.push(Dependency::task("init"));
/// task.constructor_params.push(Dependency::service("com.example.Clock", "default"));
///
/// // Dependencies always come before constructor parameters.
/// let all = task.all_dependencies();
/// assert_eq!(all[0], Dependency::task("init"));
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMeta {
    /// Task name, unique within a module.
    pub name: String,
    /// Scheduling priority. Interpreted by the runtime.
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub thread_mode: ThreadMode,
    /// Fully-qualified action class. Must have an `execute(Task)` method.
    pub class_name: String,
    /// Arguments passed to the action constructor, in order.
    #[serde(default)]
    pub constructor_params: Vec<Dependency>,
    /// Predecessor tasks and services this task waits for.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub produced_services: Vec<ServiceOutput>,
}

impl TaskMeta {
    /// Creates a task with default priority and thread mode and no dependencies.
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            thread_mode: ThreadMode::default(),
            class_name: class_name.into(),
            constructor_params: vec![],
            dependencies: vec![],
            produced_services: vec![],
        }
    }

    /// Declared dependencies followed by constructor parameters.
    pub fn all_dependencies(&self) -> Vec<Dependency> {
        self.dependencies
            .iter()
            .chain(&self.constructor_params)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_defaults_fill_in_missing_fields() {
        let task: TaskMeta =
            serde_json::from_str(r#"{"name": "boot", "class_name": "a.Boot"}"#).unwrap();
        assert_eq!(task, TaskMeta::new("boot", "a.Boot"));
        assert_eq!(task.thread_mode, ThreadMode::Any);
    }

    #[test]
    fn accessor_is_externally_tagged() {
        let field: ServiceAccessor = serde_json::from_str(r#"{"field": "clock"}"#).unwrap();
        let method: ServiceAccessor = serde_json::from_str(r#"{"method": "getClock"}"#).unwrap();
        assert_eq!(field, ServiceAccessor::Field("clock".to_string()));
        assert_eq!(method, ServiceAccessor::Method("getClock".to_string()));
    }

    #[test]
    fn all_dependencies_keeps_dependencies_first() {
        let mut task = TaskMeta::new("t", "a.T");
        task.constructor_params = vec![Dependency::service("a.P", "p")];
        task.dependencies = vec![Dependency::task("x"), Dependency::service("a.D", "d")];

        assert_eq!(
            task.all_dependencies(),
            vec![
                Dependency::task("x"),
                Dependency::service("a.D", "d"),
                Dependency::service("a.P", "p"),
            ]
        );
    }

    #[test]
    fn thread_mode_reads_yaml_constants() {
        let mode: ThreadMode = serde_yaml::from_str("MAIN").unwrap();
        assert_eq!(mode, ThreadMode::Main);
    }
}
