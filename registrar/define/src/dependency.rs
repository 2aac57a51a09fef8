//! Dependency items used by services, tasks and lifecycle hooks.
//!
//! A dependency list mixes two kinds of items:
//!
//! - a task name, meaning "run after the task with this name"
//! - a [`ServiceDependency`], meaning "resolve this service first"
//!
//! Both serialize naturally: a task name is a bare string, a service
//! dependency is an object.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How a service dependency is looked up from the runtime container.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use registrar_define::DependencyKind;
///
/// assert_eq!(DependencyKind::from_str("WILDCARD_PROVIDER").unwrap(), DependencyKind::WildcardProvider);
/// assert_eq!(DependencyKind::Provider.to_string(), "PROVIDER");
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
pub enum DependencyKind {
    /// The service value itself, resolved eagerly.
    #[default]
    Value,
    /// A lazy provider for the service.
    Provider,
    /// A lazy provider matching any service name of the given type.
    WildcardProvider,
}

/// A typed, named service that must be available before something runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDependency {
    /// Fully-qualified class name of the service type.
    pub class_name: String,
    /// Name the service was registered under.
    pub service_name: String,
    #[serde(default)]
    pub kind: DependencyKind,
    /// Whether a missing service is tolerated by the runtime.
    #[serde(default)]
    pub optional: bool,
}

/// One element of a dependency or parameter list.
///
/// ## Examples
///
/// ```
/// use registrar_define::{Dependency, DependencyKind};
///
/// let dep = Dependency::service("com.example.Clock", "default")
///     .with_kind(DependencyKind::Provider);
///
/// match dep {
///     Dependency::Service(s) => assert_eq!(s.kind, DependencyKind::Provider),
///     Dependency::Task(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// Name of a task that must complete first.
    Task(String),
    /// A service resolved from the runtime container.
    Service(ServiceDependency),
}

impl Dependency {
    /// A dependency on the task with the given name.
    pub fn task(name: impl Into<String>) -> Self {
        Dependency::Task(name.into())
    }

    /// A required, value-kind dependency on a named service.
    pub fn service(class_name: impl Into<String>, service_name: impl Into<String>) -> Self {
        Dependency::Service(ServiceDependency {
            class_name: class_name.into(),
            service_name: service_name.into(),
            kind: DependencyKind::Value,
            optional: false,
        })
    }

    /// Changes the lookup kind. Task dependencies are returned unchanged.
    pub fn with_kind(self, kind: DependencyKind) -> Self {
        match self {
            Dependency::Service(dep) => Dependency::Service(ServiceDependency { kind, ..dep }),
            task => task,
        }
    }

    /// Marks the dependency optional. Task dependencies are returned unchanged.
    pub fn optional(self) -> Self {
        match self {
            Dependency::Service(dep) => Dependency::Service(ServiceDependency {
                optional: true,
                ..dep
            }),
            task => task,
        }
    }

    /// Returns the class name for service dependencies.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Dependency::Service(dep) => Some(&dep.class_name),
            Dependency::Task(_) => None,
        }
    }
}
