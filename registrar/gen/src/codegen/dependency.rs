//! Dependency rendering.
//!
//! A dependency item is rendered in one of two shapes:
//!
//! - an **access** expression that fetches the service from an access point,
//!   used wherever a value is passed as an argument
//! - a **descriptor** that only describes the dependency, used wherever the
//!   runtime is told what to wait for (capture arrays, `dependsOn`, task
//!   options)
//!
//! Task dependencies render as a quoted task name in both shapes.

use registrar_define::{Dependency, DependencyKind, ServiceDependency};

use crate::config::RuntimeTypes;
use crate::errors::GeneratorError;
use crate::java::{ClassName, Fragment};

/// Name of the deferred service central inside generated methods.
pub const CENTRAL: &str = "central";

/// Where services are fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPoint {
    /// The module-level deferred `central`.
    #[default]
    Central,
    /// The running task's own services, resolved at execution time.
    TaskServices,
}

impl AccessPoint {
    pub fn expression(self) -> &'static str {
        match self {
            AccessPoint::Central => CENTRAL,
            AccessPoint::TaskServices => "task.getServices()",
        }
    }
}

fn getter(kind: DependencyKind) -> &'static str {
    match kind {
        DependencyKind::Value => "getService",
        DependencyKind::Provider => "getProvider",
        DependencyKind::WildcardProvider => "getProviderWildcard",
    }
}

/// Renders an expression that fetches `dep` from `at`.
///
/// ## Examples
///
/// ```
/// use registrar_define::{Dependency, DependencyKind};
/// use registrar_gen::codegen::{AccessPoint, render_access};
///
/// let dep = Dependency::service("com.example.Clock", "default").with_kind(DependencyKind::Provider);
/// let code = render_access(&dep, AccessPoint::Central).unwrap();
/// assert_eq!(code.to_string(), "central.getProvider(Clock.class, \"default\")");
/// ```
pub fn render_access(dep: &Dependency, at: AccessPoint) -> Result<Fragment, GeneratorError> {
    match dep {
        Dependency::Task(name) => Ok(Fragment::new().literal(name)),
        Dependency::Service(service) => {
            let class = ClassName::parse(&service.class_name)?;
            Ok(Fragment::new()
                .text(format!("{}.{}(", at.expression(), getter(service.kind)))
                .class_literal(&class)
                .text(", ")
                .literal(&service.service_name)
                .text(")"))
        }
    }
}

/// Renders a `ServiceDependency` descriptor (or a quoted task name).
pub fn render_descriptor(dep: &Dependency, rt: &RuntimeTypes) -> Result<Fragment, GeneratorError> {
    match dep {
        Dependency::Task(name) => Ok(Fragment::new().literal(name)),
        Dependency::Service(service) => service_descriptor(service, rt),
    }
}

fn service_descriptor(
    service: &ServiceDependency,
    rt: &RuntimeTypes,
) -> Result<Fragment, GeneratorError> {
    let class = ClassName::parse(&service.class_name)?;
    Ok(Fragment::new()
        .text("new ")
        .ty(&rt.service_dependency)
        .text("(")
        .class_literal(&class)
        .text(", ")
        .literal(&service.service_name)
        .text(format!(", {})", service.optional)))
}

/// Renders every item of `deps` as an access expression, in order.
pub fn render_access_list(
    deps: &[Dependency],
    at: AccessPoint,
) -> Result<Vec<Fragment>, GeneratorError> {
    deps.iter().map(|dep| render_access(dep, at)).collect()
}

/// Renders every item of `deps` as a descriptor, in order.
pub fn render_descriptor_list(
    deps: &[Dependency],
    rt: &RuntimeTypes,
) -> Result<Vec<Fragment>, GeneratorError> {
    deps.iter().map(|dep| render_descriptor(dep, rt)).collect()
}
