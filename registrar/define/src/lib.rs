//! Registrar Definition Library
//!
//! This crate provides the metadata types that describe a registrar "module":
//! its lifecycle hooks, the services it provides, the routes it exposes and
//! the background tasks it registers. These definitions are produced by an
//! annotation front-end and consumed by the `registrar-gen` binary, which
//! lowers them into a Java container class.
//!
//! ## Core Types
//!
//! - [`ModuleMeta`] - A complete module with its lifecycle hooks and registrations
//! - [`BootstrapMode`] - When the runtime should create the module
//! - [`ServiceMeta`] - A provider-backed service and the aliases it is exposed as
//! - [`ServiceFactory`] - Constructor vs. static factory construction
//! - [`RouteMeta`] - A routing table entry with rules, launcher and interceptors
//! - [`TaskMeta`] - A unit of deferred work with thread affinity and dependencies
//! - [`ThreadMode`] - Thread affinity of a task
//! - [`ServiceOutput`] - A service value captured from a finished task
//! - [`ServiceAccessor`] - Field read or zero-argument method call
//! - [`Dependency`] - Either a task name or a [`ServiceDependency`]
//! - [`DependencyKind`] - Plain value, provider or wildcard provider lookup
//! - [`Attribute`] - A string key/value pair
//!
//! ## Examples
//!
//! ```
//! use registrar_define::{BootstrapMode, ModuleMeta, ServiceFactory, ServiceMeta};
//!
//! let mut module = ModuleMeta::new("core", "com.example.core.CoreModule", BootstrapMode::Eager);
//! module.services.push(ServiceMeta {
//!     name: "default".to_string(),
//!     return_type: "com.example.core.Clock".to_string(),
//!     source_class: "com.example.core.SystemClock".to_string(),
//!     factory: ServiceFactory::Constructor,
//!     method_params: vec![],
//!     dependencies: vec![],
//!     singleton: true,
//!     service_types: vec!["com.example.core.Clock".to_string()],
//!     desc: String::new(),
//! });
//!
//! assert_eq!(module.package_name(), Some("com.example.core"));
//! assert!(module.has_registrations());
//! ```
//!
//! ## Serialization
//!
//! Every type derives `serde` traits so the front-end can hand metadata over
//! as JSON or YAML. Task dependencies are bare strings, service dependencies
//! are objects:
//!
//! ```
//! use registrar_define::Dependency;
//!
//! let deps: Vec<Dependency> = serde_json::from_str(
//!     r#"["init", {"class_name": "com.example.Clock", "service_name": "default"}]"#,
//! ).unwrap();
//!
//! assert_eq!(deps[0], Dependency::task("init"));
//! assert_eq!(deps[1], Dependency::service("com.example.Clock", "default"));
//! ```

pub mod attribute;
pub mod dependency;
pub mod module;
pub mod prelude;
pub mod route;
pub mod service;
pub mod task;

// Re-export main types at crate root
pub use attribute::Attribute;
pub use dependency::{Dependency, DependencyKind, ServiceDependency};
pub use module::{BootstrapMode, ModuleMeta};
pub use route::RouteMeta;
pub use service::{ServiceFactory, ServiceMeta};
pub use task::{ServiceAccessor, ServiceOutput, TaskMeta, ThreadMode};
