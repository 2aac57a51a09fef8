//! Convenient re-exports for working with registrar definitions.
//!
//! ## Examples
//!
//! ```
//! use registrar_define::prelude::*;
//!
//! let mut module = ModuleMeta::new("core", "com.example.core.CoreModule", BootstrapMode::Lazy);
//! module.attributes.push(Attribute::new("owner", "platform"));
//! assert_eq!(module.attributes.len(), 1);
//! ```

pub use crate::attribute::Attribute;
pub use crate::dependency::{Dependency, DependencyKind, ServiceDependency};
pub use crate::module::{BootstrapMode, ModuleMeta};
pub use crate::route::RouteMeta;
pub use crate::service::{ServiceFactory, ServiceMeta};
pub use crate::task::{ServiceAccessor, ServiceOutput, TaskMeta, ThreadMode};
