//! Module definitions.
//!
//! A module bundles services, routes and tasks together with two optional
//! lifecycle hooks:
//!
//! - `on_create` runs before the module is created. Its constructor
//!   parameters are also handed to the module activator.
//! - `on_post_create` runs after creation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::Attribute;
use crate::route::RouteMeta;
use crate::service::ServiceMeta;
use crate::task::TaskMeta;

/// When the runtime creates a module.
///
/// ## Examples
///
/// ```
/// use registrar_define::BootstrapMode;
///
/// assert_eq!(BootstrapMode::Eager.to_string(), "EAGER");
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
pub enum BootstrapMode {
    /// Created during application startup
    Eager,
    /// Created the first time something from the module is requested
    #[default]
    Lazy,
}

/// A complete module definition.
///
/// This is the unit the generator consumes: one `ModuleMeta` produces one
/// container class named by [`entrance_class`](Self::entrance_class).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMeta {
    /// Module name as seen by the runtime.
    pub name: String,
    /// Fully-qualified name of the generated container class.
    ///
    /// Must contain a package, e.g. `com.example.core.CoreModule`.
    pub entrance_class: String,
    #[serde(default)]
    pub bootstrap_mode: BootstrapMode,
    /// Free text, may span several lines.
    #[serde(default)]
    pub desc: String,
    /// Custom activator class. `None` keeps the runtime's default activator.
    #[serde(default)]
    pub activator_class: Option<String>,
    #[serde(default)]
    pub on_create: Option<TaskMeta>,
    #[serde(default)]
    pub on_post_create: Option<TaskMeta>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub routes: Vec<RouteMeta>,
    #[serde(default)]
    pub services: Vec<ServiceMeta>,
    #[serde(default)]
    pub tasks: Vec<TaskMeta>,
}

impl ModuleMeta {
    /// Creates an empty module.
    pub fn new(
        name: impl Into<String>,
        entrance_class: impl Into<String>,
        bootstrap_mode: BootstrapMode,
    ) -> Self {
        Self {
            name: name.into(),
            entrance_class: entrance_class.into(),
            bootstrap_mode,
            desc: String::new(),
            activator_class: None,
            on_create: None,
            on_post_create: None,
            attributes: vec![],
            routes: vec![],
            services: vec![],
            tasks: vec![],
        }
    }

    /// Package of the entrance class, or `None` if it has no package separator.
    ///
    /// Surrounding whitespace in the entrance class is ignored.
    pub fn package_name(&self) -> Option<&str> {
        self.entrance_class
            .trim()
            .rsplit_once('.')
            .map(|(package, _)| package)
    }

    /// Simple name of the entrance class.
    pub fn simple_name(&self) -> &str {
        let entrance = self.entrance_class.trim();
        entrance.rsplit_once('.').map_or(entrance, |(_, name)| name)
    }

    /// True if the module registers any service, route or task.
    pub fn has_registrations(&self) -> bool {
        !(self.routes.is_empty() && self.services.is_empty() && self.tasks.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskMeta;

    #[test]
    fn entrance_class_splits_at_last_dot() {
        let module = ModuleMeta::new("core", "com.example.core.CoreModule", BootstrapMode::Eager);
        assert_eq!(module.package_name(), Some("com.example.core"));
        assert_eq!(module.simple_name(), "CoreModule");
    }

    #[test]
    fn entrance_class_without_package_has_no_package_name() {
        let module = ModuleMeta::new("core", "CoreModule", BootstrapMode::Eager);
        assert_eq!(module.package_name(), None);
        assert_eq!(module.simple_name(), "CoreModule");
    }

    #[test]
    fn entrance_class_whitespace_is_ignored() {
        let module = ModuleMeta::new("core", " com.example.Core \n", BootstrapMode::Eager);
        assert_eq!(module.package_name(), Some("com.example"));
        assert_eq!(module.simple_name(), "Core");
    }

    #[test]
    fn empty_module_has_no_registrations() {
        let mut module = ModuleMeta::new("core", "a.Core", BootstrapMode::Lazy);
        assert!(!module.has_registrations());

        module.tasks.push(TaskMeta::new("t", "a.T"));
        assert!(module.has_registrations());
    }

    #[test]
    fn module_parses_from_yaml() {
        let yaml = r#"
name: core
entrance_class: com.example.CoreModule
bootstrap_mode: EAGER
desc: |
  First line
  Second line
on_create:
  name: create
  class_name: com.example.CreateAction
attributes:
  - name: owner
    value: platform
"#;
        let module: ModuleMeta = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(module.bootstrap_mode, BootstrapMode::Eager);
        assert_eq!(module.desc.lines().count(), 2);
        assert_eq!(module.on_create.as_ref().map(|t| t.name.as_str()), Some("create"));
        assert!(module.on_post_create.is_none());
        assert_eq!(module.attributes, vec![Attribute::new("owner", "platform")]);
    }
}
