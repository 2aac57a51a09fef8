//! Service provider definitions.

use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;

/// How the service value is constructed.
///
/// ## Examples
///
/// ```
/// use registrar_define::ServiceFactory;
///
/// let ctor: ServiceFactory = serde_json::from_str(r#""constructor""#).unwrap();
/// let method: ServiceFactory = serde_json::from_str(r#"{"static_method": "create"}"#).unwrap();
///
/// assert_eq!(ctor, ServiceFactory::Constructor);
/// assert_eq!(method, ServiceFactory::StaticMethod("create".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFactory {
    /// `new Source(params...)`
    #[default]
    Constructor,
    /// `Source.method(params...)`
    StaticMethod(String),
}

/// A provider-backed service registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMeta {
    /// Service name, shared by every alias.
    pub name: String,
    /// Declared type of the provided value.
    pub return_type: String,
    /// Class that is constructed or owns the static factory method.
    pub source_class: String,
    #[serde(default)]
    pub factory: ServiceFactory,
    /// Arguments passed to the constructor or factory, in order.
    #[serde(default)]
    pub method_params: Vec<Dependency>,
    /// Additional dependencies that must be satisfied before the provider is used.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Construct at most once and reuse the value.
    #[serde(default)]
    pub singleton: bool,
    /// Types (aliases) the service is registered as. At least one.
    pub service_types: Vec<String>,
    #[serde(default)]
    pub desc: String,
}

impl ServiceMeta {
    /// Declared dependencies followed by method parameters.
    ///
    /// This is the list the runtime watches to invalidate the provider.
    pub fn all_dependencies(&self) -> Vec<Dependency> {
        self.dependencies
            .iter()
            .chain(&self.method_params)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_service_uses_constructor_factory() {
        let service: ServiceMeta = serde_json::from_str(
            r#"{
                "name": "default",
                "return_type": "a.Clock",
                "source_class": "a.SystemClock",
                "service_types": ["a.Clock"]
            }"#,
        )
        .unwrap();

        assert_eq!(service.factory, ServiceFactory::Constructor);
        assert!(!service.singleton);
        assert!(service.desc.is_empty());
    }

    #[test]
    fn all_dependencies_puts_params_last() {
        let service = ServiceMeta {
            name: "s".to_string(),
            return_type: "a.S".to_string(),
            source_class: "a.S".to_string(),
            factory: ServiceFactory::Constructor,
            method_params: vec![Dependency::service("a.P", "p")],
            dependencies: vec![Dependency::task("boot")],
            singleton: false,
            service_types: vec!["a.S".to_string()],
            desc: String::new(),
        };

        assert_eq!(
            service.all_dependencies(),
            vec![Dependency::task("boot"), Dependency::service("a.P", "p")]
        );
    }
}
