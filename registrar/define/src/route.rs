//! Route definitions.

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// A routing table entry.
///
/// ## Examples
///
/// ```
/// use registrar_define::RouteMeta;
///
/// let route = RouteMeta::new("settings", "com.example.SettingsActivity")
///     .with_rules(["app://settings", "app://settings/{tab}"]);
///
/// assert_eq!(route.rules.len(), 2);
/// assert!(route.launcher.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    pub name: String,
    /// Match rules, in priority order.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Route type tag, opaque to the generator.
    #[serde(default)]
    pub route_type: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Interceptor classes, applied in order.
    #[serde(default)]
    pub interceptors: Vec<String>,
    /// Custom launcher class. `None` uses the runtime's default launcher.
    #[serde(default)]
    pub launcher: Option<String>,
    /// Target class the route resolves to.
    pub class_name: String,
    #[serde(default)]
    pub desc: String,
}

impl RouteMeta {
    /// Creates a route with no rules, attributes or interceptors.
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: vec![],
            route_type: String::new(),
            attributes: vec![],
            interceptors: vec![],
            launcher: None,
            class_name: class_name.into(),
            desc: String::new(),
        }
    }

    /// Replaces the match rules.
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = rules.into_iter().map(Into::into).collect();
        self
    }
}
