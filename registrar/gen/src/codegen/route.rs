//! Route registration calls.

use registrar_define::RouteMeta;

use super::attributes::render_attributes;
use super::{REGISTRY, line_comments};
use crate::config::RuntimeTypes;
use crate::errors::GeneratorError;
use crate::java::{ClassName, Fragment};

/// Generates one `registerRoutes` call.
///
/// Interceptor, launcher and target classes are passed as suppliers so the
/// runtime only loads them when the route is first used.
///
/// ## Examples
///
/// ```ignore
/// // Generated code:
/// registry.registerRoutes(BuiltInKt.routesBean(
///         "settings",
///         new String[]{
///                 "app://settings"},
///         "native",
///         BuiltInKt.emptyAttributesArray(),
///         () -> new Class[]{LoginInterceptor.class},
///         BuiltInKt.stubLauncherProvider(),
///         () -> SettingsActivity.class,
///         this));
/// ```
pub fn generate_route(route: &RouteMeta, rt: &RuntimeTypes) -> Result<Fragment, GeneratorError> {
    let target = ClassName::parse(&route.class_name)?;

    let rules = Fragment::new()
        .text("new ")
        .ty(&rt.string)
        .text("[]{")
        .append(Fragment::args(
            route.rules.iter().map(|rule| Fragment::new().literal(rule)),
        ))
        .text("}");

    let interceptors = if route.interceptors.is_empty() {
        Fragment::new().ty(&rt.builtins).text(".emptyArrayProvider()")
    } else {
        let classes = route
            .interceptors
            .iter()
            .map(|name| ClassName::parse(name).map(|c| Fragment::new().class_literal(&c)))
            .collect::<Result<Vec<_>, _>>()?;
        Fragment::new()
            .text("() -> new ")
            .ty(&rt.class)
            .text("[]{")
            .append(Fragment::join(classes, ", "))
            .text("}")
    };

    let launcher = match custom_launcher(route, rt)? {
        None => Fragment::new().ty(&rt.builtins).text(".stubLauncherProvider()"),
        Some(class) => Fragment::new().text("() -> ").class_literal(&class),
    };

    let args = [
        Fragment::new().literal(&route.name),
        rules,
        Fragment::new().literal(&route.route_type),
        render_attributes(&route.attributes, rt),
        interceptors,
        launcher,
        Fragment::new().text("() -> ").class_literal(&target),
        Fragment::new().text("this"),
    ];

    Ok(line_comments(&route.desc)
        .text(format!("{}.registerRoutes(", REGISTRY))
        .ty(&rt.builtins)
        .text(".routesBean(")
        .append(Fragment::args(args))
        .text("));")
        .newline())
}

/// The route's launcher, or `None` when it is absent or names the default.
fn custom_launcher(route: &RouteMeta, rt: &RuntimeTypes) -> Result<Option<ClassName>, GeneratorError> {
    match &route.launcher {
        None => Ok(None),
        Some(name) => {
            let class = ClassName::parse(name)?;
            Ok((class != rt.default_launcher).then_some(class))
        }
    }
}
