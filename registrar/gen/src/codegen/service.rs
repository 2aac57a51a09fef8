//! Service provider registration blocks.

use registrar_define::{ServiceFactory, ServiceMeta};

use super::dependency::{AccessPoint, render_access_list, render_descriptor_list};
use super::{REGISTRY, line_comments};
use crate::config::RuntimeTypes;
use crate::errors::GeneratorError;
use crate::java::{ClassName, Fragment, check_member_name};

/// Generates the registration block for one service.
///
/// The block declares one provider `p` and one capture array `dep`, then
/// registers the provider once per service type. All aliases share the same
/// provider instance, so a singleton is constructed once no matter which
/// alias is requested first.
///
/// ## Examples
///
/// ```ignore
/// // Generated code:
/// {
///     Provider<? extends Clock> p = BuiltInKt.singletonProvider(() -> new SystemClock(
///             central.getService(TimeZone.class, "default")));
///     Object[] dep = new Object[]{
///             new ServiceDependency(TimeZone.class, "default", false)};
///     registry.registerProviderService(Clock.class, "default", p, this, dep);
/// }
/// ```
pub fn generate_service(service: &ServiceMeta, rt: &RuntimeTypes) -> Result<Fragment, GeneratorError> {
    let return_type = ClassName::parse(&service.return_type)?;
    let source = ClassName::parse(&service.source_class)?;
    let params = render_access_list(&service.method_params, AccessPoint::Central)?;

    let factory = match &service.factory {
        ServiceFactory::Constructor => Fragment::new().text("() -> new ").ty(&source),
        ServiceFactory::StaticMethod(method) => {
            check_member_name(method, "factory method")?;
            Fragment::new()
                .text("() -> ")
                .ty(&source)
                .text(format!(".{}", method))
        }
    }
    .text("(")
    .append(Fragment::args(params))
    .text(")");

    let provider = if service.singleton {
        Fragment::new()
            .ty(&rt.builtins)
            .text(".singletonProvider(")
            .append(factory)
            .text(")")
    } else {
        factory
    };

    let captured = render_descriptor_list(&service.all_dependencies(), rt)?;
    let capture = if captured.is_empty() {
        Fragment::new().ty(&rt.builtins).text(".emptyAnyArray()")
    } else {
        Fragment::new()
            .text("new ")
            .ty(&rt.object)
            .text("[]{")
            .append(Fragment::args(captured))
            .text("}")
    };

    let mut block = Fragment::new()
        .text("{")
        .newline()
        .indent()
        .append(line_comments(&service.desc))
        .ty(&rt.provider)
        .text("<? extends ")
        .ty(&return_type)
        .text("> p = ")
        .append(provider)
        .text(";")
        .newline()
        .ty(&rt.object)
        .text("[] dep = ")
        .append(capture)
        .text(";")
        .newline();

    for alias in &service.service_types {
        let alias = ClassName::parse(alias)?;
        block = block
            .text(format!("{}.registerProviderService(", REGISTRY))
            .class_literal(&alias)
            .text(", ")
            .literal(&service.name)
            .text(", p, this, dep);")
            .newline();
    }

    Ok(block.unindent().text("}").newline())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_service, runtime};
    use registrar_define::Dependency;

    #[test]
    fn constructor_service_without_dependencies() {
        let service = make_service("clock", "com.example.Clock", "com.example.SystemClock");
        let code = generate_service(&service, &runtime()).unwrap().to_string();

        assert_eq!(
            code,
            "{\n\
             \x20   Provider<? extends Clock> p = () -> new SystemClock();\n\
             \x20   Object[] dep = BuiltInKt.emptyAnyArray();\n\
             \x20   registry.registerProviderService(Clock.class, \"clock\", p, this, dep);\n\
             }\n"
        );
    }

    #[test]
    fn static_factory_with_singleton_wrapper() {
        let mut service = make_service("clock", "com.example.Clock", "com.example.Clocks");
        service.factory = ServiceFactory::StaticMethod("create".to_string());
        service.singleton = true;
        service.method_params = vec![Dependency::service("com.example.Zone", "utc")];

        let code = generate_service(&service, &runtime()).unwrap().to_string();

        assert!(code.contains(
            "Provider<? extends Clock> p = BuiltInKt.singletonProvider(() -> Clocks.create(\n            central.getService(Zone.class, \"utc\")));"
        ));
    }

    #[test]
    fn static_factory_name_must_be_an_identifier() {
        let mut service = make_service("clock", "com.example.Clock", "com.example.Clocks");
        service.factory = ServiceFactory::StaticMethod("create(); System.exit(0".to_string());

        let err = generate_service(&service, &runtime()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidIdentifier { .. }));
    }

    #[test]
    fn capture_array_lists_dependencies_before_params() {
        let mut service = make_service("clock", "com.example.Clock", "com.example.SystemClock");
        service.method_params = vec![Dependency::service("com.example.Zone", "utc")];
        service.dependencies = vec![Dependency::task("boot")];

        let code = generate_service(&service, &runtime()).unwrap().to_string();

        let boot = code.find("\"boot\"").unwrap();
        let zone = code.find("new ServiceDependency(Zone.class").unwrap();
        assert!(boot < zone);
        assert!(code.contains("Object[] dep = new Object[]{"));
        assert!(!code.contains("emptyAnyArray"));
    }

    #[test]
    fn every_alias_registers_the_same_provider() {
        let mut service = make_service("clock", "com.example.Clock", "com.example.SystemClock");
        service.service_types = vec![
            "com.example.Clock".to_string(),
            "com.example.TimeSource".to_string(),
        ];

        let code = generate_service(&service, &runtime()).unwrap().to_string();

        assert_eq!(code.matches("registerProviderService(").count(), 2);
        assert_eq!(code.matches(" p = ").count(), 1);
        assert_eq!(code.matches(" dep = ").count(), 1);
        assert!(code.contains("registerProviderService(TimeSource.class, \"clock\", p, this, dep);"));
    }

    #[test]
    fn description_becomes_line_comments() {
        let mut service = make_service("clock", "com.example.Clock", "com.example.SystemClock");
        service.desc = "Wall clock.\nNever goes backwards.".to_string();

        let code = generate_service(&service, &runtime()).unwrap().to_string();
        assert!(code.starts_with("{\n    // Wall clock.\n    // Never goes backwards.\n    Provider"));
    }
}
