//! Shared test utilities for registrar-gen tests.
//!
//! Fixture builders for metadata and the resolved default runtime types.

use registrar_define::{
    BootstrapMode, Dependency, ModuleMeta, RouteMeta, ServiceAccessor, ServiceFactory,
    ServiceMeta, ServiceOutput, TaskMeta,
};

use crate::config::{RuntimeApi, RuntimeTypes};

/// The default runtime API, resolved.
pub fn runtime() -> RuntimeTypes {
    RuntimeApi::default().resolve().unwrap()
}

/// Creates a constructor-built service exposed under its return type only.
///
/// ## Arguments
///
/// * `name` - Service name
/// * `return_type` - Declared type, also the single alias
/// * `source_class` - Class whose constructor builds the service
pub fn make_service(name: &str, return_type: &str, source_class: &str) -> ServiceMeta {
    ServiceMeta {
        name: name.to_string(),
        return_type: return_type.to_string(),
        source_class: source_class.to_string(),
        factory: ServiceFactory::Constructor,
        method_params: vec![],
        dependencies: vec![],
        singleton: false,
        service_types: vec![return_type.to_string()],
        desc: String::new(),
    }
}

/// Creates a task output exposed under `aliases`.
pub fn make_output(
    name: &str,
    return_type: &str,
    accessor: ServiceAccessor,
    aliases: &[&str],
) -> ServiceOutput {
    ServiceOutput {
        name: name.to_string(),
        return_type: return_type.to_string(),
        accessor,
        service_types: aliases.iter().map(|alias| alias.to_string()).collect(),
    }
}

/// Creates the `core` module: one singleton service, one route guarded by
/// an interceptor that uses it, and one task whose output nobody consumes.
pub fn make_core_module() -> ModuleMeta {
    let mut module = ModuleMeta::new("core", "com.example.core.CoreModule", BootstrapMode::Eager);
    module.desc = "Core services.".to_string();

    let mut service = make_service(
        "session",
        "com.example.core.Session",
        "com.example.core.DefaultSession",
    );
    service.singleton = true;
    module.services = vec![service];

    let mut route = RouteMeta::new("profile", "com.example.core.ProfileActivity")
        .with_rules(["app://profile"]);
    route.route_type = "native".to_string();
    route.interceptors = vec!["com.example.core.SessionInterceptor".to_string()];
    module.routes = vec![route];

    let mut task = TaskMeta::new("warmup", "com.example.core.WarmupAction");
    task.dependencies = vec![Dependency::service("com.example.core.Session", "session")];
    task.produced_services = vec![make_output(
        "cache",
        "com.example.core.Cache",
        ServiceAccessor::Method("getCache".to_string()),
        &["com.example.core.Cache"],
    )];
    module.tasks = vec![task];

    module
}
