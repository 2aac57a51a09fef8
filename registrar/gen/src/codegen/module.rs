//! Module container assembly.
//!
//! A container class has up to three members, emitted in this order:
//!
//! 1. A constructor that hands the module descriptor to the base class.
//! 2. `createActivator`, only for modules with a custom activator.
//! 3. `onRegister`, only for modules that register services, routes or tasks.
//!
//! Inside `onRegister` services come first, then routes, then tasks. Routes
//! and tasks may depend on services registered in the same pass; services
//! never depend on routes.

use registrar_define::{ModuleMeta, TaskMeta};
use tracing::{debug, instrument};

use super::attributes::render_attributes;
use super::dependency::{AccessPoint, CENTRAL, render_access_list, render_descriptor_list};
use super::module_docs::ModuleDocBuilder;
use super::route::generate_route;
use super::service::generate_service;
use super::task::generate_task;
use super::{REGISTRY, TASKS};
use crate::config::RuntimeTypes;
use crate::errors::GeneratorError;
use crate::java::{ClassName, Fragment, JavaFile};

/// Generates the complete container class for `module`.
///
/// The package and type name come from splitting
/// [`entrance_class`](ModuleMeta::entrance_class) at its last `.`.
///
/// ## Errors
///
/// - `GeneratorError::MalformedEntranceClass` if the entrance class has no package
/// - `GeneratorError::InvalidClassName` if any referenced class name is malformed
#[instrument(skip(module, rt, banner), fields(module = %module.name))]
pub fn generate_container(
    module: &ModuleMeta,
    rt: &RuntimeTypes,
    banner: &str,
) -> Result<JavaFile, GeneratorError> {
    let (package, type_name) = split_entrance(module)?;

    let mut members = vec![constructor(module, type_name, rt)?];

    match custom_activator(module, rt)? {
        Some(activator) => {
            debug!(activator = %activator, "Emitting createActivator");
            members.push(create_activator(module, &activator, rt)?);
        }
        None => debug!("Default activator, skipping createActivator"),
    }

    if module.has_registrations() {
        debug!(
            services = module.services.len(),
            routes = module.routes.len(),
            tasks = module.tasks.len(),
            "Emitting onRegister"
        );
        members.push(on_register(module, rt)?);
    } else {
        debug!("Nothing to register, skipping onRegister");
    }

    let body = ModuleDocBuilder::new(module, banner)
        .build()
        .text(format!("public class {} extends ", type_name))
        .ty(&rt.module_container)
        .text(" {")
        .newline()
        .indent()
        .append(Fragment::join_blocks(members))
        .unindent()
        .text("}")
        .newline();

    Ok(JavaFile::new(package, type_name, body))
}

fn split_entrance(module: &ModuleMeta) -> Result<(&str, &str), GeneratorError> {
    let malformed = || GeneratorError::MalformedEntranceClass {
        module: module.name.clone(),
        entrance_class: module.entrance_class.clone(),
    };
    let package = module.package_name().ok_or_else(malformed)?;
    let type_name = module.simple_name();
    if package.is_empty() || type_name.is_empty() {
        return Err(malformed());
    }
    ClassName::parse(&module.entrance_class)?;
    Ok((package, type_name))
}

fn constructor(
    module: &ModuleMeta,
    type_name: &str,
    rt: &RuntimeTypes,
) -> Result<Fragment, GeneratorError> {
    // Without a create task, post-create inherits the constructor dependencies.
    let pre = task_options(module.on_create.as_ref(), true, rt)?;
    let post = task_options(module.on_post_create.as_ref(), module.on_create.is_none(), rt)?;

    let data = Fragment::new()
        .text("new ")
        .ty(&rt.module_data)
        .text("(")
        .append(Fragment::args([
            Fragment::new().literal(&module.name),
            Fragment::new()
                .ty(&rt.bootstrap_mode)
                .text(format!(".{}", module.bootstrap_mode)),
            pre,
            post,
            render_attributes(&module.attributes, rt),
        ]))
        .text(")");

    Ok(Fragment::new()
        .text(format!("public {}() {{", type_name))
        .newline()
        .indent()
        .text("super(")
        .append(data)
        .text(");")
        .newline()
        .unindent()
        .text("}")
        .newline())
}

/// Renders a lifecycle hook as `ModuleTaskOptions`, or `null` when absent.
fn task_options(
    task: Option<&TaskMeta>,
    include_constructor_params: bool,
    rt: &RuntimeTypes,
) -> Result<Fragment, GeneratorError> {
    let Some(task) = task else {
        return Ok(Fragment::new().text("null"));
    };

    let deps = if include_constructor_params {
        task.all_dependencies()
    } else {
        task.dependencies.clone()
    };

    let mut args = vec![
        Fragment::new().literal(&task.name),
        Fragment::new().text(task.priority.to_string()),
        Fragment::new()
            .ty(&rt.thread_mode)
            .text(format!(".{}", task.thread_mode)),
    ];
    args.extend(render_descriptor_list(&deps, rt)?);

    Ok(Fragment::new()
        .text("new ")
        .ty(&rt.module_task_options)
        .text("(")
        .append(Fragment::args(args))
        .text(")"))
}

/// The declared activator, or `None` when absent or naming the default.
fn custom_activator(
    module: &ModuleMeta,
    rt: &RuntimeTypes,
) -> Result<Option<ClassName>, GeneratorError> {
    match &module.activator_class {
        None => Ok(None),
        Some(name) => {
            let class = ClassName::parse(name)?;
            Ok((class != rt.default_activator).then_some(class))
        }
    }
}

fn create_activator(
    module: &ModuleMeta,
    activator: &ClassName,
    rt: &RuntimeTypes,
) -> Result<Fragment, GeneratorError> {
    let params = match &module.on_create {
        Some(task) => render_access_list(&task.constructor_params, AccessPoint::Central)?,
        None => Vec::new(),
    };

    Ok(Fragment::new()
        .text("@")
        .ty(&rt.override_annotation)
        .newline()
        .text("public ")
        .ty(&rt.module_activator)
        .text(" createActivator(")
        .ty(&rt.service_central)
        .text(format!(" {}) {{", CENTRAL))
        .newline()
        .indent()
        .text("return new ")
        .ty(activator)
        .text("(")
        .append(Fragment::args(params))
        .text(");")
        .newline()
        .unindent()
        .text("}")
        .newline())
}

fn on_register(module: &ModuleMeta, rt: &RuntimeTypes) -> Result<Fragment, GeneratorError> {
    let mut services = Fragment::new();
    if !module.services.is_empty() {
        services = services
            .ty(&rt.service_central)
            .text(format!(" {} = {}.deferred();", CENTRAL, REGISTRY))
            .newline();
        for service in &module.services {
            services = services.append(generate_service(service, rt)?);
        }
    }

    let mut routes = Fragment::new();
    for route in &module.routes {
        routes = routes.append(generate_route(route, rt)?);
    }

    let mut tasks = Fragment::new();
    for task in &module.tasks {
        tasks = tasks.append(generate_task(task, rt)?);
    }

    Ok(Fragment::new()
        .text("@")
        .ty(&rt.override_annotation)
        .newline()
        .text("public void onRegister(")
        .ty(&rt.registry)
        .text(format!(" {}, ", REGISTRY))
        .ty(&rt.task_container)
        .text(format!(" {}) {{", TASKS))
        .newline()
        .indent()
        .append(Fragment::join_blocks([services, routes, tasks]))
        .unindent()
        .text("}")
        .newline())
}
