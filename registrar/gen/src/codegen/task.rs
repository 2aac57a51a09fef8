//! Task registration blocks.
//!
//! A task block has two halves:
//!
//! 1. Output pre-registration: every produced service is announced up front
//!    so other services and tasks can depend on it before the task runs.
//! 2. The `tasks.register(...)` call, whose `doLast` callback constructs the
//!    action, executes it and publishes the produced services.

use registrar_define::{ServiceAccessor, TaskMeta};

use super::dependency::{AccessPoint, render_access_list, render_descriptor_list};
use super::{REGISTRY, TASKS};
use crate::config::RuntimeTypes;
use crate::errors::GeneratorError;
use crate::java::{ClassName, Fragment, TypeName, check_member_name};

/// Generates the registration block for one task.
///
/// ## Examples
///
/// ```ignore
/// // Generated code:
/// registry.registerTaskOutputService(Config.class, "remote", this, "fetchConfig");
/// tasks.register("fetchConfig", (builder) -> {
///     builder.threadMode(ThreadMode.BACKGROUND)
///             .priority(10)
///             .dependsOn(
///                     "init",
///                     new ServiceDependency(HttpClient.class, "default", false))
///             .doLast((task) -> {
///                 FetchConfigAction action = new FetchConfigAction(
///                         task.getServices().getService(HttpClient.class, "default"));
///                 action.execute(task);
///                 RemoteConfig var0 = action.getConfig();
///                 task.getOutputs().output(Config.class, "remote", var0);
///                 return null;
///             });
///     return null;
/// });
/// ```
pub fn generate_task(task: &TaskMeta, rt: &RuntimeTypes) -> Result<Fragment, GeneratorError> {
    let action = ClassName::parse(&task.class_name)?;

    let mut code = Fragment::new();
    for output in &task.produced_services {
        for alias in &output.service_types {
            let alias = ClassName::parse(alias)?;
            code = code
                .text(format!("{}.registerTaskOutputService(", REGISTRY))
                .class_literal(&alias)
                .text(", ")
                .literal(&output.name)
                .text(", this, ")
                .literal(&task.name)
                .text(");")
                .newline();
        }
    }

    code = code
        .text(format!("{}.register(", TASKS))
        .literal(&task.name)
        .text(", (builder) -> {")
        .newline()
        .indent()
        .text("builder.threadMode(")
        .ty(&rt.thread_mode)
        .text(format!(".{})", task.thread_mode))
        .newline()
        .indent()
        .indent()
        .text(format!(".priority({})", task.priority))
        .newline();

    // dependsOn takes descriptors; lookups happen inside doLast.
    let depends_on = render_descriptor_list(&task.all_dependencies(), rt)?;
    if !depends_on.is_empty() {
        code = code
            .text(".dependsOn(")
            .append(Fragment::args(depends_on))
            .text(")")
            .newline();
    }

    code = code
        .text(".doLast((task) -> {")
        .newline()
        .indent()
        .append(execute_action(task, &action)?)
        .append(publish_outputs(task)?)
        .text("return null;")
        .newline()
        .unindent()
        .text("});")
        .newline()
        .unindent()
        .unindent()
        .text("return null;")
        .newline()
        .unindent()
        .text("});")
        .newline();

    Ok(code)
}

fn execute_action(task: &TaskMeta, action: &ClassName) -> Result<Fragment, GeneratorError> {
    let params = render_access_list(&task.constructor_params, AccessPoint::TaskServices)?;
    Ok(Fragment::new()
        .ty(action)
        .text(" action = new ")
        .ty(action)
        .text("(")
        .append(Fragment::args(params))
        .text(");")
        .newline()
        .text("action.execute(task);")
        .newline())
}

/// Reads each produced service into `var<i>` and writes it to every alias.
fn publish_outputs(task: &TaskMeta) -> Result<Fragment, GeneratorError> {
    let mut code = Fragment::new();
    for (i, output) in task.produced_services.iter().enumerate() {
        let var = format!("var{}", i);
        let read = match &output.accessor {
            ServiceAccessor::Field(field) => {
                check_member_name(field, "output field")?;
                format!("action.{}", field)
            }
            ServiceAccessor::Method(method) => {
                check_member_name(method, "output method")?;
                format!("action.{}()", method)
            }
        };

        code = code
            .type_name(&TypeName::parse(&output.return_type)?)
            .text(format!(" {} = {};", var, read))
            .newline();

        for alias in &output.service_types {
            let alias = ClassName::parse(alias)?;
            code = code
                .text("task.getOutputs().output(")
                .class_literal(&alias)
                .text(", ")
                .literal(&output.name)
                .text(format!(", {});", var))
                .newline();
        }
    }
    Ok(code)
}
