//! Validation module for module definitions.
//!
//! Structural checks run before code generation, so that problems are
//! reported against the metadata rather than surfacing halfway through
//! emitting a class.
//!
//! ## Validation Checks
//!
//! - **Module name**: must not be empty
//! - **Entrance class**: must be a valid, package-qualified class name
//! - **Task names**: unique across the module's tasks
//! - **Service types**: every service and task output is exposed as at least one type
//! - **Class references**: every referenced class name is a valid Java type name
//! - **Member names**: factory methods and output accessors are Java identifiers
//!
//! ## Examples
//!
//! ```
//! use registrar_define::{BootstrapMode, ModuleMeta};
//! use registrar_gen::validation::validate_module;
//!
//! let module = ModuleMeta::new("core", "com.example.CoreModule", BootstrapMode::Eager);
//! assert!(validate_module(&module).is_ok());
//!
//! let module = ModuleMeta::new("core", "CoreModule", BootstrapMode::Eager);
//! assert!(validate_module(&module).is_err());
//! ```

use std::collections::HashSet;

use registrar_define::{Dependency, ModuleMeta, ServiceAccessor, ServiceFactory, TaskMeta};

use crate::errors::GeneratorError;
use crate::java::{ClassName, TypeName, check_member_name};

/// Validates a module definition before code generation.
///
/// Checks run in a fixed order and the first failure is returned:
///
/// 1. The module name is non-empty.
/// 2. The entrance class has a package and parses as a class name.
/// 3. No two entries in `tasks` share a name.
/// 4. Every service and every produced task output declares a service type.
/// 5. Every class name referenced anywhere in the module parses.
/// 6. Every factory method and output accessor is a Java identifier.
///
/// ## Errors
///
/// - `GeneratorError::EmptyModuleName`
/// - `GeneratorError::MalformedEntranceClass`
/// - `GeneratorError::DuplicateTaskName`
/// - `GeneratorError::MissingServiceTypes`
/// - `GeneratorError::InvalidClassName`
/// - `GeneratorError::InvalidIdentifier`
pub fn validate_module(module: &ModuleMeta) -> Result<(), GeneratorError> {
    if module.name.trim().is_empty() {
        return Err(GeneratorError::EmptyModuleName {
            entrance_class: module.entrance_class.clone(),
        });
    }

    validate_entrance_class(module)?;
    validate_unique_tasks(module)?;
    validate_service_types(module)?;
    validate_class_references(module)?;
    validate_member_names(module)
}

fn validate_entrance_class(module: &ModuleMeta) -> Result<(), GeneratorError> {
    let has_package = module
        .package_name()
        .is_some_and(|package| !package.is_empty());
    if !has_package || module.simple_name().is_empty() {
        return Err(GeneratorError::MalformedEntranceClass {
            module: module.name.clone(),
            entrance_class: module.entrance_class.clone(),
        });
    }
    ClassName::parse(&module.entrance_class)?;
    Ok(())
}

fn validate_unique_tasks(module: &ModuleMeta) -> Result<(), GeneratorError> {
    let mut seen = HashSet::new();
    for task in &module.tasks {
        if !seen.insert(task.name.as_str()) {
            return Err(GeneratorError::DuplicateTaskName {
                module: module.name.clone(),
                task: task.name.clone(),
            });
        }
    }
    Ok(())
}

fn validate_service_types(module: &ModuleMeta) -> Result<(), GeneratorError> {
    let missing = |owner: String| GeneratorError::MissingServiceTypes {
        module: module.name.clone(),
        owner,
    };

    for service in &module.services {
        if service.service_types.is_empty() {
            return Err(missing(format!("service '{}'", service.name)));
        }
    }

    for task in lifecycle_and_tasks(module) {
        for output in &task.produced_services {
            if output.service_types.is_empty() {
                return Err(missing(format!(
                    "output '{}' of task '{}'",
                    output.name, task.name
                )));
            }
        }
    }
    Ok(())
}

fn validate_class_references(module: &ModuleMeta) -> Result<(), GeneratorError> {
    if let Some(activator) = &module.activator_class {
        ClassName::parse(activator)?;
    }

    for service in &module.services {
        ClassName::parse(&service.return_type)?;
        ClassName::parse(&service.source_class)?;
        parse_all(&service.service_types)?;
        validate_dependencies(&service.all_dependencies())?;
    }

    for route in &module.routes {
        ClassName::parse(&route.class_name)?;
        parse_all(&route.interceptors)?;
        if let Some(launcher) = &route.launcher {
            ClassName::parse(launcher)?;
        }
    }

    for task in lifecycle_and_tasks(module) {
        ClassName::parse(&task.class_name)?;
        validate_dependencies(&task.all_dependencies())?;
        for output in &task.produced_services {
            TypeName::parse(&output.return_type)?;
            parse_all(&output.service_types)?;
        }
    }
    Ok(())
}

fn validate_member_names(module: &ModuleMeta) -> Result<(), GeneratorError> {
    for service in &module.services {
        if let ServiceFactory::StaticMethod(method) = &service.factory {
            check_member_name(
                method,
                &format!("factory method of service '{}' in module '{}'", service.name, module.name),
            )?;
        }
    }

    for task in lifecycle_and_tasks(module) {
        for output in &task.produced_services {
            let (name, kind) = match &output.accessor {
                ServiceAccessor::Field(field) => (field, "field"),
                ServiceAccessor::Method(method) => (method, "method"),
            };
            check_member_name(
                name,
                &format!(
                    "{} of output '{}' of task '{}' in module '{}'",
                    kind, output.name, task.name, module.name
                ),
            )?;
        }
    }
    Ok(())
}

fn validate_dependencies(deps: &[Dependency]) -> Result<(), GeneratorError> {
    for class_name in deps.iter().filter_map(Dependency::class_name) {
        ClassName::parse(class_name)?;
    }
    Ok(())
}

fn parse_all(names: &[String]) -> Result<(), GeneratorError> {
    for name in names {
        ClassName::parse(name)?;
    }
    Ok(())
}

/// Lifecycle hooks first, then registered tasks.
fn lifecycle_and_tasks(module: &ModuleMeta) -> impl Iterator<Item = &TaskMeta> {
    module
        .on_create
        .iter()
        .chain(module.on_post_create.iter())
        .chain(module.tasks.iter())
}
