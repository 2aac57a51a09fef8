//! Registrar code generator library.
//!
//! This crate generates Java module container classes from module
//! definitions created with `registrar-define`. A generated container:
//!
//! - Hands the module descriptor (name, bootstrap mode, lifecycle task
//!   options, attributes) to its base class in the constructor
//! - Creates the module's custom activator, when it declares one
//! - Registers every service provider, route and task in `onRegister`
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for each kind of registration
//! - [`java`] - The Java source model: class names, fragments and files
//! - [`validation`] - Pre-generation checks on module definitions
//! - [`output`] - Rendering and writing generated files
//! - [`input`] - Loading module definitions from JSON or YAML
//! - [`config`] - Generator settings and runtime API class names
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use registrar_define::{BootstrapMode, ModuleMeta, RouteMeta};
//! use registrar_gen::config::GeneratorConfig;
//! use registrar_gen::output::generate_module;
//!
//! let mut module = ModuleMeta::new("core", "com.example.core.CoreModule", BootstrapMode::Eager);
//! module.routes.push(
//!     RouteMeta::new("home", "com.example.core.HomeActivity").with_rules(["app://home"]),
//! );
//!
//! let unit = generate_module(&module, &GeneratorConfig::default()).unwrap();
//! assert_eq!(unit.type_name, "CoreModule");
//! assert!(unit.source.contains("public void onRegister(Registry registry, TaskContainer tasks)"));
//! ```
//!
//! ## Generated Code Structure
//!
//! ```text
//! package com.example.core;
//!
//! /**
//!  * Generated by registrar-gen, don't edit it.
//!  * Module: core
//!  * Bootstrap mode: EAGER
//!  */
//! public class CoreModule extends ModuleContainer {
//!     public CoreModule() {
//!         super(new ModuleData(...));
//!     }
//!
//!     @Override
//!     public void onRegister(Registry registry, TaskContainer tasks) {
//!         // services, then routes, then tasks
//!     }
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod errors;
pub mod input;
pub mod java;
pub mod output;
pub mod validation;

#[cfg(test)]
mod test_utils;
