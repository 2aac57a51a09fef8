//! Code generation for module containers.
//!
//! Each submodule lowers one kind of metadata into a [`Fragment`]:
//!
//! - [`dependency`] - Dependency access expressions and descriptors
//! - [`attributes`] - Attribute arrays
//! - [`service`] - Service provider registration blocks
//! - [`route`] - Route registration calls
//! - [`task`] - Task registration blocks
//! - [`module_docs`] - The container class javadoc
//! - [`module`] - The container class itself
//!
//! ## Code Generation Flow
//!
//! 1. [`generate_container`] builds the constructor from the module's
//!    lifecycle hooks and attributes
//! 2. An activator factory is added when the module declares a custom activator
//! 3. `onRegister` is added when the module registers anything, containing
//!    every [`generate_service`] block, then every [`generate_route`] call,
//!    then every [`generate_task`] block
//!
//! The resulting [`JavaFile`](crate::java::JavaFile) is rendered by
//! [`crate::output`].

pub mod attributes;
pub mod dependency;
pub mod module;
pub mod module_docs;
pub mod route;
pub mod service;
pub mod task;

pub use attributes::render_attributes;
pub use dependency::{
    AccessPoint, render_access, render_access_list, render_descriptor, render_descriptor_list,
};
pub use module::generate_container;
pub use module_docs::ModuleDocBuilder;
pub use route::generate_route;
pub use service::generate_service;
pub use task::generate_task;

use crate::java::Fragment;

/// Name of the `Registry` parameter of `onRegister`.
pub const REGISTRY: &str = "registry";
/// Name of the `TaskContainer` parameter of `onRegister`.
pub const TASKS: &str = "tasks";

/// Renders each line of `text` as a `//` comment. Empty text renders nothing.
pub(crate) fn line_comments(text: &str) -> Fragment {
    let mut out = Fragment::new();
    if text.trim().is_empty() {
        return out;
    }
    for line in comment_lines(text) {
        let line = escape_backslashes(line.trim_end());
        out = if line.is_empty() {
            out.text("//")
        } else {
            out.text(format!("// {}", line))
        }
        .newline();
    }
    out
}

/// Splits comment text on every Java line terminator: `\r\n`, `\r` and `\n`.
///
/// Trailing blank lines are dropped.
pub(crate) fn comment_lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim_end()
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// Doubles every backslash so that no `\u` in comment text is decoded by javac.
///
/// javac reads a `\u` as a unicode escape, even inside comments, when an even
/// number of backslashes precedes it. After doubling, every run of
/// backslashes has even length, so none of them starts an escape.
pub(crate) fn escape_backslashes(text: &str) -> String {
    text.replace('\\', "\\\\")
}
