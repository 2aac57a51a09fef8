//! A small Java source model.
//!
//! - [`ClassName`] / [`TypeName`] - type references parsed from metadata strings
//! - [`Fragment`] - composable code pieces with symbolic type references
//! - [`JavaFile`] - a compilation unit that resolves imports at render time

mod class_name;
mod file;
mod fragment;

pub use class_name::{ClassName, TypeName, check_member_name, is_identifier};
pub use file::{ImportTable, JavaFile};
pub use fragment::{Fragment, java_string_literal};
