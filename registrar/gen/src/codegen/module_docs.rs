//! Class-level javadoc for generated module containers.
//!
//! The javadoc restates the module's identity so a reader of the generated
//! source can tell which module a container belongs to without opening the
//! metadata it was generated from.

use registrar_define::ModuleMeta;

use super::{comment_lines, escape_backslashes};
use crate::java::Fragment;

const DESCRIPTION_LABEL: &str = "Description: ";

/// Builds the javadoc placed above a generated container class.
///
/// The builder emits these lines, in order:
/// - the generated-by banner
/// - `Module: <name>`
/// - `Bootstrap mode: <MODE>`
/// - `Description: <first line>`, with further lines aligned beneath the
///   first, only when the module has a description
///
/// ## Examples
///
/// ```
/// use registrar_define::{BootstrapMode, ModuleMeta};
/// use registrar_gen::codegen::ModuleDocBuilder;
///
/// let mut module = ModuleMeta::new("core", "com.example.CoreModule", BootstrapMode::Eager);
/// module.desc = "Core services.\nLoaded first.".to_string();
///
/// let docs = ModuleDocBuilder::new(&module, "Generated, don't edit it.").build();
/// assert_eq!(
///     docs.to_string(),
///     "/**\n * Generated, don't edit it.\n * Module: core\n * Bootstrap mode: EAGER\n * Description: Core services.\n *              Loaded first.\n */\n"
/// );
/// ```
pub struct ModuleDocBuilder<'a> {
    module: &'a ModuleMeta,
    banner: &'a str,
}

impl<'a> ModuleDocBuilder<'a> {
    pub fn new(module: &'a ModuleMeta, banner: &'a str) -> Self {
        Self { module, banner }
    }

    /// Builds the complete `/** ... */` comment.
    pub fn build(&self) -> Fragment {
        let mut lines = Vec::new();
        if !self.banner.trim().is_empty() {
            lines.push(self.banner.trim().to_string());
        }
        lines.push(format!("Module: {}", self.module.name));
        lines.push(format!("Bootstrap mode: {}", self.module.bootstrap_mode));
        lines.extend(self.description_lines());

        let mut doc = Fragment::new().text("/**").newline();
        for line in lines.iter().flat_map(|line| comment_lines(line)) {
            let line = escape_javadoc(line.trim_end());
            doc = if line.is_empty() {
                doc.text(" *")
            } else {
                doc.text(format!(" * {}", line))
            }
            .newline();
        }
        doc.text(" */").newline()
    }

    /// The description, labeled on its first line and aligned on the rest.
    fn description_lines(&self) -> Vec<String> {
        if self.module.desc.trim().is_empty() {
            return Vec::new();
        }
        let continuation = " ".repeat(DESCRIPTION_LABEL.len());
        comment_lines(&self.module.desc)
            .enumerate()
            .map(|(i, line)| {
                let label = if i == 0 { DESCRIPTION_LABEL } else { &continuation };
                format!("{}{}", label, line).trim_end().to_string()
            })
            .collect()
    }
}

/// Escapes sequences that would end the comment or be decoded by javac.
fn escape_javadoc(text: &str) -> String {
    escape_backslashes(text).replace("*/", "*&#47;")
}
