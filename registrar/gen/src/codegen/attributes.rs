//! Attribute array rendering.

use registrar_define::Attribute;

use crate::config::RuntimeTypes;
use crate::java::Fragment;

/// Renders `attributes` as a `Pair[]` literal, one pair per line.
///
/// An empty list renders as the shared `emptyAttributesArray()` constant,
/// never as an empty array literal.
pub fn render_attributes(attributes: &[Attribute], rt: &RuntimeTypes) -> Fragment {
    if attributes.is_empty() {
        return Fragment::new()
            .ty(&rt.builtins)
            .text(".emptyAttributesArray()");
    }

    let pairs = attributes.iter().map(|attr| {
        Fragment::new()
            .ty(&rt.tuples)
            .text(".to(")
            .literal(&attr.name)
            .text(", ")
            .literal(&attr.value)
            .text(")")
    });

    Fragment::new()
        .text("new ")
        .ty(&rt.pair)
        .text("[]{")
        .append(Fragment::args(pairs))
        .text("}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::runtime;

    #[test]
    fn empty_attributes_use_shared_constant() {
        let code = render_attributes(&[], &runtime()).to_string();
        assert_eq!(code, "BuiltInKt.emptyAttributesArray()");
        assert!(!code.contains("new Pair[]"));
    }

    #[test]
    fn attributes_keep_order_and_count() {
        let attrs = vec![
            Attribute::new("zeta", "1"),
            Attribute::new("alpha", "2"),
            Attribute::new("zeta", "3"),
        ];
        let code = render_attributes(&attrs, &runtime()).to_string();

        assert_eq!(
            code,
            "new Pair[]{\n        TuplesKt.to(\"zeta\", \"1\"),\n        TuplesKt.to(\"alpha\", \"2\"),\n        TuplesKt.to(\"zeta\", \"3\")}"
        );
        assert_eq!(code.matches("TuplesKt.to(").count(), 3);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let attrs = vec![Attribute::new("path", "C:\\tmp \"x\"")];
        let code = render_attributes(&attrs, &runtime()).to_string();
        assert!(code.contains("TuplesKt.to(\"path\", \"C:\\\\tmp \\\"x\\\"\")"));
    }
}
