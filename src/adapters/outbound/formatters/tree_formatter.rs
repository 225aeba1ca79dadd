use crate::license_walk::domain::{DependencyNode, LicenseAnnotation, LicenseSource};
use crate::license_walk::policies::LicenseExcerpt;
use crate::ports::outbound::TreeFormatter;
use owo_colors::OwoColorize;

/// Indentation added per level of depth
const INDENT: &str = "    ";

/// TextTreeFormatter adapter rendering one line per node
///
/// ```text
/// foo (MIT)
///     bar (unknown)
///
/// ```
///
/// Nodes are printed depth-first in declaration order. Line breaks inside an
/// annotation become spaces so that every node stays on a single line. With
/// color enabled the annotation is tinted by the tier that produced it.
pub struct TextTreeFormatter {
    color: bool,
}

impl TextTreeFormatter {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    fn write_node(&self, output: &mut String, node: &DependencyNode, depth: usize) {
        for _ in 0..depth {
            output.push_str(INDENT);
        }
        output.push_str(node.name());
        output.push_str(" (");
        output.push_str(&self.render_annotation(node.license()));
        output.push_str(")\n");

        for child in node.children() {
            self.write_node(output, child, depth + 1);
        }
    }

    fn render_annotation(&self, annotation: &LicenseAnnotation) -> String {
        let text = LicenseExcerpt::collapse_newlines(annotation.text());
        if !self.color {
            return text;
        }

        match annotation.source() {
            LicenseSource::Declared => text.green().to_string(),
            LicenseSource::LicenseFile => text.cyan().to_string(),
            LicenseSource::Readme => text.yellow().to_string(),
            LicenseSource::Unknown => text.red().to_string(),
            LicenseSource::Cycle => text.dimmed().to_string(),
        }
    }
}

impl Default for TextTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, roots: &[DependencyNode]) -> String {
        let mut output = String::new();
        for root in roots {
            self.write_node(&mut output, root, 0);
        }
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, license: LicenseAnnotation) -> DependencyNode {
        DependencyNode::new(name, "1.0.0", license, vec![])
    }

    #[test]
    fn test_format_single_unknown_root() {
        let formatter = TextTreeFormatter::new();
        let output = formatter.format(&[leaf("foo", LicenseAnnotation::unknown())]);
        assert_eq!(output, "foo (unknown)\n\n");
    }

    #[test]
    fn test_format_root_with_child() {
        let root = DependencyNode::new(
            "foo",
            "1.0.0",
            LicenseAnnotation::declared("MIT"),
            vec![DependencyNode::unresolved("bar")],
        );

        let output = TextTreeFormatter::new().format(&[root]);

        assert_eq!(output, "foo (MIT)\n    bar (unknown)\n\n");
    }

    #[test]
    fn test_format_nested_depth_and_order() {
        let root = DependencyNode::new(
            "a",
            "1.0.0",
            LicenseAnnotation::declared("ISC"),
            vec![
                DependencyNode::new(
                    "b",
                    "1.0.0",
                    LicenseAnnotation::declared("MIT"),
                    vec![leaf("c", LicenseAnnotation::license_file("BSD"))],
                ),
                leaf("d", LicenseAnnotation::unknown()),
            ],
        );

        let output = TextTreeFormatter::new().format(&[root]);

        assert_eq!(
            output,
            "a (ISC)\n    b (MIT)\n        c (BSD)\n    d (unknown)\n\n"
        );
    }

    #[test]
    fn test_format_multiple_versions_as_siblings() {
        let roots = vec![
            leaf("foo", LicenseAnnotation::declared("MIT")),
            leaf("foo", LicenseAnnotation::declared("Apache-2.0")),
        ];

        let output = TextTreeFormatter::new().format(&roots);

        assert_eq!(output, "foo (MIT)\nfoo (Apache-2.0)\n\n");
    }

    #[test]
    fn test_format_flattens_multiline_annotation() {
        let root = leaf(
            "widget",
            LicenseAnnotation::license_file("MIT License\n\nCopyright (c) Acme\r\nAll rights"),
        );

        let output = TextTreeFormatter::new().format(&[root]);

        assert_eq!(
            output,
            "widget (MIT License  Copyright (c) Acme All rights)\n\n"
        );
    }

    #[test]
    fn test_format_cycle_leaf() {
        let root = DependencyNode::new(
            "a",
            "1.0.0",
            LicenseAnnotation::declared("MIT"),
            vec![DependencyNode::cycle("a", "1.0.0")],
        );

        let output = TextTreeFormatter::new().format(&[root]);

        assert_eq!(output, "a (MIT)\n    a (cycle)\n\n");
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let output =
            TextTreeFormatter::with_color(true).format(&[leaf("foo", LicenseAnnotation::declared("MIT"))]);

        assert!(output.starts_with("foo ("));
        assert!(output.contains("MIT"));
        assert!(output.contains("\u{1b}["));
        assert!(output.ends_with(")\n\n"));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let output = TextTreeFormatter::default()
            .format(&[leaf("foo", LicenseAnnotation::unknown())]);
        assert!(!output.contains('\u{1b}'));
    }
}
