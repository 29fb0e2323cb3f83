//! Parsing of the build tool's plain-text step listing.

use once_cell::sync::Lazy;
use regex::Regex;

/// A single build step advertised by `zig build --list-steps`.
///
/// Produced fresh on every listing call and discarded after synthesis;
/// ordering follows the order of appearance in the tool's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    /// Step name as passed to `zig build`
    pub name: String,
    /// Whether the listing carried the `(default)` marker for this step
    pub is_default: bool,
    /// Free-text remainder of the line, trimmed
    pub description: String,
}

// One step per line: optional indentation, the step name (word characters
// plus '-', since real step names look like `build-exe`), an optional
// literal `(default)` marker, then the description to end of line.
static STEP_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([\w-]*)\s*(\(default\))?\s*(.*)$").unwrap());

/// Parse the captured stdout of a `--list-steps` invocation.
///
/// Every line is evaluated independently; no state carries between
/// lines. Lines that do not yield a non-empty step name (headers,
/// blanks) are skipped rather than reported, so malformed input never
/// fails. Worst case is an empty result.
pub fn parse_step_list(raw: &str) -> Vec<BuildStep> {
    let mut steps = Vec::new();
    for line in raw.lines() {
        let Some(caps) = STEP_LINE.captures(line) else {
            continue;
        };
        let name = caps.get(1).map_or("", |m| m.as_str()).trim();
        if name.is_empty() {
            continue;
        }
        let is_default = caps.get(2).is_some();
        let description = caps.get(3).map_or("", |m| m.as_str()).trim().to_string();
        tracing::info!(
            step = name,
            default = is_default,
            description = %description,
            "matched build step"
        );
        steps.push(BuildStep {
            name: name.to_string(),
            is_default,
            description,
        });
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_steps() {
        assert!(parse_step_list("").is_empty());
    }

    #[test]
    fn whitespace_only_input_yields_no_steps() {
        assert!(parse_step_list("   \n\t\n  \n").is_empty());
    }

    #[test]
    fn default_marker_is_detected() {
        let steps = parse_step_list("build-exe (default) Build the executable");
        assert_eq!(
            steps,
            vec![BuildStep {
                name: "build-exe".to_string(),
                is_default: true,
                description: "Build the executable".to_string(),
            }]
        );
    }

    #[test]
    fn indented_line_without_marker() {
        let steps = parse_step_list("  test   Run unit tests");
        assert_eq!(
            steps,
            vec![BuildStep {
                name: "test".to_string(),
                is_default: false,
                description: "Run unit tests".to_string(),
            }]
        );
    }

    #[test]
    fn blank_lines_are_skipped_and_order_is_preserved() {
        let listing = "\n  install (default)  Copy build artifacts to prefix path\n\n  uninstall  Remove build artifacts from prefix path\n\n  test  Run unit tests\n";
        let steps = parse_step_list(listing);
        let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["install", "uninstall", "test"]);
    }

    #[test]
    fn only_the_marked_step_is_default() {
        let listing = "  install (default)  Copy build artifacts\n  run  Run the app\n";
        let steps = parse_step_list(listing);
        let defaults: Vec<&str> = steps
            .iter()
            .filter(|s| s.is_default)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(defaults, vec!["install"]);
    }

    #[test]
    fn no_default_marker_means_no_default_step() {
        let listing = "  run  Run the app\n  test  Run unit tests\n";
        assert!(parse_step_list(listing).iter().all(|s| !s.is_default));
    }

    #[test]
    fn step_without_description() {
        let steps = parse_step_list("docs");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].name, "docs");
        assert_eq!(steps[0].description, "");
        assert!(!steps[0].is_default);
    }

    #[test]
    fn parenthesized_text_inside_description_is_not_a_marker() {
        let steps = parse_step_list("  fmt  Reformat sources (in place)");
        assert_eq!(steps[0].name, "fmt");
        assert!(!steps[0].is_default);
        assert_eq!(steps[0].description, "Reformat sources (in place)");
    }
}
