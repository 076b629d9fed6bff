//! Line-oriented source scans.
//!
//! Matching is plain text: a directive inside a string literal or a comment
//! still counts. Counts are per matching line.

use crate::core::check::CheckContext;
use crate::core::finding::codes;
use crate::core::output::sample_line;
use crate::core::scan::grep_lines;
use crate::core::state::ValidationState;
use regex::Regex;
use std::sync::LazyLock;

const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx"];
const SUPPRESSION_DIRECTIVE: &str = "// @ts-ignore";
const DEBUG_PRINT: &str = "console.log";
const VIOLATION_SAMPLES: usize = 3;
const SAMPLE_WIDTH: usize = 80;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,6}").expect("hex color pattern"));

/// Suppression directives are gating, debug prints are advisory.
pub fn check_anti_patterns(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Checking for anti-patterns...");
    let source_root = &ctx.config.source_root;

    let suppressions = grep_lines(ctx.root, source_root, SOURCE_EXTENSIONS, |line| {
        line.contains(SUPPRESSION_DIRECTIVE)
    });
    if !suppressions.is_empty() {
        state.error(
            codes::ANTI_PATTERN,
            format!(
                "{}x '{}' detected. This is forbidden! Use proper types.",
                suppressions.len(),
                SUPPRESSION_DIRECTIVE
            ),
        );
    }

    let prints = grep_lines(ctx.root, source_root, SOURCE_EXTENSIONS, |line| {
        line.contains(DEBUG_PRINT)
    });
    if !prints.is_empty() {
        state.warn(
            codes::ANTI_PATTERN,
            format!(
                "{}x '{}' detected. Remove before production.",
                prints.len(),
                DEBUG_PRINT
            ),
        );
    }

    if suppressions.is_empty() {
        ctx.console.ok("No critical anti-patterns found");
    }
    suppressions.is_empty() && prints.is_empty()
}

fn is_design_exempt(path: &str, exclusions: &[String]) -> bool {
    exclusions.iter().any(|fragment| path.contains(fragment.as_str()))
}

/// Literal hex colors in UI sources, outside configuration and constants files.
pub fn check_design_system(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console
        .info("Checking for design system violations (hardcoded colors)...");
    let exclusions = &ctx.config.tree.design_exclusions;

    let hits: Vec<_> = grep_lines(ctx.root, &ctx.config.source_root, SOURCE_EXTENSIONS, |line| {
        HEX_COLOR.is_match(line)
    })
    .into_iter()
    .filter(|hit| !is_design_exempt(&hit.rel.to_string_lossy(), exclusions))
    .collect();

    if hits.is_empty() {
        ctx.console.ok("Design system adherence looks good");
        return true;
    }

    state.warn(
        codes::DESIGN_SYSTEM,
        format!(
            "{}x hardcoded hex colors detected. Use Tailwind classes or CSS variables!",
            hits.len()
        ),
    );
    ctx.console.warn(&format!(
        "{} hardcoded color lines, first {} shown:",
        hits.len(),
        hits.len().min(VIOLATION_SAMPLES)
    ));
    for hit in hits.iter().take(VIOLATION_SAMPLES) {
        ctx.console.violation(&sample_line(&hit.render(), SAMPLE_WIDTH));
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::console::Console;
    use crate::core::testing::ScriptedExecutor;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn run(root: &Path, check: fn(&CheckContext<'_>, &mut ValidationState) -> bool) -> (bool, ValidationState) {
        let config = Config::default();
        let executor = ScriptedExecutor::new();
        let ctx = CheckContext::new(root, &config, &executor, Console::silent());
        let mut state = ValidationState::new();
        let clean = check(&ctx, &mut state);
        (clean, state)
    }

    #[test]
    fn test_debug_prints_are_one_warning_with_count() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "src/a.ts", "console.log('a');\nconst x = 1;\n");
        write(tmp.path(), "src/hooks/b.tsx", "  console.log(x);\n");
        write(tmp.path(), "src/notes.md", "console.log\n");

        let (clean, state) = run(tmp.path(), check_anti_patterns);
        assert!(!clean);
        assert!(!state.has_errors());
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(state.warnings()[0].code, "ANTI_PATTERN");
        assert!(state.warnings()[0].message.starts_with("2x 'console.log'"));
    }

    #[test]
    fn test_suppression_directive_is_error() {
        let tmp = tempdir().unwrap();
        write(
            tmp.path(),
            "src/a.ts",
            "// @ts-ignore\nfoo();\nconst s = \"// @ts-ignore\";\n",
        );

        let (clean, state) = run(tmp.path(), check_anti_patterns);
        assert!(!clean);
        assert_eq!(state.errors().len(), 1);
        assert!(state.errors()[0].message.starts_with("2x '// @ts-ignore'"));
    }

    #[test]
    fn test_invalid_utf8_source_still_scanned() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("src/a.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"// Gr\xf6\xdfe\n// @ts-ignore\nfoo();\n").unwrap();

        let (clean, state) = run(tmp.path(), check_anti_patterns);
        assert!(!clean);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].code, "ANTI_PATTERN");
        assert!(state.errors()[0].message.starts_with("1x '// @ts-ignore'"));
    }

    #[test]
    fn test_sources_outside_source_root_ignored() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "scripts/import.ts", "// @ts-ignore\nconsole.log(1);\n");
        let (clean, state) = run(tmp.path(), check_anti_patterns);
        assert!(clean);
        assert!(state.is_empty());
    }

    #[test]
    fn test_hex_colors_warn_outside_exclusions() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "src/components/Card.tsx", "<div style={{ color: '#ff0000' }} />\n");
        write(tmp.path(), "src/components/Badge.tsx", "const c = \"#abc\";\n");
        write(tmp.path(), "src/lib/utils.ts", "const brand = '#123456';\n");
        write(tmp.path(), "src/theme/constants.ts", "export const RED = '#f00';\n");

        let (clean, state) = run(tmp.path(), check_design_system);
        assert!(!clean);
        assert!(!state.has_errors());
        assert_eq!(state.warnings().len(), 1);
        assert_eq!(state.warnings()[0].code, "DESIGN_SYSTEM");
        assert!(state.warnings()[0].message.starts_with("2x "));
    }

    #[test]
    fn test_no_hex_colors_is_clean() {
        let tmp = tempdir().unwrap();
        write(tmp.path(), "src/App.tsx", "<div className=\"bg-primary\" />\n");
        let (clean, state) = run(tmp.path(), check_design_system);
        assert!(clean);
        assert!(state.is_empty());
    }
}
