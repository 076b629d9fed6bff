//! Checks that delegate to the project's build toolchain.
//!
//! Output matching below depends on the wording of the underlying tools and
//! will silently stop matching if that wording changes.

use crate::core::check::CheckContext;
use crate::core::finding::codes;
use crate::core::state::ValidationState;
use regex::Regex;
use std::sync::LazyLock;

const MODULE_NOT_FOUND: &str = "Cannot find module";
const UNRESOLVED_IMPORT: &str = "Failed to resolve import";

static LINT_ERROR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+\d+:\d+\s+error").expect("lint error pattern"));

pub fn check_typecheck(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Running type check...");
    let command = &ctx.config.commands.typecheck;

    let result = ctx.executor.run(command, ctx.root);
    if !result.success() {
        state.error(
            codes::TYPECHECK_FAILED,
            format!("Type errors found (`{}` failed)", command),
        );
        return false;
    }

    ctx.console.ok("Type check passed");
    true
}

/// Number of error-severity lines in lint output. Warnings are not counted.
pub fn count_lint_errors(output: &str) -> usize {
    output
        .lines()
        .filter(|line| LINT_ERROR_LINE.is_match(line))
        .count()
}

pub fn check_lint(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Running lint check...");

    let result = ctx.executor.run(&ctx.config.commands.lint, ctx.root);
    let errors = count_lint_errors(&result.output);
    if errors > 0 {
        state.error(codes::LINT_ERRORS, format!("{} lint errors found", errors));
        return false;
    }

    ctx.console.ok("No lint errors");
    true
}

pub fn check_build(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Running build verification...");
    let command = &ctx.config.commands.build;

    let result = ctx.executor.run(command, ctx.root);
    if result.success() {
        ctx.console.ok("Build successful");
        return true;
    }

    state.error(codes::BUILD_FAILED, format!("`{}` failed", command));
    if result.output.contains(MODULE_NOT_FOUND) {
        state.error(
            codes::MODULE_NOT_FOUND,
            format!(
                "Module not found - try: rm -rf {0} && reinstall dependencies",
                ctx.config.tree.package_dir
            ),
        );
    }
    if result.output.contains(UNRESOLVED_IMPORT) {
        state.error(
            codes::NESTED_PACKAGE_DIR,
            format!(
                "Failed to resolve import - check for nested {}",
                ctx.config.tree.package_dir
            ),
        );
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::console::Console;
    use crate::core::testing::ScriptedExecutor;
    use std::path::Path;

    fn run(
        executor: &ScriptedExecutor,
        check: fn(&CheckContext<'_>, &mut ValidationState) -> bool,
    ) -> (bool, ValidationState) {
        let config = Config::default();
        let ctx = CheckContext::new(Path::new("."), &config, executor, Console::silent());
        let mut state = ValidationState::new();
        let clean = check(&ctx, &mut state);
        (clean, state)
    }

    #[test]
    fn test_build_failure_with_module_signature() {
        let executor = ScriptedExecutor::new().on(
            "npm run build",
            1,
            "Error: Cannot find module 'vite'\n",
        );
        let (clean, state) = run(&executor, check_build);
        assert!(!clean);
        let found: Vec<_> = state.errors().iter().map(|f| f.code.as_str()).collect();
        assert_eq!(found, vec!["BUILD_FAILED", "ERR_002"]);
    }

    #[test]
    fn test_build_failure_with_both_signatures() {
        let executor = ScriptedExecutor::new().on(
            "npm run build",
            2,
            "Failed to resolve import \"x\"\nCannot find module 'y'\n",
        );
        let (_, state) = run(&executor, check_build);
        let found: Vec<_> = state.errors().iter().map(|f| f.code.as_str()).collect();
        assert_eq!(found, vec!["BUILD_FAILED", "ERR_002", "ERR_003"]);
    }

    #[test]
    fn test_build_success_ignores_output() {
        let executor =
            ScriptedExecutor::new().on("npm run build", 0, "warning: Cannot find module x");
        let (clean, state) = run(&executor, check_build);
        assert!(clean);
        assert!(state.is_empty());
    }

    #[test]
    fn test_lint_counts_only_error_lines() {
        let output = "\n/src/a.ts\n  1:1  error  no-unused-vars\n  2:5  warning  prefer-const\n  10:12  error  no-undef\n   3:4   error   eqeqeq\n\n✖ 4 problems\n";
        let executor = ScriptedExecutor::new().on("npm run lint", 1, output);
        let (clean, state) = run(&executor, check_lint);
        assert!(!clean);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].code, "LINT_ERRORS");
        assert_eq!(state.errors()[0].message, "3 lint errors found");
    }

    #[test]
    fn test_lint_warnings_only_is_clean() {
        let executor =
            ScriptedExecutor::new().on("npm run lint", 0, "  4:2  warning  no-console\n");
        let (clean, state) = run(&executor, check_lint);
        assert!(clean);
        assert!(state.is_empty());
    }

    #[test]
    fn test_count_lint_errors_requires_indent() {
        assert_eq!(count_lint_errors("1:1 error at column zero"), 0);
        assert_eq!(count_lint_errors("\t12:3\terror"), 1);
    }

    #[test]
    fn test_typecheck_failure_is_single_finding() {
        let executor = ScriptedExecutor::new().on(
            "npm run typecheck",
            2,
            "src/a.ts(1,1): error TS2304\nsrc/b.ts(2,2): error TS2322\n",
        );
        let (clean, state) = run(&executor, check_typecheck);
        assert!(!clean);
        assert_eq!(state.errors().len(), 1);
        assert_eq!(state.errors()[0].code, "TYPECHECK_FAILED");
        assert_eq!(executor.calls(), vec!["npm run typecheck"]);
    }
}
