//! Structural hygiene checks over the project tree.
//!
//! These only look at paths and file names, never at contents.

use crate::core::check::CheckContext;
use crate::core::finding::codes;
use crate::core::output::dot_path;
use crate::core::scan::{in_root_zone, walk};
use crate::core::state::ValidationState;
use std::path::Path;

const MANIFEST_NAME: &str = "package.json";

pub fn check_kernel_existence(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    let kernel = &ctx.config.kernel_path;
    ctx.console.info(&format!("Checking for {}...", kernel));

    if !ctx.root.join(kernel).exists() {
        state.error(
            codes::KERNEL_MISSING,
            format!("{} not found! The system kernel is missing.", kernel),
        );
        return false;
    }

    ctx.console.ok("System kernel online");
    true
}

/// Dependency trees other than the one at the project root.
pub fn check_nested_package_dirs(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    let package_dir = ctx.config.tree.package_dir.as_str();
    ctx.console
        .info(&format!("Checking for nested {} outside root...", package_dir));

    let nested: Vec<_> = walk(ctx.root, |rel| {
        in_root_zone(rel, package_dir) || in_root_zone(rel, ".git")
    })
    .into_iter()
    .filter(|e| e.is_dir() && e.name() == package_dir)
    .collect();

    if nested.is_empty() {
        ctx.console.ok(&format!("No nested {} found", package_dir));
        return true;
    }

    for entry in &nested {
        state.error(
            codes::NESTED_PACKAGE_DIR,
            format!("Nested {} found: {}", package_dir, dot_path(&entry.rel)),
        );
    }
    false
}

/// Sync-conflict leftovers such as `Button 2.tsx`.
pub fn is_conflict_copy(name: &str) -> bool {
    name.contains(" 2.") || name.contains(" 3.")
}

pub fn check_conflict_copies(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Checking for conflict-copy duplicates...");
    let zones = &ctx.config.tree.excluded_zones;

    let copies: Vec<_> = walk(ctx.root, |rel| zones.iter().any(|z| in_root_zone(rel, z)))
        .into_iter()
        .filter(|e| e.is_file() && is_conflict_copy(e.name()))
        .collect();

    if copies.is_empty() {
        ctx.console.ok("No conflict-copy duplicates found");
        return true;
    }

    for entry in &copies {
        state.error(
            codes::CONFLICT_COPY,
            format!("Conflict-copy duplicate found: {}", dot_path(&entry.rel)),
        );
    }
    false
}

fn is_compiler_config(name: &str) -> bool {
    name.starts_with("tsconfig") && name.ends_with(".json")
}

/// Extra package manifests and compiler configs. Advisory only.
pub fn check_duplicate_configs(ctx: &CheckContext<'_>, state: &mut ValidationState) -> bool {
    ctx.console.info("Checking for duplicate config files...");
    let tree = &ctx.config.tree;

    let files: Vec<_> = walk(ctx.root, |rel| in_root_zone(rel, &tree.package_dir))
        .into_iter()
        .filter(|e| e.is_file())
        .collect();

    let before = state.warnings().len();

    for entry in files
        .iter()
        .filter(|e| e.name() == MANIFEST_NAME && e.rel != Path::new(MANIFEST_NAME))
    {
        state.warn(
            codes::DUPLICATE_CONFIG,
            format!("Duplicate {}: {}", MANIFEST_NAME, dot_path(&entry.rel)),
        );
    }

    for entry in files.iter().filter(|e| is_compiler_config(e.name())) {
        let whitelisted = tree
            .compiler_config_whitelist
            .iter()
            .any(|w| entry.rel == Path::new(w));
        if !whitelisted {
            state.warn(
                codes::DUPLICATE_CONFIG,
                format!("Duplicate tsconfig: {}", dot_path(&entry.rel)),
            );
        }
    }

    let clean = state.warnings().len() == before;
    if clean {
        ctx.console.ok("No duplicate configs found");
    }
    clean
}
