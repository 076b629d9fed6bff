//! The fixed check set.
//!
//! - `structure`: required manifest, nested package dirs, conflict copies, duplicate configs
//! - `patterns`: forbidden suppressions, debug prints, hardcoded colors
//! - `toolchain`: type check, lint, build

pub mod patterns;
pub mod structure;
pub mod toolchain;

use crate::core::check::{CheckDescriptor, Tier};

/// All checks in execution order. Fast checks run first, slow checks only
/// when the fast tier recorded no errors.
pub fn registry() -> Vec<CheckDescriptor> {
    vec![
        CheckDescriptor::new("kernel", Tier::Fast, structure::check_kernel_existence),
        CheckDescriptor::new("anti-patterns", Tier::Fast, patterns::check_anti_patterns),
        CheckDescriptor::new("design-system", Tier::Fast, patterns::check_design_system),
        CheckDescriptor::new("nested-package-dirs", Tier::Fast, structure::check_nested_package_dirs),
        CheckDescriptor::new("conflict-copies", Tier::Fast, structure::check_conflict_copies),
        CheckDescriptor::new("duplicate-configs", Tier::Fast, structure::check_duplicate_configs),
        CheckDescriptor::new("typecheck", Tier::Slow, toolchain::check_typecheck),
        CheckDescriptor::new("lint", Tier::Slow, toolchain::check_lint),
        CheckDescriptor::new("build", Tier::Slow, toolchain::check_build),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = registry().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "kernel",
                "anti-patterns",
                "design-system",
                "nested-package-dirs",
                "conflict-copies",
                "duplicate-configs",
                "typecheck",
                "lint",
                "build",
            ]
        );
    }

    #[test]
    fn test_registry_tiers_are_grouped() {
        let tiers: Vec<_> = registry().iter().map(|c| c.tier).collect();
        let first_slow = tiers.iter().position(|t| *t == Tier::Slow).unwrap();
        assert!(tiers[..first_slow].iter().all(|t| *t == Tier::Fast));
        assert!(tiers[first_slow..].iter().all(|t| *t == Tier::Slow));
        assert_eq!(first_slow, 6);
    }
}
