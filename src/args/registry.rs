//! Flag registry — single source of truth for all boolean predicates.

/// A boolean predicate the package manager asks about its argv.
///
/// Variant order is the registry's row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Verbose,
    Debug,
    Quieter,
    Interactive,
    One,
    Force,
    Git,
    DryRun,
    DeveloperMode,
    Sandbox,
    IgnoreDependencies,
    OnlyDependencies,
    BuildHead,
    BuildDevel,
    BuildUniversal,
    Build32Bit,
    BuildBottle,
    BuildFromSource,
    ForceBottle,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Which predicate this entry answers.
    pub flag: Flag,
    /// Long form token (e.g., "--verbose").
    pub long: &'static str,
    /// Single-character switch that may appear in a bundled group (e.g., `-nv`).
    pub short: Option<char>,
    /// Environment variables that turn the predicate on when non-empty.
    pub env: &'static [&'static str],
    /// Human-readable description (for reports).
    pub description: &'static str,
}

/// Keys accepted in `--key=value` form.
pub const VALUE_KEYS: &[&str] = &["json", "bottle-arch", "cc", "env"];

static FLAG_REGISTRY: [FlagDef; Flag::COUNT] = [
    // === Output ===
    FlagDef {
        flag: Flag::Verbose,
        long: "--verbose",
        short: Some('v'),
        env: &["VERBOSE", "HOMEBREW_VERBOSE"],
        description: "Verbose output",
    },
    FlagDef {
        flag: Flag::Debug,
        long: "--debug",
        short: Some('d'),
        env: &["HOMEBREW_DEBUG"],
        description: "Debug output",
    },
    FlagDef {
        flag: Flag::Quieter,
        long: "--quieter",
        short: Some('q'),
        env: &[],
        description: "Less output",
    },
    FlagDef {
        flag: Flag::Interactive,
        long: "--interactive",
        short: Some('i'),
        env: &[],
        description: "Drop into a shell during the build",
    },
    FlagDef {
        flag: Flag::One,
        long: "--1",
        short: Some('1'),
        env: &[],
        description: "One entry per line",
    },
    // === Behavior ===
    FlagDef {
        flag: Flag::Force,
        long: "--force",
        short: Some('f'),
        env: &[],
        description: "Force the operation",
    },
    FlagDef {
        flag: Flag::Git,
        long: "--git",
        short: Some('g'),
        env: &[],
        description: "Create a git repository of the build",
    },
    FlagDef {
        flag: Flag::DryRun,
        long: "--dry-run",
        short: Some('n'),
        env: &[],
        description: "Show what would be done",
    },
    FlagDef {
        flag: Flag::DeveloperMode,
        long: "--homebrew-developer",
        short: None,
        env: &["HOMEBREW_DEVELOPER"],
        description: "Developer mode",
    },
    FlagDef {
        flag: Flag::Sandbox,
        long: "--sandbox",
        short: None,
        env: &["HOMEBREW_SANDBOX"],
        description: "Build inside a sandbox",
    },
    FlagDef {
        flag: Flag::IgnoreDependencies,
        long: "--ignore-dependencies",
        short: None,
        env: &[],
        description: "Skip dependencies",
    },
    FlagDef {
        flag: Flag::OnlyDependencies,
        long: "--only-dependencies",
        short: None,
        env: &[],
        description: "Only act on dependencies",
    },
    // === Build variants ===
    FlagDef {
        flag: Flag::BuildHead,
        long: "--HEAD",
        short: None,
        env: &[],
        description: "Build the upstream tip",
    },
    FlagDef {
        flag: Flag::BuildDevel,
        long: "--devel",
        short: None,
        env: &[],
        description: "Build the development version",
    },
    FlagDef {
        flag: Flag::BuildUniversal,
        long: "--universal",
        short: None,
        env: &[],
        description: "Build a universal binary",
    },
    FlagDef {
        flag: Flag::Build32Bit,
        long: "--32-bit",
        short: None,
        env: &[],
        description: "Build 32-bit only",
    },
    FlagDef {
        flag: Flag::BuildBottle,
        long: "--build-bottle",
        short: None,
        env: &["HOMEBREW_BUILD_BOTTLE"],
        description: "Prepare the build for bottling",
    },
    FlagDef {
        flag: Flag::BuildFromSource,
        long: "--build-from-source",
        short: Some('s'),
        env: &["HOMEBREW_BUILD_FROM_SOURCE"],
        description: "Compile from source even if a bottle exists",
    },
    FlagDef {
        flag: Flag::ForceBottle,
        long: "--force-bottle",
        short: None,
        env: &[],
        description: "Install from a bottle even if it would not normally be used",
    },
];

/// The complete flag registry.
pub fn flag_registry() -> &'static [FlagDef] {
    &FLAG_REGISTRY
}

impl Flag {
    pub const COUNT: usize = Flag::ForceBottle as usize + 1;

    /// This flag's registry entry.
    pub fn def(self) -> &'static FlagDef {
        &FLAG_REGISTRY[self as usize]
    }
}
