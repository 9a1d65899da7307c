//! Integration tests for argv classification and predicates.

mod common;

use common::raw_args;
use kegargv::args::{classify, flag_registry, Argv, EnvSnapshot, Flag, SpecVariant};
use kegargv::config::FormulaDef;
use kegargv::formulary::{FormulaError, TableFormulary};
use std::path::{Path, PathBuf};

fn argv(args: &[&str]) -> Argv {
    classify(&raw_args(args), EnvSnapshot::new())
}

fn argv_with_env(args: &[&str], env: EnvSnapshot) -> Argv {
    classify(&raw_args(args), env)
}

// =============================================================================
// PARTITION TESTS
// =============================================================================

#[test]
fn options_and_named_partition_tokens() {
    let tokens = ["install", "-v", "Foo", "--force", "foo", "./Bar", "-", "bar"];
    let a = argv(&tokens);

    assert_eq!(a.options(), ["-v", "--force", "-"]);
    assert_eq!(a.named(), ["install", "Foo", "foo", "./Bar", "bar"]);
    assert_eq!(a.options().len() + a.named().len(), tokens.len());
    for token in a.options() {
        assert!(!a.named().contains(token));
    }
}

#[test]
fn flags_only_keeps_double_dashed() {
    let a = argv(&["-v", "--force", "--HEAD", "wget"]);
    assert_eq!(a.flags_only(), vec!["--force", "--HEAD"]);
}

#[test]
fn named_dedupes_case_insensitively() {
    let a = argv(&["Foo", "foo", "FOO"]);
    assert_eq!(a.downcased_unique_named(), vec!["foo"]);
    assert_eq!(a.named_args()[0].raw, "Foo");
}

#[test]
fn path_named_args_keep_case() {
    let a = argv(&["./Foo", "foo"]);
    assert_eq!(a.downcased_unique_named(), vec!["./Foo", "foo"]);

    let a = argv(&["https://example.com/Formula/Wget.rb", "Homebrew/Core/Wget"]);
    assert_eq!(
        a.downcased_unique_named(),
        vec!["https://example.com/Formula/Wget.rb", "Homebrew/Core/Wget"]
    );
}

#[test]
fn named_preserves_first_occurrence_order() {
    let a = argv(&["b", "A", "c", "a", "B"]);
    assert_eq!(a.downcased_unique_named(), vec!["b", "a", "c"]);
}

#[test]
fn empty_argv_has_no_views() {
    let a = argv(&[]);
    assert!(a.options().is_empty());
    assert!(a.named().is_empty());
    assert!(a.casks().is_empty());
}

// =============================================================================
// FLAG / SWITCH TESTS
// =============================================================================

#[test]
fn flag_matches_long_form() {
    let a = argv(&["--verbose"]);
    assert!(a.flag("--verbose"));
    assert!(a.is(Flag::Verbose));
    assert!(!a.flag("--debug"));
}

#[test]
fn flag_matches_bundled_switch() {
    let a = argv(&["-nv", "wget"]);
    assert!(a.flag("--verbose"));
    assert!(a.is(Flag::Verbose));
    assert!(a.is(Flag::DryRun));
    assert!(!a.is(Flag::Force));
}

#[test]
fn switches_in_separate_groups() {
    let a = argv(&["foo", "-ns", "-i", "--bar"]);
    assert!(a.switch('n'));
    assert!(a.switch('s'));
    assert!(a.switch('i'));
    assert!(!a.switch('b'));
    assert!(a.is(Flag::BuildFromSource));
    assert!(a.is(Flag::Interactive));
}

#[test]
fn exact_only_flags_ignore_switches() {
    // `d` as a switch turns on debug but nothing turns on developer mode
    let a = argv(&["-d"]);
    assert!(a.is(Flag::Debug));
    assert!(!a.is(Flag::DeveloperMode));
    assert!(argv(&["--homebrew-developer"]).is(Flag::DeveloperMode));
}

#[test]
fn env_var_turns_predicate_on() {
    let env = EnvSnapshot::new().with_var("HOMEBREW_VERBOSE", "1");
    assert!(argv_with_env(&[], env).is(Flag::Verbose));

    let env = EnvSnapshot::new().with_var("VERBOSE", "yes");
    assert!(argv_with_env(&[], env).is(Flag::Verbose));

    let env = EnvSnapshot::new()
        .with_var("HOMEBREW_DEBUG", "1")
        .with_var("HOMEBREW_SANDBOX", "1")
        .with_var("HOMEBREW_BUILD_BOTTLE", "1")
        .with_var("HOMEBREW_BUILD_FROM_SOURCE", "1")
        .with_var("HOMEBREW_DEVELOPER", "1");
    let a = argv_with_env(&["wget"], env);
    assert!(a.is(Flag::Debug));
    assert!(a.is(Flag::Sandbox));
    assert!(a.is(Flag::BuildBottle));
    assert!(a.is(Flag::BuildFromSource));
    assert!(a.is(Flag::DeveloperMode));
    assert!(!a.is(Flag::Force));
}

#[test]
fn empty_env_var_does_not_count() {
    let env = EnvSnapshot::new().with_var("HOMEBREW_VERBOSE", "");
    assert!(!argv_with_env(&[], env).is(Flag::Verbose));
}

#[test]
fn every_registry_long_form_turns_its_flag_on() {
    for def in flag_registry() {
        let a = argv(&[def.long]);
        assert!(a.is(def.flag), "{}", def.long);
    }
}

#[test]
fn nothing_is_on_by_default() {
    let a = argv(&["wget"]);
    for def in flag_registry() {
        assert!(!a.is(def.flag), "{}", def.long);
    }
    assert!(a.build_stable());
}

// =============================================================================
// VALUE TESTS
// =============================================================================

#[test]
fn value_extracts_key_value() {
    let a = argv(&["--json=v1", "--cc=clang", "--bottle-arch=haswell"]);
    assert_eq!(a.value("json"), Some("v1"));
    assert_eq!(a.value("cc"), Some("clang"));
    assert_eq!(a.bottle_arch(), Some("haswell"));
    assert_eq!(a.value("env"), None);
}

#[test]
fn value_uses_first_match() {
    let a = argv(&["--cc=gcc", "--cc=clang"]);
    assert_eq!(a.value("cc"), Some("gcc"));
}

#[test]
fn value_requires_content() {
    let a = argv(&["--json=", "--json"]);
    assert_eq!(a.value("json"), None);
    assert_eq!(argv(&["--json=", "--json=v1"]).value("json"), Some("v1"));
}

#[test]
fn value_after_returns_following_token() {
    let a = argv(&["--prefix", "/opt/x", "--tail"]);
    assert!(a.include("--prefix"));
    assert_eq!(a.value_after("--prefix"), Some("/opt/x"));
    assert_eq!(a.value_after("--tail"), None);
    assert_eq!(a.value_after("--missing"), None);
}

// =============================================================================
// SPEC TESTS
// =============================================================================

#[test]
fn build_spec_selection() {
    assert_eq!(argv(&["--HEAD"]).build_spec(SpecVariant::Stable), SpecVariant::Head);
    assert_eq!(argv(&["--devel"]).build_spec(SpecVariant::Stable), SpecVariant::Devel);
    assert_eq!(argv(&[]).build_spec(SpecVariant::Stable), SpecVariant::Stable);
}

#[test]
fn head_wins_over_devel() {
    let a = argv(&["--devel", "--HEAD"]);
    assert_eq!(a.build_spec(SpecVariant::Stable), SpecVariant::Head);
    assert!(!a.build_stable());
}

#[test]
fn spec_or_defaults_to_none() {
    assert_eq!(argv(&["wget"]).spec_or(None), None);
    assert_eq!(argv(&["--devel"]).spec_or(None), Some(SpecVariant::Devel));
}

// =============================================================================
// FORMULAE / CASK TESTS
// =============================================================================

fn formulary() -> TableFormulary {
    TableFormulary::new("/usr/local/Cellar")
        .with_formula(
            "wget",
            FormulaDef {
                version: "1.21".into(),
                devel: Some("1.22-rc1".into()),
                head: true,
            },
        )
        .with_formula("git", FormulaDef::stable("2.43.0"))
}

#[test]
fn casks_are_excluded_from_formulae() {
    let a = argv(&["wget", "Caskroom/cask/firefox", "git"]);
    assert_eq!(a.casks(), vec!["Caskroom/cask/firefox"]);

    let formulae = a.formulae(&formulary()).unwrap();
    let names: Vec<_> = formulae.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["wget", "git"]);
}

#[test]
fn formulae_follow_requested_spec() {
    let formulae = argv(&["WGET", "--devel"]).formulae(&formulary()).unwrap();
    assert_eq!(formulae[0].spec, SpecVariant::Devel);
    assert_eq!(
        formulae[0].prefix,
        PathBuf::from("/usr/local/Cellar/wget/1.22-rc1")
    );
}

#[test]
fn formulae_fail_on_unknown_name() {
    let err = argv(&["wget", "nope"]).formulae(&formulary()).unwrap_err();
    assert!(matches!(err, FormulaError::Unavailable { name } if name == "nope"));
}

#[test]
fn resolved_formulae_load_from_rack() {
    let formulae = argv(&["git", "homebrew/core/wget"])
        .resolved_formulae(&formulary(), Path::new("/usr/local/Cellar"))
        .unwrap();
    assert_eq!(formulae[0].name, "git");
    assert_eq!(formulae[0].spec, SpecVariant::Stable);
    assert_eq!(formulae[1].name, "wget");
}
