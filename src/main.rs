use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use kegargv::args::{flag_registry, Argv, EnvSnapshot, Flag, SpecVariant, VALUE_KEYS};
use kegargv::config::Config;
use kegargv::formulary::TableFormulary;
use kegargv::keg::{KegLayout, KegResolver};
use kegargv::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "kegargv", version, about = "Inspect package-manager argv and resolve installed kegs")]
struct Cli {
    /// Config file (default: ~/.config/kegargv/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show options, named targets and casks
    Named {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show every flag predicate and `--key=value` value
    Flags {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Resolve named targets to installed kegs
    Kegs {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Load formulae for named targets
    Formulae {
        /// Load plain names from their rack; no spec unless --HEAD/--devel
        #[arg(long)]
        resolved: bool,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Command {
    fn tokens(&self) -> &[String] {
        match self {
            Command::Named { args }
            | Command::Flags { args }
            | Command::Kegs { args }
            | Command::Formulae { args, .. } => args,
        }
    }
}

#[derive(Serialize)]
struct NamedReport<'a> {
    options: &'a [String],
    flags_only: Vec<&'a str>,
    named: &'a [String],
    targets: Vec<&'a str>,
    casks: Vec<&'a str>,
}

#[derive(Serialize)]
struct FlagState {
    enabled: bool,
    description: &'static str,
}

#[derive(Serialize)]
struct FlagsReport<'a> {
    flags: BTreeMap<&'static str, FlagState>,
    values: BTreeMap<&'static str, Option<&'a str>>,
    build_stable: bool,
    spec: SpecVariant,
}

#[derive(Serialize)]
struct KegReport<'a> {
    name: &'a str,
    version: &'a str,
    path: &'a std::path::Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = EnvSnapshot::from_process();
    let argv = Argv::new(cli.command.tokens().to_vec(), env.clone());

    init_tracing(argv.is(Flag::Debug));

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?
    .with_env_overrides(&env);
    config.validate()?;

    let output = match &cli.command {
        Command::Named { .. } => serde_json::to_string_pretty(&NamedReport {
            options: argv.options(),
            flags_only: argv.flags_only(),
            named: argv.named(),
            targets: argv.downcased_unique_named(),
            casks: argv.casks(),
        })?,
        Command::Flags { .. } => serde_json::to_string_pretty(&FlagsReport {
            flags: flag_registry()
                .iter()
                .map(|def| {
                    let state = FlagState {
                        enabled: argv.is(def.flag),
                        description: def.description,
                    };
                    (def.long, state)
                })
                .collect(),
            values: VALUE_KEYS.iter().map(|k| (*k, argv.value(k))).collect(),
            build_stable: argv.build_stable(),
            spec: argv.build_spec(SpecVariant::Stable),
        })?,
        Command::Kegs { .. } => {
            let formulary = TableFormulary::from_config(&config);
            let resolver = KegResolver::new(KegLayout::from(&config.layout), &formulary);
            let kegs = argv.kegs(&resolver)?;
            let report: Vec<_> = kegs
                .iter()
                .map(|k| KegReport {
                    name: k.name(),
                    version: k.version(),
                    path: k.path(),
                })
                .collect();
            serde_json::to_string_pretty(&report)?
        }
        Command::Formulae { resolved, .. } => {
            let formulary = TableFormulary::from_config(&config);
            let formulae = if *resolved {
                argv.resolved_formulae(&formulary, &config.layout.cellar())?
            } else {
                argv.formulae(&formulary)?
            };
            serde_json::to_string_pretty(&formulae)?
        }
    };

    println!("{}", output);
    Ok(())
}
