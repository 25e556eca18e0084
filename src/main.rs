//! h2m CLI
//!
//! Command-line interface for translating a C declaration manifest into a
//! Fortran `BIND(C)` module.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use h2m::config::{CliOverrides, TranslatorConfig};
use h2m::manifest;
use h2m::translate::translate_program;

#[derive(ClapParser)]
#[command(name = "h2m")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate C variable declarations into Fortran BIND(C) interop declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a declaration manifest into a Fortran module
    Translate {
        /// Input declaration manifest (.json or .toml)
        input: PathBuf,

        /// Output Fortran source path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the generated Fortran MODULE (defaults to the input stem)
        #[arg(long)]
        module_name: Option<String>,

        /// Path to a TranslatorConfig TOML file; CLI flags override its settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write a JSON summary (emitted/commented counts, diagnostics) alongside the module
        #[arg(long)]
        summary_json: Option<PathBuf>,

        /// Suppress all diagnostics
        #[arg(long)]
        silent: bool,

        /// Suppress warnings, keep errors
        #[arg(long)]
        quiet: bool,

        /// Re-bind renamed leading-underscore identifiers to their original C name
        #[arg(long)]
        autobind: bool,

        /// Reverse array dimension order (C row-major -> Fortran column-major); on by default
        #[arg(long, conflicts_with = "no_array_transpose")]
        array_transpose: bool,

        /// Keep array dimension order as declared in C, undoing the default transpose
        #[arg(long)]
        no_array_transpose: bool,

        /// Comment out declarations whose type formatter reports a problem
        #[arg(long)]
        detect_invalid: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            input,
            output,
            module_name,
            config,
            summary_json,
            silent,
            quiet,
            autobind,
            array_transpose,
            no_array_transpose,
            detect_invalid,
        } => {
            let array_transpose = if no_array_transpose {
                Some(false)
            } else if array_transpose {
                Some(true)
            } else {
                None
            };
            let overrides = CliOverrides { silent, quiet, autobind, array_transpose, detect_invalid };
            run_translate(&input, output.as_deref(), module_name, config.as_deref(), summary_json.as_deref(), overrides);
        }
        Commands::Completions { shell } => {
            run_completions(shell);
        }
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "h2m", &mut io::stdout());
}

fn run_translate(
    input: &Path,
    output: Option<&Path>,
    module_name: Option<String>,
    config_path: Option<&Path>,
    summary_json: Option<&Path>,
    overrides: CliOverrides,
) {
    let base_config = match config_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => match TranslatorConfig::from_toml(&text) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing translator config: {e}");
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading translator config {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => TranslatorConfig::default(),
    };
    let config = base_config.merge_cli_overrides(overrides);

    let program = match manifest::load(input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let module_name = module_name.unwrap_or_else(|| {
        input.file_stem().and_then(|s| s.to_str()).unwrap_or("h2m_bindings").to_string()
    });

    let result = translate_program(&program, &module_name, &config);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &result.fortran) {
                eprintln!("Error writing {}: {e}", path.display());
                process::exit(1);
            }
            println!("Translated {} -> {}", input.display(), path.display());
        }
        None => print!("{}", result.fortran),
    }

    if let Some(path) = summary_json {
        match serde_json::to_string_pretty(&result.summary()) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    eprintln!("Error writing {}: {e}", path.display());
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error serializing summary: {e}");
                process::exit(1);
            }
        }
    }

    if result.error_count() > 0 {
        process::exit(1);
    }
}
