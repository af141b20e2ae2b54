//! Command-line interface for the AppSync request generator.
//!
//! # Usage
//!
//! ```bash
//! # Generate the request module of the first project in .graphqlconfig.yml
//! apireq generate
//!
//! # Fail when the generated module is stale (for CI)
//! apireq generate --check
//!
//! # Print the module instead of writing it
//! apireq --project admin generate --stdout
//!
//! # Show detected models and operations
//! apireq inspect
//! ```

pub mod error;
pub mod pipeline;

pub use error::{CliError, CliResult};

use apireq_codegen::{Classification, OperationKind};
use apireq_config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apireq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Project root that configured paths are relative to
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file, relative to the project root
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Project to use instead of the first declared one
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the typed request module
    #[command(alias = "gen")]
    Generate {
        /// Print the module instead of writing it
        #[arg(long, conflicts_with = "check")]
        stdout: bool,

        /// Check that the module on disk is up to date (don't modify)
        #[arg(long)]
        check: bool,
    },

    /// Print the models and operations detected in the schema
    Inspect,

    /// Print version information
    Version,
}

impl Cli {
    /// Default log filter for the verbosity flags.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "apireq=debug"
        } else if self.quiet {
            "apireq=warn"
        } else {
            "apireq=info"
        }
    }
}

pub fn run(cli: Cli) -> CliResult<i32> {
    match cli.command {
        Commands::Generate { stdout, check } => generate(&cli, stdout, check),
        Commands::Inspect => inspect(&cli, &mut io::stdout().lock()),
        Commands::Version => {
            println!("apireq {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
    }
}

fn generate(cli: &Cli, stdout: bool, check: bool) -> CliResult<i32> {
    let project = pipeline::load_project(&cli.root, &cli.config, cli.project.as_deref())?;
    let module = pipeline::generate_module(&cli.root, &project)?;
    let output = project.output_file(&cli.root);

    if stdout {
        print!("{module}");
        return Ok(0);
    }

    if check {
        if pipeline::is_up_to_date(&output, &module) {
            if !cli.quiet {
                println!("{} {}", "Up to date".green(), output.display());
            }
            return Ok(0);
        }
        eprintln!("{} {}", "Would regenerate".yellow(), output.display());
        return Ok(1);
    }

    pipeline::write_module(&output, &module)?;
    if !cli.quiet {
        println!("{} {}", "Generated".green(), output.display());
    }
    Ok(0)
}

/// Prints the models and operations detected in the project's schema.
pub fn inspect(cli: &Cli, out: &mut impl Write) -> CliResult<i32> {
    let project = pipeline::load_project(&cli.root, &cli.config, cli.project.as_deref())?;
    let schema = pipeline::load_schema(&cli.root, &project)?;
    let classification = pipeline::projector_for(&project)?.classify(&schema)?;

    write_classification(out, &project.name, &classification).map_err(CliError::Output)?;
    Ok(0)
}

fn write_classification(
    out: &mut impl Write,
    project: &str,
    classification: &Classification,
) -> io::Result<()> {
    writeln!(out, "{} {}", "Project".bold(), project)?;
    writeln!(out)?;

    writeln!(out, "{}", "Models".bold())?;
    for (model, ops) in &classification.models {
        let ops: Vec<_> = ops.iter().map(ToString::to_string).collect();
        let status = if classification.is_imported(model) {
            "".normal()
        } else {
            " (not imported)".dimmed()
        };
        writeln!(out, "  {} [{}]{}", model.green(), ops.join(", "), status)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "Operations".bold())?;
    for field in &classification.fields {
        let kind = match field.kind {
            Some(OperationKind::Query) => "query".blue(),
            Some(OperationKind::Mutation) => "mutation".magenta(),
            None => "unknown".dimmed(),
        };
        let args: Vec<_> = field
            .args
            .iter()
            .map(|arg| match &arg.default_value {
                Some(default) => format!("{}: {} = {}", arg.name, arg.ty, default),
                None => format!("{}: {}", arg.name, arg.ty),
            })
            .collect();
        writeln!(
            out,
            "  {} {}({}): {} -> {}",
            kind,
            field.name,
            args.join(", "),
            field.return_type,
            field.variables.as_deref().unwrap_or("-")
        )?;
    }

    out.flush()
}
