//! Command-line interface implementation for sprout.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for sprout.
#[derive(Parser, Debug)]
#[command(version, about = "sprout: app artifact scaffolding generator", long_about = None)]
pub struct Args {
    /// Artifact type to generate (component, directive, page, pipe, provider, tabs)
    #[arg(value_name = "TYPE", required_unless_present = "list")]
    pub artifact_type: Option<String>,

    /// Artifact name; tabs requests take extra names, one per tab page
    #[arg(value_name = "NAME", num_args = 1.., required_unless_present = "list")]
    pub names: Vec<String>,

    /// Module-declaration file that should register the artifact.
    /// When omitted for a non-page type, candidates are discovered in the
    /// project and a single match is used directly.
    #[arg(short, long, value_name = "PATH")]
    pub module: Option<PathBuf>,

    /// Also generate the test spec file
    #[arg(long)]
    pub spec: bool,

    /// Skip the module template and the module registration step
    #[arg(long)]
    pub skip_module: bool,

    /// List the available generator types
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
