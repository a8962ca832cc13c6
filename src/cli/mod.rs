//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - describe: Describe command arguments
//! - classpath: Classpath command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use unitpath::descriptor::RuntimeVersion;

pub mod classpath;
pub mod describe;

pub use classpath::ClasspathArgs;
pub use describe::{DescribeArgs, OutputFormat};

/// unitpath - classpath and isolation assembler for deployable units
#[derive(Parser, Debug)]
#[command(
    name = "unitpath",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Classpath and isolation assembler for deployable units",
    long_about = "unitpath reads a unit's descriptor, resolves its dependencies against a local \
                  repository and computes the unit's classpath, isolated plugin dependencies \
                  and exported packages and resources.",
    after_help = "EXAMPLES:\n  \
                  unitpath describe ./apps/echo                   # Full artifact descriptor as JSON\n  \
                  unitpath describe ./apps/echo --format yaml     # ... as YAML\n  \
                  unitpath classpath ./apps/echo                  # Classpath, one entry per line\n  \
                  unitpath --repository ./repo classpath ./apps/echo"
)]
pub struct Cli {
    /// Repository root (overrides UNITPATH_REPOSITORY and the config file)
    #[arg(long, short = 'r', global = true)]
    pub repository: Option<PathBuf>,

    /// Version of the running runtime; units requiring a newer one are rejected
    #[arg(long, global = true)]
    pub runtime_version: Option<RuntimeVersion>,

    /// YAML settings file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a unit and print its artifact descriptor
    Describe(DescribeArgs),

    /// Build a unit and print its classpath
    Classpath(ClasspathArgs),
}
