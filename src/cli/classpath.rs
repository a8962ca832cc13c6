use clap::Parser;
use std::path::PathBuf;

/// Arguments for the classpath command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the classpath of a unit:\n    unitpath classpath ./apps/echo\n\n\
                  Print it as file: URLs:\n    unitpath classpath ./apps/echo --urls")]
pub struct ClasspathArgs {
    /// Unit root directory (contains META-INF/unit-artifact/unit-artifact.json)
    pub unit_root: PathBuf,

    /// Print `file:` URLs instead of filesystem paths
    #[arg(long)]
    pub urls: bool,
}
