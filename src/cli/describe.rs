use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Arguments for the describe command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Describe a unit:\n    unitpath describe ./apps/echo\n\n\
                  Describe a unit as YAML:\n    unitpath describe ./apps/echo --format yaml")]
pub struct DescribeArgs {
    /// Unit root directory (contains META-INF/unit-artifact/unit-artifact.json)
    pub unit_root: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}
