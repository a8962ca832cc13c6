//! Describe command implementation

use miette::IntoDiagnostic;

use crate::cli::{DescribeArgs, OutputFormat};
use unitpath::settings::Settings;

pub fn run(settings: &Settings, args: DescribeArgs) -> miette::Result<()> {
    let artifact = super::factory(settings)?.build(&args.unit_root)?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&artifact).into_diagnostic()?,
        OutputFormat::Yaml => serde_yaml::to_string(&artifact).into_diagnostic()?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
