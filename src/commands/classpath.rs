//! Classpath command implementation

use crate::cli::ClasspathArgs;
use unitpath::settings::Settings;

pub fn run(settings: &Settings, args: ClasspathArgs) -> miette::Result<()> {
    let artifact = super::factory(settings)?.build(&args.unit_root)?;
    let model = artifact.class_loader_model();

    if args.urls {
        for url in model.urls() {
            println!("{url}");
        }
    } else {
        for path in model.classpath() {
            println!("{}", path.display());
        }
    }
    Ok(())
}
