use crate::Cli;
use gwtgen_api::{GenerationConfig, GeneratorDefaults, ModuleName};
use gwtgen_core::DescriptorGenerator;
use std::collections::BTreeSet;
use tracing::info;

pub fn run(
    cli: &Cli,
    defaults: &GeneratorDefaults,
    modules: BTreeSet<ModuleName>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli, defaults, modules);
    info!("Generating {}", config.output_path().display());

    let written = DescriptorGenerator::new(config).generate()?;
    info!("Generated {}", written.display());
    Ok(())
}

fn build_config(
    cli: &Cli,
    defaults: &GeneratorDefaults,
    modules: BTreeSet<ModuleName>,
) -> GenerationConfig {
    let root = cli
        .generation_root
        .clone()
        .unwrap_or_else(|| defaults.generation_root.clone());

    GenerationConfig::new(modules, root)
        .with_gwt_file_name(
            cli.gwt_file_name
                .clone()
                .unwrap_or_else(|| defaults.gwt_file_name.clone()),
        )
        .with_entry_point(
            cli.entry_point
                .clone()
                .unwrap_or_else(|| defaults.entry_point.clone()),
        )
        .with_stylesheet(
            cli.style_sheet
                .clone()
                .unwrap_or_else(|| defaults.stylesheet.clone()),
        )
        .with_logging(cli.logging_enabled)
}
