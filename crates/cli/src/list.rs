use crate::OutputFormat;
use gwtgen_api::ModuleName;
use std::collections::BTreeSet;

pub fn run(
    modules: &BTreeSet<ModuleName>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => {
            for module in modules {
                println!("{}", module);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(modules)?);
        }
    }
    Ok(())
}
