mod generate;
mod list;

use clap::{ArgAction, Parser, ValueEnum};
use gwtgen_api::{GeneratorDefaults, PackageFilter};
use gwtgen_core::{Classpath, ModuleSearcher};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "gwtgen",
    version,
    about = "Generates an aggregate GWT module descriptor from the classpath",
    long_about = "Scans the classpath for *.gwt.xml module descriptors, filters them by package \
                  prefix, and writes one descriptor that inherits every module found, together \
                  with the stylesheet, entry point and logging properties of the application. \
                  An existing output file is never overwritten."
)]
pub struct Cli {
    /// Package prefixes to leave out [default: com.google,elemental,java.util,java.lang]
    #[arg(long = "excludePackages", value_name = "PREFIX", value_delimiter = ',')]
    pub exclude_packages: Option<Vec<String>>,

    /// Only keep modules under these package prefixes
    #[arg(long = "includePackages", value_name = "PREFIX", value_delimiter = ',')]
    pub include_packages: Vec<String>,

    /// Classpath roots to scan: directories, jars, file:// URLs or dir/* (defaults to $CLASSPATH)
    #[arg(long = "classpath", value_name = "ROOT", value_delimiter = ',')]
    pub classpath: Vec<String>,

    /// Directory the descriptor path is resolved against [default: .]
    #[arg(long = "generationRoot", value_name = "DIR")]
    pub generation_root: Option<PathBuf>,

    /// Descriptor path relative to the generation root [default: org/eclipse/che/ide/IDE.gwt.xml]
    #[arg(long = "gwtFileName", value_name = "PATH")]
    pub gwt_file_name: Option<String>,

    /// Entry point class [default: org.eclipse.che.ide.client.IDE]
    #[arg(long = "entryPoint", value_name = "CLASS")]
    pub entry_point: Option<String>,

    /// Stylesheet referenced by the descriptor [default: IDE.css]
    #[arg(long = "styleSheet", value_name = "FILE")]
    pub style_sheet: Option<String>,

    /// Enable the remote, development mode and console logging handlers
    #[arg(
        long = "loggingEnabled",
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub logging_enabled: bool,

    /// Print the discovered modules instead of writing a descriptor
    #[arg(long)]
    pub list: bool,

    /// Output format for --list
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write daily rolling log files to this directory
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Package filter with the default excludes applied when none were given.
    pub fn package_filter(&self, defaults: &GeneratorDefaults) -> PackageFilter {
        let excludes = self
            .exclude_packages
            .as_ref()
            .unwrap_or(&defaults.excluded_packages);
        PackageFilter::new(&self.include_packages, excludes)
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = gwtgen_core::logging::init_logging("gwtgen", cli.log_dir.as_deref())?;

    let defaults = GeneratorDefaults::default();
    let filter = cli.package_filter(&defaults);

    info!("Searching for GWT modules");
    let classpath = Classpath::resolve(&cli.classpath)?;
    let report = ModuleSearcher::new(filter, classpath)
        .with_default_listers()
        .search()?;
    info!("Found {} gwt modules", report.modules.len());

    if cli.list {
        list::run(&report.modules, cli.format)
    } else {
        generate::run(&cli, &defaults, report.into_modules())
    }
}
