use super::module::ModuleName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Well-known values used when the caller does not provide one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorDefaults {
    pub generation_root: PathBuf,
    pub gwt_file_name: String,
    pub entry_point: String,
    pub stylesheet: String,
    pub excluded_packages: Vec<String>,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            generation_root: PathBuf::from("."),
            gwt_file_name: "org/eclipse/che/ide/IDE.gwt.xml".to_string(),
            entry_point: "org.eclipse.che.ide.client.IDE".to_string(),
            stylesheet: "IDE.css".to_string(),
            excluded_packages: ["com.google", "elemental", "java.util", "java.lang"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Everything the descriptor renderer needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    modules: BTreeSet<ModuleName>,
    generation_root: PathBuf,
    gwt_file_name: String,
    entry_point: String,
    stylesheet: String,
    logging_enabled: bool,
}

impl GenerationConfig {
    /// Creates a config for `modules` under `generation_root`, with the remaining
    /// values taken from [`GeneratorDefaults`].
    pub fn new(modules: BTreeSet<ModuleName>, generation_root: impl Into<PathBuf>) -> Self {
        let defaults = GeneratorDefaults::default();
        Self {
            modules,
            generation_root: generation_root.into(),
            gwt_file_name: defaults.gwt_file_name,
            entry_point: defaults.entry_point,
            stylesheet: defaults.stylesheet,
            logging_enabled: false,
        }
    }

    pub fn with_gwt_file_name(mut self, gwt_file_name: impl Into<String>) -> Self {
        self.gwt_file_name = gwt_file_name.into();
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    pub fn modules(&self) -> &BTreeSet<ModuleName> {
        &self.modules
    }

    pub fn generation_root(&self) -> &Path {
        &self.generation_root
    }

    pub fn gwt_file_name(&self) -> &str {
        &self.gwt_file_name
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    pub fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    /// Destination of the generated descriptor.
    pub fn output_path(&self) -> PathBuf {
        self.generation_root.join(&self.gwt_file_name)
    }
}
