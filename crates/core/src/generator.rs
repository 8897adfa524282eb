//! Writes the rendered descriptor to disk without ever replacing an existing file.

use crate::error::{GeneratorError, Result};
use crate::render::render_descriptor;
use gwtgen_api::GenerationConfig;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub struct DescriptorGenerator {
    config: GenerationConfig,
}

impl DescriptorGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Renders and writes the descriptor, returning the created file's path.
    ///
    /// Fails with [`GeneratorError::DestinationExists`] if anything is already
    /// at the output path. The content is staged in a temporary file next to
    /// the destination and linked into place only if the destination is still
    /// free, so a failed run leaves no file behind.
    pub fn generate(&self) -> Result<PathBuf> {
        let target = self.config.output_path();
        if target.exists() {
            return Err(GeneratorError::DestinationExists(absolute(&target)));
        }

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| GeneratorError::write(&parent, e))?;

        let content = render_descriptor(&self.config);
        let mut staged =
            NamedTempFile::new_in(&parent).map_err(|e| GeneratorError::write(&parent, e))?;
        debug!("Staging descriptor in {}", staged.path().display());

        staged
            .write_all(content.as_bytes())
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| GeneratorError::write(&target, e))?;

        staged.persist_noclobber(&target).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                GeneratorError::DestinationExists(absolute(&target))
            } else {
                GeneratorError::write(&target, e.error)
            }
        })?;

        let written = absolute(&target);
        info!(
            "Wrote {} ({} modules, logging {})",
            written.display(),
            self.config.modules().len(),
            if self.config.logging_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        );
        Ok(written)
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
