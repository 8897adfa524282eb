//! Resource listers.
//!
//! A lister knows how to enumerate the resources inside one kind of classpath
//! root. Resource names are relative to the root and always `/` separated.

use super::{ClasspathEntry, EntryKind};
use crate::error::BoxError;
use std::fs::File;
use std::path::{Component, Path};
use walkdir::WalkDir;
use zip::ZipArchive;

pub trait ResourceLister: Send + Sync {
    /// Check if this lister can read the root
    fn can_list(&self, entry: &ClasspathEntry) -> bool;

    /// All resource names under the root
    fn list(&self, root: &Path) -> Result<Vec<String>, BoxError>;

    /// Lister name (for logging/debugging)
    fn name(&self) -> &str;
}

/// Walks a directory root recursively.
pub struct DirectoryLister;

impl ResourceLister for DirectoryLister {
    fn can_list(&self, entry: &ClasspathEntry) -> bool {
        entry.kind == EntryKind::Directory
    }

    fn list(&self, root: &Path) -> Result<Vec<String>, BoxError> {
        let mut resources = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(root)?;
            resources.push(to_resource_name(relative));
        }
        Ok(resources)
    }

    fn name(&self) -> &str {
        "Directory Lister"
    }
}

/// Reads the entry table of a jar or zip archive.
pub struct ArchiveLister;

impl ResourceLister for ArchiveLister {
    fn can_list(&self, entry: &ClasspathEntry) -> bool {
        entry.kind == EntryKind::Archive
    }

    fn list(&self, root: &Path) -> Result<Vec<String>, BoxError> {
        let file = File::open(root)?;
        let archive = ZipArchive::new(file)?;

        Ok(archive
            .file_names()
            .filter(|name| !name.ends_with('/'))
            .map(String::from)
            .collect())
    }

    fn name(&self) -> &str {
        "Archive Lister"
    }
}

fn to_resource_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
