//! Classpath model.
//!
//! A classpath is an ordered list of roots, each either a directory tree or a
//! jar/zip archive. Roots can be written as filesystem paths, `file://` URLs or
//! `dir/*` wildcards (every jar directly inside `dir`). Roots that do not exist
//! are skipped, not reported as errors.

mod lister;

pub use lister::{ArchiveLister, DirectoryLister, ResourceLister};

use crate::error::{GeneratorError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

/// Environment variable consulted when no explicit roots are given.
pub const CLASSPATH_ENV: &str = "CLASSPATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Archive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ClasspathEntry {
    /// Classifies an existing path. Returns `None` for missing paths and for
    /// files that are not archives.
    pub fn classify(path: &Path) -> Option<Self> {
        if path.is_dir() {
            return Some(Self {
                path: path.to_path_buf(),
                kind: EntryKind::Directory,
            });
        }
        if path.is_file() && is_archive(path) {
            return Some(Self {
                path: path.to_path_buf(),
                kind: EntryKind::Archive,
            });
        }
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classpath {
    entries: Vec<ClasspathEntry>,
    skipped: Vec<PathBuf>,
}

impl Classpath {
    /// Resolves explicit roots, falling back to [`Classpath::from_env`] when
    /// `locations` is empty.
    pub fn resolve<S: AsRef<str>>(locations: &[S]) -> Result<Self> {
        if locations.is_empty() {
            Self::from_env()
        } else {
            Self::from_locations(locations)
        }
    }

    pub fn from_locations<I, S>(locations: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classpath = Self::default();
        for location in locations {
            classpath.push_location(location.as_ref())?;
        }
        Ok(classpath)
    }

    /// The process classpath from `CLASSPATH`, or the current directory when
    /// the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let mut roots: Vec<PathBuf> = std::env::var_os(CLASSPATH_ENV)
            .map(|value| {
                std::env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        if roots.is_empty() {
            debug!("{} is not set, scanning the current directory", CLASSPATH_ENV);
            roots.push(PathBuf::from("."));
        }

        let mut classpath = Self::default();
        for root in roots {
            classpath.push_path(root)?;
        }
        Ok(classpath)
    }

    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    /// Roots that were named but could not be scanned (missing, or not an archive).
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_location(&mut self, location: &str) -> Result<()> {
        let location = location.trim();
        if location.is_empty() {
            return Ok(());
        }
        let path = location_to_path(location)?;
        self.push_path(path)
    }

    fn push_path(&mut self, path: PathBuf) -> Result<()> {
        if path.file_name() == Some(OsStr::new("*")) {
            return self.push_wildcard(&path);
        }

        match ClasspathEntry::classify(&path) {
            Some(entry) => {
                if !self.entries.contains(&entry) {
                    self.entries.push(entry);
                }
            }
            None if !path.exists() => {
                warn!("Skipping missing classpath root: {}", path.display());
                self.skipped.push(path);
            }
            None => {
                debug!("Skipping non-archive classpath file: {}", path.display());
                self.skipped.push(path);
            }
        }
        Ok(())
    }

    fn push_wildcard(&mut self, pattern: &Path) -> Result<()> {
        let dir = match pattern.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !dir.is_dir() {
            warn!("Skipping missing classpath directory: {}", dir.display());
            self.skipped.push(pattern.to_path_buf());
            return Ok(());
        }

        let read = std::fs::read_dir(&dir).map_err(|e| GeneratorError::scan(&dir, e))?;
        let mut jars: Vec<PathBuf> = read
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_jar(p))
            .collect();
        jars.sort();

        debug!("Expanded {} to {} jar(s)", pattern.display(), jars.len());
        for jar in jars {
            self.push_path(jar)?;
        }
        Ok(())
    }
}

fn location_to_path(location: &str) -> Result<PathBuf> {
    if !location.contains("://") && !location.starts_with("file:") {
        return Ok(PathBuf::from(location));
    }

    let url = Url::parse(location).map_err(|e| GeneratorError::scan(location, e))?;
    if url.scheme() != "file" {
        return Err(GeneratorError::scan(
            location,
            format!("unsupported URL scheme '{}'", url.scheme()),
        ));
    }
    url.to_file_path()
        .map_err(|_| GeneratorError::scan(location, "URL does not name a local file"))
}

fn extension_is(path: &Path, candidates: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| candidates.iter().any(|c| e.eq_ignore_ascii_case(c)))
        .unwrap_or(false)
}

fn is_jar(path: &Path) -> bool {
    extension_is(path, &["jar"])
}

fn is_archive(path: &Path) -> bool {
    extension_is(path, &["jar", "zip"])
}
