//! Module descriptor discovery.
//!
//! The searcher walks every classpath root with the first lister that accepts
//! it, keeps resources ending in the module descriptor suffix, and applies the
//! package filter:
//! 1. Roots are resolved into a [`Classpath`] (missing roots are skipped)
//! 2. Each root is listed by a matching [`ResourceLister`]
//! 3. Descriptor names surviving the [`PackageFilter`] are collected into a set

use crate::classpath::{ArchiveLister, Classpath, DirectoryLister, ResourceLister};
use crate::error::{GeneratorError, Result};
use gwtgen_api::{ModuleName, PackageFilter};
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info};

/// Finds module descriptors on a classpath.
pub struct ModuleSearcher {
    filter: PackageFilter,
    classpath: Classpath,
    listers: Vec<Box<dyn ResourceLister>>,
}

impl ModuleSearcher {
    /// Creates a searcher without listers; see [`ModuleSearcher::with_default_listers`].
    pub fn new(filter: PackageFilter, classpath: Classpath) -> Self {
        Self {
            filter,
            classpath,
            listers: Vec::new(),
        }
    }

    /// Add a lister
    pub fn add_lister(mut self, lister: Box<dyn ResourceLister>) -> Self {
        self.listers.push(lister);
        self
    }

    /// Registers the directory and archive listers.
    pub fn with_default_listers(self) -> Self {
        self.add_lister(Box::new(DirectoryLister))
            .add_lister(Box::new(ArchiveLister))
    }

    pub fn search(&self) -> Result<SearchReport> {
        let start = std::time::Instant::now();
        let mut report = SearchReport {
            skipped_roots: self.classpath.skipped().len(),
            ..SearchReport::default()
        };

        for entry in self.classpath.entries() {
            let Some(lister) = self.listers.iter().find(|l| l.can_list(entry)) else {
                debug!("No lister for {}", entry.path.display());
                report.skipped_roots += 1;
                continue;
            };

            debug!("Scanning {} with {}", entry.path.display(), lister.name());
            let resources = lister
                .list(&entry.path)
                .map_err(|e| GeneratorError::scan(&entry.path, e))?;
            report.scanned_roots += 1;
            report.scanned_resources += resources.len();

            for resource in resources {
                let Some(module) = ModuleName::parse(&resource) else {
                    continue;
                };
                if self.filter.matches(module.as_str()) {
                    report.modules.insert(module);
                } else {
                    report.filtered_out += 1;
                }
            }
        }

        report.duration = start.elapsed();
        info!(
            "Module scan complete: {} roots, {} resources, {} modules ({} filtered out) in {:?}",
            report.scanned_roots,
            report.scanned_resources,
            report.modules.len(),
            report.filtered_out,
            report.duration
        );

        Ok(report)
    }
}

/// Result of a module search
#[derive(Debug, Default, Clone)]
pub struct SearchReport {
    /// Discovered module descriptors, in lexicographic order
    pub modules: BTreeSet<ModuleName>,
    /// Number of roots actually listed
    pub scanned_roots: usize,
    /// Number of roots that were missing or had no lister
    pub skipped_roots: usize,
    /// Number of resources seen across all roots
    pub scanned_resources: usize,
    /// Number of descriptor occurrences rejected by the package filter
    pub filtered_out: usize,
    pub duration: Duration,
}

impl SearchReport {
    pub fn into_modules(self) -> BTreeSet<ModuleName> {
        self.modules
    }
}

/// Discovers every module descriptor on `roots` (or the process classpath when
/// `roots` is empty) that passes `filter`.
pub fn discover<S: AsRef<str>>(filter: PackageFilter, roots: &[S]) -> Result<BTreeSet<ModuleName>> {
    let classpath = Classpath::resolve(roots)?;
    ModuleSearcher::new(filter, classpath)
        .with_default_listers()
        .search()
        .map(SearchReport::into_modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<module/>").unwrap();
    }

    fn searcher_for(root: &Path, filter: PackageFilter) -> ModuleSearcher {
        let classpath = Classpath::from_locations([root.to_string_lossy()]).unwrap();
        ModuleSearcher::new(filter, classpath).with_default_listers()
    }

    #[test]
    fn test_search_keeps_only_descriptors() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "org/mydomain/Printer.gwt.xml");
        touch(temp.path(), "org/mydomain/Printer.java");
        touch(temp.path(), "org/mydomain/public/Printer.css");

        let report = searcher_for(temp.path(), PackageFilter::accept_all())
            .search()
            .unwrap();

        let names: Vec<_> = report.modules.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, vec!["org/mydomain/Printer.gwt.xml"]);
        assert_eq!(report.scanned_roots, 1);
        assert_eq!(report.scanned_resources, 3);
        assert_eq!(report.filtered_out, 0);
    }

    #[test]
    fn test_search_counts_filtered_descriptors() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "elemental/Json.gwt.xml");
        touch(temp.path(), "org/mydomain/Printer.gwt.xml");

        let filter = PackageFilter::new(Vec::<String>::new(), ["elemental"]);
        let report = searcher_for(temp.path(), filter).search().unwrap();

        assert_eq!(report.modules.len(), 1);
        assert_eq!(report.filtered_out, 1);
    }

    #[test]
    fn test_search_without_listers_skips_roots() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "org/mydomain/Printer.gwt.xml");

        let classpath = Classpath::from_locations([temp.path().to_string_lossy()]).unwrap();
        let report = ModuleSearcher::new(PackageFilter::accept_all(), classpath)
            .search()
            .unwrap();

        assert!(report.modules.is_empty());
        assert_eq!(report.skipped_roots, 1);
    }

    #[test]
    fn test_corrupt_archive_surfaces_scan_failure() {
        let temp = tempfile::tempdir().unwrap();
        let jar = temp.path().join("broken.jar");
        fs::write(&jar, b"garbage").unwrap();

        let err = discover(PackageFilter::accept_all(), &[jar.to_string_lossy()]).unwrap_err();
        match err {
            GeneratorError::ScanFailure { root, .. } => assert_eq!(root, jar),
            other => panic!("Expected ScanFailure, got {other:?}"),
        }
    }
}
