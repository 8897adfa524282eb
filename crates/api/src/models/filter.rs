use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Include/exclude package prefixes narrowing a classpath scan.
///
/// Prefixes and resource paths are compared in dotted form, so `org.eclipse`
/// and `org/eclipse` are the same prefix. Matching is a plain string prefix
/// test: `org.ecl` matches `org/eclipse/Foo.gwt.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFilter {
    includes: BTreeSet<String>,
    excludes: BTreeSet<String>,
}

impl PackageFilter {
    /// A filter that accepts every resource.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn new<I, E>(includes: I, excludes: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            includes: normalize_prefixes(includes),
            excludes: normalize_prefixes(excludes),
        }
    }

    pub fn includes(&self) -> &BTreeSet<String> {
        &self.includes
    }

    pub fn excludes(&self) -> &BTreeSet<String> {
        &self.excludes
    }

    pub fn is_accept_all(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Tests a resource path (either `/` or `.` separated) against the filter.
    pub fn matches(&self, resource_path: &str) -> bool {
        let dotted = to_dotted(resource_path);

        let included = self.includes.is_empty()
            || self.includes.iter().any(|p| dotted.starts_with(p.as_str()));
        let excluded = self.excludes.iter().any(|p| dotted.starts_with(p.as_str()));

        included && !excluded
    }
}

fn normalize_prefixes<T>(prefixes: T) -> BTreeSet<String>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    prefixes
        .into_iter()
        .map(|p| to_dotted(p.as_ref().trim()))
        .filter(|p| !p.is_empty())
        .collect()
}

fn to_dotted(path: &str) -> String {
    path.trim_start_matches(['/', '\\'])
        .replace(['/', '\\'], ".")
}
