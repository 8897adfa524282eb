use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trailing suffix every module descriptor resource carries.
pub const MODULE_DESCRIPTOR_SUFFIX: &str = ".gwt.xml";

/// A module descriptor resource, addressed by its classpath-relative path.
///
/// The path always uses `/` separators and ends with
/// [`MODULE_DESCRIPTOR_SUFFIX`]. Ordering is lexicographic on the path, so a
/// `BTreeSet<ModuleName>` iterates the same way on every run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalizes `raw` into a module name, or `None` if it is not a descriptor path.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.replace('\\', "/");
        let normalized = normalized.trim_start_matches('/');

        let file_name = normalized.rsplit('/').next().unwrap_or(normalized);
        let stem_len = file_name.len().checked_sub(MODULE_DESCRIPTOR_SUFFIX.len())?;
        if stem_len == 0 || !file_name.ends_with(MODULE_DESCRIPTOR_SUFFIX) {
            return None;
        }

        Some(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Logical module identifier, e.g. `org/mydomain/Printer.gwt.xml` -> `org.mydomain.Printer`.
    pub fn module_id(&self) -> String {
        let stem = &self.0[..self.0.len() - MODULE_DESCRIPTOR_SUFFIX.len()];
        stem.replace('/', ".")
    }

    /// The full resource path in dotted form, used for package-prefix matching.
    pub fn qualified_path(&self) -> String {
        self.0.replace('/', ".")
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ModuleName {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| {
            ApiError::InvalidArgument(format!(
                "'{}' is not a module descriptor (expected a *{} path)",
                value, MODULE_DESCRIPTOR_SUFFIX
            ))
        })
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}
