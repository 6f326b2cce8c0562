use serde::Deserialize;
use std::fmt;

/// Separator between a reference and its revision suffix (`zlib/1.3#<rrev>`)
const REVISION_SEPARATOR: char = '#';

/// Package type reported by the graph resolver
///
/// Only the library variants are redistributed with the application;
/// everything the resolver reports that is not listed here maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageType {
    Application,
    SharedLibrary,
    StaticLibrary,
    HeaderLibrary,
    #[serde(alias = "build-scripts")]
    BuildTool,
    #[default]
    #[serde(other)]
    Other,
}

impl PackageType {
    /// Returns true for package types that end up linked into or shipped
    /// next to the final artifact.
    pub fn is_redistributable_library(self) -> bool {
        matches!(
            self,
            PackageType::SharedLibrary | PackageType::StaticLibrary | PackageType::HeaderLibrary
        )
    }
}

/// Context a node was resolved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildContext {
    /// Part of the runtime closure of the product
    #[default]
    Host,
    /// Only needed while building (code generators, build systems)
    Build,
}

/// License metadata of a node: resolvers emit either a single string or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    Single(String),
    Multiple(Vec<String>),
}

impl fmt::Display for LicenseField {
    /// A list renders as `["MIT", "Zlib"]`. The form is for reading only,
    /// it is not meant to be parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicenseField::Single(license) => f.write_str(license),
            LicenseField::Multiple(licenses) => write!(f, "{:?}", licenses),
        }
    }
}

/// One entry of the resolved dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyNode {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    license: Option<LicenseField>,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    package_type: PackageType,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    context: BuildContext,
}

impl DependencyNode {
    pub fn new(
        reference: impl Into<String>,
        homepage: Option<String>,
        license: Option<LicenseField>,
        package_type: PackageType,
        context: BuildContext,
    ) -> Self {
        Self {
            reference: reference.into(),
            homepage,
            license,
            package_type,
            context,
        }
    }

    /// The reference exactly as the resolver reported it
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The reference with any `#`-suffix removed.
    ///
    /// This is both the deduplication key and the displayed name.
    pub fn canonical_reference(&self) -> &str {
        canonical_reference(&self.reference)
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn license(&self) -> Option<&LicenseField> {
        self.license.as_ref()
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn context(&self) -> BuildContext {
        self.context
    }
}

/// Truncates a reference at the first `#`
pub fn canonical_reference(reference: &str) -> &str {
    match reference.split_once(REVISION_SEPARATOR) {
        Some((head, _)) => head,
        None => reference,
    }
}

/// Treats an explicit `null` the same as a missing field
fn deserialize_or_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
