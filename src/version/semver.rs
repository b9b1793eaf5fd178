use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::version::error::VersionError;

/// Parse a version string into a semver::Version, normalizing tag-style input.
///
/// Strips a leading `v`/`V`, drops leading zeros from numeric core
/// components and pads partial versions with zeros before handing the text
/// to the strict semver parser. Pre-release and build metadata are kept as
/// written.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "v1.2" -> Version(1, 2, 0)
/// - "2024.01.05" -> Version(2024, 1, 5)
/// - "1.2-rc.1" -> Version(1, 2, 0, pre: rc.1)
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    Version::parse(&normalize(version)).map_err(|source| VersionError::Malformed {
        version: version.to_string(),
        source,
    })
}

/// Like `parse_version`, without building an error on failure.
fn parse_version_opt(version: &str) -> Option<Version> {
    Version::parse(&normalize(version)).ok()
}

fn normalize(version: &str) -> String {
    let stripped = version.strip_prefix(['v', 'V']).unwrap_or(version);
    let (core, rest) = stripped.split_at(stripped.find(['-', '+']).unwrap_or(stripped.len()));

    let numbers: Option<Vec<u64>> = core
        .split('.')
        .map(|part| {
            if part.bytes().all(|b| b.is_ascii_digit()) {
                part.parse().ok()
            } else {
                None
            }
        })
        .collect();
    match numbers.as_deref() {
        Some([major]) => format!("{major}.0.0{rest}"),
        Some([major, minor]) => format!("{major}.{minor}.0{rest}"),
        Some([major, minor, patch]) => format!("{major}.{minor}.{patch}{rest}"),
        // Let the strict parser report what is wrong
        _ => stripped.to_string(),
    }
}

/// Semver precedence: major, minor, patch, then pre-release. Build metadata is ignored.
pub fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// Anything that carries the original text of a version.
pub trait VersionText {
    fn original(&self) -> &str;
}

impl VersionText for str {
    fn original(&self) -> &str {
        self
    }
}

impl VersionText for String {
    fn original(&self) -> &str {
        self
    }
}

impl<T: VersionText + ?Sized> VersionText for &T {
    fn original(&self) -> &str {
        (**self).original()
    }
}

/// A successfully parsed version that remembers the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    original: String,
    version: Version,
}

impl ParsedVersion {
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        Ok(Self {
            original: text.to_string(),
            version: parse_version(text)?,
        })
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Standard semver comparison, without any suffix tie-break.
    pub fn compare(&self, other: &ParsedVersion) -> Ordering {
        precedence(&self.version, &other.version)
    }
}

impl VersionText for ParsedVersion {
    fn original(&self) -> &str {
        &self.original
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Base version used by the orderer.
///
/// A base that fails to parse becomes `Unparseable`, which sorts before every
/// parsed base and is equal to any other unparseable base.
#[derive(Debug, Clone)]
pub enum BaseVersion {
    Unparseable,
    Parsed(Version),
}

impl BaseVersion {
    pub fn parse(base: &str) -> Self {
        match parse_version_opt(base) {
            Some(version) => BaseVersion::Parsed(version),
            None => BaseVersion::Unparseable,
        }
    }
}

impl PartialEq for BaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BaseVersion {}

impl PartialOrd for BaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BaseVersion::Unparseable, BaseVersion::Unparseable) => Ordering::Equal,
            (BaseVersion::Unparseable, BaseVersion::Parsed(_)) => Ordering::Less,
            (BaseVersion::Parsed(_), BaseVersion::Unparseable) => Ordering::Greater,
            (BaseVersion::Parsed(a), BaseVersion::Parsed(b)) => precedence(a, b),
        }
    }
}
