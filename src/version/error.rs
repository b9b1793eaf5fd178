use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Malformed version '{version}': {source}")]
    Malformed {
        version: String,
        #[source]
        source: semver::Error,
    },
}
