use thiserror::Error;

/// A counter source could not produce a snapshot.
///
/// Always local to one metric in one round: the caller logs it, skips that
/// metric's record and carries on with the next metric or round.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {0}")]
    Malformed(&'static str),
    #[error("{0} is not available on this platform")]
    Unsupported(&'static str),
}

/// Invalid run parameters. Fatal: reported before any sampling starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the positional shortcut needs both a sample count and a delay (e.g. `hoststat 5 2`)")]
    IncompleteShortcut,
    #[error("{requested} samples requested; at most {max} are supported")]
    TooManySamples { requested: usize, max: usize },
}
