use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pending entry could not be parsed as a number at commit time.
    ///
    /// The entry editing operations never produce such text, so seeing this
    /// means the buffer was corrupted by some other path.
    #[error("Cannot parse entry '{text}' as a number: {source}")]
    Parse {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
