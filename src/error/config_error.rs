use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while loading a `.properties` file.
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read the properties file '{}'. Perhaps this file does not exist? ({source})", path.display())]
    Io {
        /// The path that was opened.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
    /// A `\uXXXX` escape did not contain four hex digits naming a character.
    #[error("Malformed \\uXXXX escape '{escape}' on line {line}.")]
    MalformedEscape {
        /// The escape as written, without the leading backslash.
        escape: String,
        /// Line on which the entry starts.
        line:   usize,
    },
}
