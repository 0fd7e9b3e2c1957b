//! Error kinds raised while locating and reformatting keymap bindings

use std::path::{Path, PathBuf};

/// Number of characters of offending input kept in error messages
pub const EXCERPT_LEN: usize = 60;

/// Errors that can occur while reformatting a keymap file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The named block opener (e.g. `keymap {`) is absent
    BlockNotFound { name: String },
    /// Brace counting never returned to zero
    UnterminatedBlock { name: String, offset: usize },
    /// A binding list did not split into the expected number of tokens
    WrongTokenCount {
        found: usize,
        expected: usize,
        excerpt: String,
    },
    /// A layout table entry points past the end of the token list
    KeyIndexOutOfRange { index: usize, len: usize },
    /// Formatting the binding list at `index` (0-based, source order) failed
    Layer {
        index: usize,
        source: Box<FormatError>,
    },
    /// No paths were given and the default keymap does not exist
    MissingDefaultFile { path: PathBuf },
    /// Reading or writing a keymap file failed
    Io { path: PathBuf, message: String },
}

impl FormatError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Build a token count error, keeping a short single-line view of the input
    pub fn wrong_token_count(found: usize, expected: usize, raw: &str) -> Self {
        Self::WrongTokenCount {
            found,
            expected,
            excerpt: excerpt(raw),
        }
    }
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlockNotFound { name } => {
                write!(f, "could not find `{} {{` block in file", name)
            }
            Self::UnterminatedBlock { name, offset } => write!(
                f,
                "could not find end of `{}` block opened at byte {}",
                name, offset
            ),
            Self::WrongTokenCount {
                found,
                expected,
                excerpt,
            } => write!(
                f,
                "layer with bindings `{}` has {} keys, expected {}",
                excerpt, found, expected
            ),
            Self::KeyIndexOutOfRange { index, len } => write!(
                f,
                "layout error: key index {} is out of range for {} bindings",
                index, len
            ),
            Self::MissingDefaultFile { path } => write!(
                f,
                "no keymap file provided and {} does not exist",
                path.display()
            ),
            Self::Layer { index, source } => write!(f, "binding list {}: {}", index, source),
            Self::Io { path, message } => write!(f, "{}: {}", path.display(), message),
        }
    }
}

impl std::error::Error for FormatError {}

/// Collapse whitespace runs and cut the text down to `EXCERPT_LEN` characters
fn excerpt(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= EXCERPT_LEN {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(EXCERPT_LEN).collect();
    cut.push_str("...");
    cut
}
