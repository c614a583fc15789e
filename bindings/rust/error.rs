use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while loading the grammar or parsing with it.
#[derive(Debug, Error)]
pub enum Error {
    /// The grammar accessor returned a null handle.
    #[error("Error loading {grammar} grammar")]
    NullHandle { grammar: &'static str },

    /// The grammar declares no node kinds.
    #[error("Error loading {grammar} grammar: no node kinds")]
    EmptyGrammar { grammar: &'static str },

    /// The grammar was generated for a table format this runtime cannot read.
    #[error("Error loading {grammar} grammar: ABI version {version} outside {min}..={max}")]
    IncompatibleVersion {
        grammar: &'static str,
        version: usize,
        min: usize,
        max: usize,
    },

    /// The runtime refused to install the language in a parser.
    #[error("parser rejected language: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser stopped without producing a tree.
    #[error("parser returned no tree")]
    ParseAborted,
}
