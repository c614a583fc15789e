//! Rust bindings for the Tree-sitter grammar for Solidity.
//!
//! The compiled grammar is linked in through the `tree-sitter-solidity` crate;
//! this crate validates the handle it exports and wraps it in a
//! `tree_sitter::Language`, ready to be installed in a [`Parser`].
//!
//! ```ignore
//! let mut parser = solidity_grammar::parser()?;
//! let tree = parser.parse("contract C {}", None);
//! ```

use tree_sitter::{Language, Parser, Tree};
use tree_sitter_language::LanguageFn;

mod error;
pub mod kind;
mod source;

pub use error::{Error, Result};
pub use source::{SourceFile, SyntaxError, SyntaxErrorKind};

/// The raw accessor exported by the compiled grammar.
pub use tree_sitter_solidity::LANGUAGE;

/// A compiled grammar reachable through a nullary C accessor.
#[derive(Clone, Copy)]
pub struct Grammar {
    name: &'static str,
    language_fn: LanguageFn,
}

impl Grammar {
    pub const SOLIDITY: Grammar = Grammar::new("Solidity", LANGUAGE);

    pub const fn new(name: &'static str, language_fn: LanguageFn) -> Self {
        Self { name, language_fn }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Calls the accessor and wraps the handle it returns.
    ///
    /// Fails if the handle is null, was generated for an ABI this runtime
    /// cannot read, or declares no node kinds.
    pub fn load(&self) -> Result<Language> {
        let grammar = self.name;

        let accessor = self.language_fn.into_raw();
        // SAFETY: `LanguageFn` is only constructed around a grammar accessor,
        // which takes no arguments and has no preconditions.
        if unsafe { accessor() }.is_null() {
            return Err(Error::NullHandle { grammar });
        }

        let language = Language::from(self.language_fn);
        let version = language.abi_version();
        check_compatible(grammar, version, language.node_kind_count())?;

        log::debug!(
            "loaded {grammar} grammar (ABI {version}, {} node kinds, {} fields)",
            language.node_kind_count(),
            language.field_count()
        );
        Ok(language)
    }
}

fn check_compatible(grammar: &'static str, version: usize, node_kinds: usize) -> Result<()> {
    let (min, max) = (
        tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
        tree_sitter::LANGUAGE_VERSION,
    );
    if !(min..=max).contains(&version) {
        return Err(Error::IncompatibleVersion {
            grammar,
            version,
            min,
            max,
        });
    }
    if node_kinds == 0 {
        return Err(Error::EmptyGrammar { grammar });
    }
    Ok(())
}

impl std::fmt::Debug for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").field("name", &self.name).finish()
    }
}

/// Returns the Tree-sitter [`Language`] for Solidity.
///
/// # Panics
///
/// Panics if the linked grammar fails the checks in [`Grammar::load`]; use
/// [`try_language`] to handle that case.
pub fn language() -> Language {
    match Grammar::SOLIDITY.load() {
        Ok(language) => language,
        Err(e) => panic!("{e}"),
    }
}

/// Like [`language`], but checks the handle first.
pub fn try_language() -> Result<Language> {
    Grammar::SOLIDITY.load()
}

/// Returns a [`Parser`] with the Solidity language installed.
pub fn parser() -> Result<Parser> {
    let language = try_language()?;
    let mut parser = Parser::new();
    parser.set_language(&language)?;
    Ok(parser)
}

/// Parses `source` with a fresh parser.
///
/// The tree may contain ERROR nodes; see [`SourceFile::syntax_errors`].
pub fn parse(source: &str) -> Result<Tree> {
    let tree = parser()?
        .parse(source, None)
        .ok_or(Error::ParseAborted)?;
    log::debug!(
        "parsed {} bytes of Solidity (errors: {})",
        source.len(),
        tree.root_node().has_error()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn null_grammar() -> *const () {
        std::ptr::null()
    }

    #[test]
    fn can_load_grammar() {
        if let Err(e) = Grammar::SOLIDITY.load() {
            panic!("Error loading Solidity grammar: {e}");
        }
    }

    #[test]
    fn can_set_language() {
        let mut parser = Parser::new();
        parser
            .set_language(&language())
            .expect("Error loading Solidity grammar");
    }

    #[test]
    fn null_handle_is_reported() {
        // SAFETY: `null_grammar` takes no arguments and only returns null.
        let grammar = Grammar::new("Solidity", unsafe { LanguageFn::from_raw(null_grammar) });

        let err = grammar.load().expect_err("null handle must not load");
        assert!(matches!(err, Error::NullHandle { grammar: "Solidity" }));
        assert_eq!(err.to_string(), "Error loading Solidity grammar");
    }

    #[test]
    fn loaded_language_is_usable() {
        let language = try_language().expect("Error loading Solidity grammar");

        let version = language.abi_version();
        assert!(
            (tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION..=tree_sitter::LANGUAGE_VERSION)
                .contains(&version),
            "Solidity grammar ABI {version} is not readable by this tree-sitter runtime"
        );
        assert!(language.node_kind_count() > 0);
        assert_eq!(language, self::language());
    }

    #[test]
    fn incompatible_abi_is_rejected() {
        let max = tree_sitter::LANGUAGE_VERSION;
        let min = tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION;

        for version in [min - 1, max + 1] {
            let err = check_compatible("Solidity", version, 10)
                .expect_err("out-of-range ABI must not load");
            assert!(matches!(err, Error::IncompatibleVersion { version: v, .. } if v == version));
            assert_eq!(
                err.to_string(),
                format!("Error loading Solidity grammar: ABI version {version} outside {min}..={max}")
            );
        }
        assert!(check_compatible("Solidity", max, 10).is_ok());
        assert!(check_compatible("Solidity", min, 10).is_ok());
    }

    #[test]
    fn empty_grammar_is_rejected() {
        let err = check_compatible("Solidity", tree_sitter::LANGUAGE_VERSION, 0)
            .expect_err("grammar without node kinds must not load");

        assert!(matches!(err, Error::EmptyGrammar { grammar: "Solidity" }));
        assert_eq!(err.to_string(), "Error loading Solidity grammar: no node kinds");
    }

    #[test]
    fn parse_simple() {
        let mut parser = parser().expect("Failed to load grammar");

        let source = "pragma solidity ^0.8.0;\ncontract Empty {}\n";
        let tree = parser.parse(source, None).expect("Failed to parse");

        assert_eq!(tree.root_node().kind(), kind::SOURCE_FILE);
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn parse_keeps_going_after_errors() {
        let tree = parse("contract Broken { function ( }").expect("Failed to parse");

        assert!(tree.root_node().has_error());
    }

    #[test]
    fn grammar_debug_shows_name() {
        assert_eq!(
            format!("{:?}", Grammar::SOLIDITY),
            r#"Grammar { name: "Solidity" }"#
        );
        assert_eq!(Grammar::SOLIDITY.name(), "Solidity");
    }
}
