//! Reading problems.
//!
//! A problem is written as `TELL`, followed by a knowledge base of clauses separated by `;`, followed by `ASK` and a query.
//!
//! ```rust
//! # use iengine::io::Problem;
//! let problem = Problem::from_text("
//! TELL
//! p2 => p3; p3 => p1; c => e; b & e => f; f & g => h; p1 => d; p1 & p3 => c; a; b; p2;
//! ASK
//! d
//! ").unwrap();
//!
//! assert_eq!(problem.knowledge_base.len(), 10);
//! assert_eq!(problem.knowledge_base[0], "p2 => p3");
//! assert_eq!(problem.query, "d");
//! ```

use std::path::Path;

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

const TELL: &str = "TELL";
const ASK: &str = "ASK";
const SEPARATOR: char = ';';

/// A knowledge base of (trimmed, non-empty) clauses, and a (trimmed) query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub knowledge_base: Vec<String>,
    pub query: String,
}

impl Problem {
    /// Reads a problem from text.
    ///
    /// The knowledge base is the text between the first `TELL` and the first `ASK`, and the query is the text after the first `ASK`.
    pub fn from_text(text: &str) -> Result<Self, err::ParseError> {
        let tell = text.find(TELL).ok_or(err::ParseError::MissingTell)?;
        let ask = text.find(ASK).ok_or(err::ParseError::MissingAsk)?;

        let start = tell + TELL.len();
        let knowledge_base = match start <= ask {
            true => &text[start..ask],
            false => "",
        };

        let knowledge_base = knowledge_base
            .split(SEPARATOR)
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        if knowledge_base.is_empty() {
            return Err(err::ParseError::EmptyKnowledgeBase);
        }

        let query = text[ask + ASK.len()..].trim().to_string();
        if query.is_empty() {
            return Err(err::ParseError::EmptyQuery);
        }

        log::debug!(target: targets::PARSE, "Read {} clauses and query {query}", knowledge_base.len());

        Ok(Problem {
            knowledge_base,
            query,
        })
    }

    /// Reads a problem from a file.
    pub fn from_path(path: &Path) -> Result<Self, err::ParseError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(e) => {
                log::error!(target: targets::PARSE, "Failed to read {path:?}: {e}");
                Err(err::ParseError::NoFile(path.display().to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(Problem::from_text("a; b ASK a"), Err(err::ParseError::MissingTell));
        assert_eq!(Problem::from_text("TELL a; b"), Err(err::ParseError::MissingAsk));
        assert_eq!(
            Problem::from_text("TELL ;; ASK a"),
            Err(err::ParseError::EmptyKnowledgeBase)
        );
        assert_eq!(Problem::from_text("TELL a; ASK  "), Err(err::ParseError::EmptyQuery));
    }

    #[test]
    fn ask_before_tell() {
        assert_eq!(
            Problem::from_text("ASK a TELL b"),
            Err(err::ParseError::EmptyKnowledgeBase)
        );
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Problem::from_path(Path::new("no/such/problem.txt")),
            Err(err::ParseError::NoFile(_))
        ));
    }
}
