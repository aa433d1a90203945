use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Default job vocabulary, in scoring order.
pub const BUILTIN_TERMS: &[(&str, u32)] = &[
    ("python", 15),
    ("flask", 12),
    ("MATLAB", 12),
    ("api", 10),
    ("pandas", 8),
    ("sql", 8),
    ("git", 7),
    ("docker", 6),
    ("C", 10),
    ("data", 8),
    ("web", 8),
    ("javascript", 6),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary term must not be empty")]
    EmptyTerm,
    #[error("vocabulary term {term:?} must have a positive weight")]
    ZeroWeight { term: String },
    #[error("vocabulary term {term:?} is listed more than once (terms are case-insensitive)")]
    DuplicateTerm { term: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// Display form, as configured.
    pub term: String,
    #[serde(skip)]
    pub folded: String,
    pub weight: u32,
}

/// Immutable weighted term list. Built once, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<Term>,
    total_weight: u64,
}

impl Vocabulary {
    pub fn new<I, S>(pairs: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut terms = Vec::new();
        let mut seen = HashSet::new();

        for (raw, weight) in pairs {
            let term = raw.into().trim().to_string();
            if term.is_empty() {
                return Err(VocabularyError::EmptyTerm);
            }
            if weight == 0 {
                return Err(VocabularyError::ZeroWeight { term });
            }

            let folded = term.to_lowercase();
            if !seen.insert(folded.clone()) {
                return Err(VocabularyError::DuplicateTerm { term });
            }

            terms.push(Term {
                term,
                folded,
                weight,
            });
        }

        let total_weight = terms.iter().map(|term| u64::from(term.weight)).sum();
        Ok(Self {
            terms,
            total_weight,
        })
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_TERMS.iter().copied()).expect("valid builtin vocabulary")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of all weights; the denominator of the aggregate percentage.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}
