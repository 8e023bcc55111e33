// ABOUTME: Relevance classification of a candidate product name against the search query
// ABOUTME: Exact, prefix, substring, and fallback ranks; lower rank sorts first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Relevance classification.

/// Discrete relevance rank of a candidate name against the query.
///
/// Lower is more relevant. Comparison is case-insensitive with no
/// whitespace or punctuation normalization beyond case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relevance {
    /// Candidate equals the query exactly
    Exact = 0,
    /// Candidate starts with the query (and is not an exact match)
    Prefix = 1,
    /// Candidate contains the query somewhere else
    Contains = 2,
    /// Candidate does not contain the query at all
    Fallback = 3,
}

impl Relevance {
    /// Classify a candidate name against the search query
    #[must_use]
    pub fn classify(candidate: &str, query: &str) -> Self {
        let candidate = candidate.to_lowercase();
        let query = query.to_lowercase();
        if candidate == query {
            Self::Exact
        } else if candidate.starts_with(&query) {
            Self::Prefix
        } else if candidate.contains(&query) {
            Self::Contains
        } else {
            Self::Fallback
        }
    }

    /// True unless the candidate failed to contain the query at all
    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::Fallback)
    }

    /// Sort key; lower sorts first
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}
