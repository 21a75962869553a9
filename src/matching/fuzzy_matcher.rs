//! Fuzzy matching implementation for record lookup.
//!
//! This module provides record matching with:
//! - Exact matching on phone numbers
//! - Fuzzy name matching (substring and Levenshtein distance)
//! - Confidence scoring (0-100 scale)

use crate::domain::{Phone, ValidatedField};
use crate::models::{AddressBook, Record};

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Record matcher with fuzzy name and exact phone matching.
#[derive(Debug, Clone, Copy)]
pub struct RecordMatcher {
    min_confidence: u8,
}

impl RecordMatcher {
    /// Create a new RecordMatcher that drops name matches below `min_confidence`.
    pub fn new(min_confidence: u8) -> Self {
        Self { min_confidence }
    }

    /// Find records matching `query`.
    ///
    /// A query that parses as a phone matches records holding that phone.
    /// Anything else is matched against record names.
    ///
    /// # Returns
    /// Up to `max_results` matches, sorted by confidence (highest first), then
    /// by name.
    pub fn find<'a>(
        &self,
        book: &'a AddressBook,
        query: &str,
        max_results: usize,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = match Phone::parse(query) {
            Ok(phone) => book
                .show_all()
                .filter(|record| record.has_phone(&phone))
                .map(|record| MatchResult {
                    record,
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                })
                .collect(),
            Err(_) => {
                let query = Self::normalize_name(query);
                book.show_all()
                    .filter_map(|record| {
                        let name = Self::normalize_name(record.name());
                        let confidence = Self::calculate_fuzzy_score(&query, &name);
                        (confidence > 0 && confidence >= self.min_confidence).then_some(
                            MatchResult {
                                record,
                                confidence,
                                match_type: MatchType::FuzzyName,
                            },
                        )
                    })
                    .collect()
            }
        };

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);
        results
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for RecordMatcher {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::with_phones("Alice Smith", ["0501234567"]).unwrap());
        book.add_record(Record::with_phones("Alicia Keys", ["0679876543"]).unwrap());
        book.add_record(Record::with_phones("Bob", ["0501234567", "0931112233"]).unwrap());
        book
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(RecordMatcher::normalize_name("  John   DOE "), "john doe");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(RecordMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(RecordMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(RecordMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_fuzzy_score_ranges() {
        assert_eq!(RecordMatcher::calculate_fuzzy_score("bob", "bob"), 95);
        let contains = RecordMatcher::calculate_fuzzy_score("ali", "alice smith");
        assert!((10..95).contains(&contains));
        assert_eq!(RecordMatcher::calculate_fuzzy_score("xyz", "alice"), 0);
    }

    #[test]
    fn test_find_by_phone() {
        let book = sample_book();
        let results = RecordMatcher::default().find(&book, "0501234567", 10);

        let names: Vec<_> = results.iter().map(|m| m.record.name()).collect();
        assert_eq!(names, vec!["Alice Smith", "Bob"]);
        assert!(results.iter().all(|m| m.match_type == MatchType::ExactPhone));
        assert!(results.iter().all(|m| m.confidence == 100));
    }

    #[test]
    fn test_find_by_name_ranks_exact_first() {
        let book = sample_book();
        let results = RecordMatcher::default().find(&book, "alice smith", 10);

        assert_eq!(results[0].record.name(), "Alice Smith");
        assert_eq!(results[0].confidence, 95);
        assert_eq!(results[0].match_type, MatchType::FuzzyName);
    }

    #[test]
    fn test_find_limits_results() {
        let book = sample_book();
        let results = RecordMatcher::new(0).find(&book, "ali", 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_find_no_matches() {
        let book = sample_book();
        assert!(RecordMatcher::default().find(&book, "zzzzzz", 10).is_empty());
    }
}
