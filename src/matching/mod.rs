//! Fuzzy matching utilities for record lookup.
//!
//! This module provides fuzzy name matching and exact phone matching across
//! the records of an address book.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{MatchResult, MatchType, RecordMatcher};
