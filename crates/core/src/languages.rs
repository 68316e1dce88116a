// Copyright 2025 Queens Report Contributors
// SPDX-License-Identifier: Apache-2.0

//! Distinct language counting.

use crate::record::Record;
use std::collections::BTreeSet;

/// Number of unique `language` values across `records`.
pub fn distinct_language_count(records: &[Record]) -> usize {
    distinct_languages(records).len()
}

/// Sorted set of language names present in `records`.
pub fn distinct_languages(records: &[Record]) -> BTreeSet<&str> {
    records.iter().map(|r| r.language.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_language(language: &str) -> Record {
        Record::builder()
            .language(language)
            .version("1")
            .source("src")
            .board_width(8)
            .build()
            .unwrap()
    }

    #[test]
    fn test_duplicates_count_once() {
        let records: Vec<Record> = ["go", "go", "rust"].into_iter().map(with_language).collect();
        assert_eq!(distinct_language_count(&records), 2);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(distinct_language_count(&[]), 0);
    }

    #[test]
    fn test_order_independent() {
        let forward: Vec<Record> = ["java", "go", "c"].into_iter().map(with_language).collect();
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(distinct_languages(&forward), distinct_languages(&backward));
        assert_eq!(
            distinct_languages(&forward).into_iter().collect::<Vec<_>>(),
            vec!["c", "go", "java"]
        );
    }
}
