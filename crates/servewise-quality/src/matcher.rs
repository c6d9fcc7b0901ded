//! Model-name match strategies
//!
//! Each strategy is a pure lookup of a query name in one use case's score
//! table. The scorer tries them in order and takes the first hit.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::aliases::canonical_name;
use crate::table::{ScoreTable, normalize_key};

/// Minimum shared words for a fuzzy match
const MIN_SHARED_WORDS: usize = 2;

/// Words that carry no identity once quantization and packaging are stripped
const NOISE_WORDS: &[&str] = &["instruct", "chat", "it", "hf"];

// -- Regex patterns compiled once via LazyLock --

static QUANT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-_.](quantized\.[a-z0-9]+|fp8-dynamic|fp8|w\d+a\d+|awq|gptq|int4|int8|bf16|fp16|gguf)$").unwrap()
});

static INSTRUCT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]instruct$").unwrap());

static SIZE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+x)?\d+(\.\d+)?[bm]$").unwrap());

static TOKEN_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9.]+").unwrap());

/// A way of finding a model's score in a table
pub trait MatchStrategy: Send + Sync {
    fn find(&self, query: &str, table: &ScoreTable) -> Option<f64>;

    fn name(&self) -> &'static str;
}

/// Case-insensitive exact name match
pub struct ExactMatch;

impl MatchStrategy for ExactMatch {
    fn find(&self, query: &str, table: &ScoreTable) -> Option<f64> {
        table.get(&normalize_key(query)).copied()
    }

    fn name(&self) -> &'static str {
        "exact"
    }
}

/// Known benchmark repository ids mapped to their quality-table names
pub struct AliasMatch;

impl MatchStrategy for AliasMatch {
    fn find(&self, query: &str, table: &ScoreTable) -> Option<f64> {
        canonical_name(query).and_then(|canonical| table.get(canonical).copied())
    }

    fn name(&self) -> &'static str {
        "alias"
    }
}

/// Word-set overlap after stripping organization and quantization noise
///
/// Picks the entry sharing the most words with the query (at least two).
/// When the query names a parameter size, entries with the same size win
/// over entries with more shared words.
pub struct FuzzyMatch;

impl MatchStrategy for FuzzyMatch {
    fn find(&self, query: &str, table: &ScoreTable) -> Option<f64> {
        let query_words = tokenize(&normalize_model_name(query));
        let query_size = size_token(&query_words);

        let mut best: Option<((bool, usize), &str, f64)> = None;

        for (name, score) in table {
            let words = tokenize(&normalize_model_name(name));
            let shared = query_words.intersection(&words).count();
            if shared < MIN_SHARED_WORDS {
                continue;
            }

            let size_matches = query_size.is_some() && query_size == size_token(&words);
            let rank = (size_matches, shared);

            let better = match &best {
                None => true,
                Some((best_rank, best_name, _)) => rank > *best_rank || (rank == *best_rank && name.as_str() < *best_name),
            };
            if better {
                best = Some((rank, name.as_str(), *score));
            }
        }

        best.map(|(_, _, score)| score)
    }

    fn name(&self) -> &'static str {
        "fuzzy"
    }
}

/// Lowercase, drop the organization prefix and strip quantization/instruct suffixes
pub fn normalize_model_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut base = lower.rsplit('/').next().unwrap_or_default().to_owned();

    loop {
        let stripped = {
            let without_quant = QUANT_SUFFIX_RE.replace(&base, "");
            INSTRUCT_SUFFIX_RE.replace(&without_quant, "").into_owned()
        };
        if stripped == base {
            break;
        }
        base = stripped;
    }

    base
}

fn tokenize(name: &str) -> BTreeSet<String> {
    TOKEN_SPLIT_RE
        .split(name)
        .map(|word| word.trim_matches('.'))
        .filter(|word| !word.is_empty() && !NOISE_WORDS.contains(word))
        .map(str::to_owned)
        .collect()
}

fn size_token(words: &BTreeSet<String>) -> Option<&str> {
    words
        .iter()
        .map(String::as_str)
        .find(|word| SIZE_TOKEN_RE.is_match(word))
}
