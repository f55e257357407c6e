//! English inflectional variants.
//!
//! The stemmer does not always fold a word and its inflections onto one
//! stem (`bus` stays `bus` while `buses` becomes `buse`). Query words are
//! expanded to their regular inflections before normalization so either
//! side of such a pair reaches the other.

use std::collections::BTreeSet;

const VOWELS: &[u8] = b"aeiou";

fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !VOWELS.contains(&b)
}

/// consonant-vowel-consonant ending, the case where English doubles the
/// final letter before a vowel suffix (`stop` -> `stopping`)
fn doubles_final(word: &[u8]) -> bool {
    let n = word.len();
    n >= 3
        && is_consonant(word[n - 1])
        && !b"wxy".contains(&word[n - 1])
        && VOWELS.contains(&word[n - 2])
        && is_consonant(word[n - 3])
}

/// Candidate dictionary forms a word may be inflected from
fn base_forms(word: &str) -> Vec<String> {
    let mut bases = vec![word.to_string()];
    let strip = |suffix: &str| -> Option<String> {
        word.strip_suffix(suffix)
            .filter(|rest| rest.len() >= 2)
            .map(str::to_string)
    };

    if let Some(rest) = strip("ies") {
        bases.push(format!("{rest}y"));
    }
    if let Some(rest) = strip("ied") {
        bases.push(format!("{rest}y"));
    }
    if let Some(rest) = strip("es") {
        bases.push(rest);
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        if let Some(rest) = strip("s") {
            bases.push(rest);
        }
    }
    for suffix in ["ing", "ed", "er", "ers"] {
        if let Some(rest) = strip(suffix) {
            let rb = rest.as_bytes();
            if rb.len() >= 2 && rb[rb.len() - 1] == rb[rb.len() - 2] && is_consonant(rb[rb.len() - 1]) {
                bases.push(rest[..rest.len() - 1].to_string());
            }
            bases.push(format!("{rest}e"));
            bases.push(rest);
        }
    }
    bases
}

/// Regular inflections of a dictionary form
fn inflections(base: &str) -> Vec<String> {
    let bytes = base.as_bytes();
    let mut forms = vec![
        format!("{base}s"),
        format!("{base}es"),
        format!("{base}ed"),
        format!("{base}ing"),
        format!("{base}er"),
        format!("{base}ers"),
    ];

    if let Some(stem) = base.strip_suffix('e') {
        forms.push(format!("{base}d"));
        forms.push(format!("{stem}ing"));
    }
    if bytes.len() >= 2 && bytes[bytes.len() - 1] == b'y' && is_consonant(bytes[bytes.len() - 2]) {
        let stem = &base[..base.len() - 1];
        forms.push(format!("{stem}ies"));
        forms.push(format!("{stem}ied"));
    }
    if doubles_final(bytes) {
        let last = bytes[bytes.len() - 1] as char;
        forms.push(format!("{base}{last}ing"));
        forms.push(format!("{base}{last}ed"));
        forms.push(format!("{base}{last}er"));
    }
    forms
}

/// Morphological variants of `word`, including `word` itself.
///
/// Only plain lowercase ASCII words are expanded; anything else (numbers,
/// accented words, identifiers) is returned unchanged.
pub fn variations(word: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    out.insert(word.to_string());
    if word.len() < 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return out;
    }

    for base in base_forms(word) {
        out.extend(inflections(&base));
        out.insert(base);
    }
    out
}
