//! Raw point names to canonical join keys.
//!
//! Knowledge-base names look like `"Thilartha Kalam"` or `"Sevikuttri_Kaalam"`,
//! scene objects like `"12_AasanKaalam"` or `"27_Konasanni_L1"`. Both reduce to
//! a lowercase, letters-only key that the registry is indexed by.
//!
//! Accented Latin letters fold to their base letter (`"Thilarthā"` keys like
//! `"Thilartha"`); letters of other scripts are kept without their marks.

use std::fmt;

use constants::vocabulary::{DIRECTION_MARKERS, SYNONYM_TOKENS};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lowercase, letters-only key joining the two vocabularies.
///
/// The empty key is valid and means "unmatchable".
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Accept `value` only if it is already in canonical form.
    pub fn parse(value: &str) -> Option<Self> {
        value
            .chars()
            .all(is_key_letter)
            .then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in letters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Reduce a raw name to its canonical key.
///
/// Steps, each on the previous output:
/// 1. lowercase, drop whitespace, decompose and drop combining marks
/// 2. remove synonym tokens (`varmam`, `kaalam`, ...) wherever they occur
/// 3. remove side markers (`_L`, `_R`, `_L1`, `_left`)
/// 4. keep letters only
///
/// Steps 2 and 3 are skipped when they would leave no letters, so a name that
/// is nothing but a synonym still yields a key. The pass is repeated until the
/// output is stable, which keeps the function idempotent when step 4 glues
/// letters into a fresh synonym token.
pub fn normalize(raw: &str) -> CanonicalKey {
    let mut current = normalize_pass(raw);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return CanonicalKey(current);
        }
        current = next;
    }
}

fn normalize_pass(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let without_synonyms = keep_if_lettered(compact, strip_synonyms);
    let without_sides = keep_if_lettered(without_synonyms, strip_direction_markers);

    without_sides.chars().filter(|c| is_key_letter(*c)).collect()
}

/// Alphabetic, not a combining mark, and unchanged by lowercasing.
fn is_key_letter(c: char) -> bool {
    c.is_alphabetic() && !is_combining_mark(c) && c.to_lowercase().eq(std::iter::once(c))
}

fn keep_if_lettered(input: String, step: fn(&str) -> String) -> String {
    let stripped = step(&input);
    if stripped.chars().any(is_key_letter) {
        stripped
    } else {
        input
    }
}

fn strip_synonyms(input: &str) -> String {
    SYNONYM_TOKENS
        .iter()
        .fold(input.to_string(), |acc, token| acc.replace(token, ""))
}

fn strip_direction_markers(input: &str) -> String {
    let mut segments = input.split('_');
    let mut out = String::from(segments.next().unwrap_or_default());
    for segment in segments {
        if !is_direction_marker(segment) {
            out.push('_');
            out.push_str(segment);
        }
    }
    out
}

/// Side of a bilateral scene object, read from its marker segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

fn direction_of(segment: &str) -> Option<Side> {
    let lowered = segment.to_ascii_lowercase();
    DIRECTION_MARKERS.iter().find_map(|marker| {
        let rest = lowered.strip_prefix(marker)?;
        if !rest.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(if marker.starts_with('l') {
            Side::Left
        } else {
            Side::Right
        })
    })
}

fn is_direction_marker(segment: &str) -> bool {
    direction_of(segment).is_some()
}

/// Human-readable label for a scene object or knowledge-base name.
///
/// `"6_Porchai_L"` becomes `"Porchai (left)"`, `"48_ValiyaAththiSurukki_R"`
/// becomes `"Valiya Aththi Surukki (right)"`. Names without scene decoration
/// come back trimmed, with underscores turned into spaces.
pub fn display_label(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut segments: Vec<&str> = trimmed.split('_').filter(|s| !s.is_empty()).collect();

    if segments.len() > 1 && segments[0].chars().all(|c| c.is_ascii_digit()) {
        segments.remove(0);
    }

    let mut side = None;
    if segments.len() > 1 {
        if let Some(found) = segments.last().and_then(|last| direction_of(last)) {
            side = Some(found);
            segments.pop();
        }
    }

    let words: Vec<String> = segments.iter().map(|s| split_camel_case(s)).collect();
    let mut label = words.join(" ");
    if label.is_empty() {
        return trimmed.to_string();
    }

    match side {
        Some(Side::Left) => label.push_str(" (left)"),
        Some(Side::Right) => label.push_str(" (right)"),
        None => {}
    }
    label
}

fn split_camel_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len() + 4);
    let mut previous_lower = false;
    for c in word.chars() {
        if c.is_uppercase() && previous_lower {
            out.push(' ');
        }
        previous_lower = c.is_lowercase();
        out.push(c);
    }
    out
}
