//! Keyword vocabulary for the structure and family heuristics.
//!
//! All rules match seller-entered pt-BR/en text, so every list carries both
//! accented and unaccented spellings. Kept in one place so the vocabulary can
//! be tuned without touching rule order.

use std::sync::LazyLock;

use regex::Regex;

fn vocab(pattern: &str) -> Regex {
    Regex::new(pattern).expect("vocabulary pattern must compile")
}

/// Two-piece swimwear.
pub(super) static BIKINI: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(biqu[ií]ni|bikini)\b"));

/// One-piece swimwear that must not be read as a set.
pub(super) static ONE_PIECE: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(mai[ôo]|one[- ]?piece)\b"));

/// Explicit co-sold-set wording.
pub(super) static SET: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(conjuntos?|kit|set)\b"));

/// Upper-body garment terms.
pub(super) static TOP_TERMS: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(cropped|top|blusa|camiseta|camisa|regata|bata)\b"));

/// Lower-body garment terms.
pub(super) static BOTTOM_TERMS: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(shorts?|saia|cal[çc]a|bermuda|calcinha|legging)\b"));

/// A classification that names only shorts, nothing else.
pub(super) static SHORT_ONLY: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)^\s*shorts?\s*$"));

// Family vocabulary, checked in relevance::family_of in declaration order.

pub(super) static BABY_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(beb[êe]|baby|rec[ée]m[- ]nascido|body infantil)\b"));

pub(super) static DRESS_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(vestidos?|macac[ãa]o|dress|jumpsuit)\b"));

pub(super) static SWIM_BOTTOM_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| vocab(r"(?i)\b(calcinha|sunga|lingerie|underwear|panty)\b"));

pub(super) static BOTTOMS_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    vocab(r"(?i)\b(cal[çc]a|saia|shorts?|bermuda|legging|skirt|trousers|pants)\b")
});
