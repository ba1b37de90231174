use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

const BENGALI_BLOCK: RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Share of ASCII characters a message needs before it is treated as English.
const ENGLISH_ASCII_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    English,
    /// Bengali or any text that is not predominantly ASCII.
    Other,
}

pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(|character| BENGALI_BLOCK.contains(&character))
}

pub fn ascii_ratio(text: &str) -> f64 {
    let (total, ascii) = text.chars().fold((0usize, 0usize), |(total, ascii), character| {
        (total + 1, ascii + usize::from(character.is_ascii()))
    });
    ascii as f64 / total.max(1) as f64
}

pub fn classify(text: &str) -> Locale {
    if contains_bengali(text) {
        return Locale::Other;
    }

    if ascii_ratio(text) > ENGLISH_ASCII_RATIO {
        Locale::English
    } else {
        Locale::Other
    }
}
