//! Part-of-speech suffix catalog
//!
//! Derivational and inflectional suffixes grouped by the part of speech they
//! tend to produce. The catalog is fixed at compile time; the inflection
//! heuristic filters it per puzzle.

use std::fmt;

/// Part of speech a suffix tends to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
    Adverb,
}

impl PartOfSpeech {
    /// Short label used in reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Verb => "verb",
            Self::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate suffixes by part of speech
///
/// Entry order is stable and drives the order of every table derived from
/// the catalog.
pub const SUFFIX_CATALOG: &[(PartOfSpeech, &[&str])] = &[
    (
        PartOfSpeech::Noun,
        &["er", "ion", "ity", "ment", "nes", "or", "sion", "ship", "th", "s"],
    ),
    (
        PartOfSpeech::Adjective,
        &[
            "able", "ible", "al", "ant", "ary", "ful", "ic", "ious", "ous", "ive", "les", "y",
        ],
    ),
    (
        PartOfSpeech::Verb,
        &["ed", "en", "er", "ing", "ize", "ise", "d", "s"],
    ),
    (PartOfSpeech::Adverb, &["ly", "ward", "wise"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_parts_of_speech() {
        let tags: Vec<PartOfSpeech> = SUFFIX_CATALOG.iter().map(|&(pos, _)| pos).collect();
        assert_eq!(
            tags,
            [
                PartOfSpeech::Noun,
                PartOfSpeech::Adjective,
                PartOfSpeech::Verb,
                PartOfSpeech::Adverb
            ]
        );
    }

    #[test]
    fn catalog_suffixes_are_lowercase_ascii() {
        for (_, suffixes) in SUFFIX_CATALOG {
            for suffix in *suffixes {
                assert!(!suffix.is_empty());
                assert!(
                    suffix.chars().all(|c| c.is_ascii_lowercase()),
                    "Suffix '{suffix}' is not lowercase ASCII"
                );
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(PartOfSpeech::Noun.label(), "noun");
        assert_eq!(PartOfSpeech::Adjective.label(), "adjective");
        assert_eq!(PartOfSpeech::Verb.label(), "verb");
        assert_eq!(format!("{}", PartOfSpeech::Adverb), "adverb");
    }
}
