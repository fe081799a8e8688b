//! Search tailorings the compiled ICU4X data does not carry.
//!
//! CLDR's German search collation sorts `ä`, `ö` and `ü` as letters of their
//! own (`&a<ä &o<ö &u<ü`), so a base-strength search for `a` does not land on
//! `ä`. The compiled data bundled with `icu_collator` omits `-u-co-search`
//! and silently falls back to the standard tailoring, where the umlauts are
//! only accent variants. [`SearchTailoring::detect`] probes the built engine
//! and, when the primary distinctions are missing, the tailoring breaks the
//! engine's ties on them instead.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const DIAERESIS: char = '\u{0308}';

/// Letter made primary-distinct from its base by a search tailoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TailoredLetter {
    base: char,
    mark: char,
}

struct LanguageTailoring {
    language: &'static str,
    letters: &'static [TailoredLetter],
}

const SEARCH_TAILORINGS: &[LanguageTailoring] = &[LanguageTailoring {
    language: "de",
    letters: &[
        TailoredLetter { base: 'a', mark: DIAERESIS },
        TailoredLetter { base: 'o', mark: DIAERESIS },
        TailoredLetter { base: 'u', mark: DIAERESIS },
    ],
}];

/// Primary distinctions restored on top of an engine that lacks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchTailoring {
    letters: Vec<TailoredLetter>,
}

impl SearchTailoring {
    /// Returns the letters of `language`'s search tailoring that `compare`
    /// still treats as equal to their base, or `None` when nothing is lost.
    pub(crate) fn detect(
        language: &str,
        compare: impl Fn(&str, &str) -> Ordering,
    ) -> Option<Self> {
        let tailoring = SEARCH_TAILORINGS
            .iter()
            .find(|t| t.language.eq_ignore_ascii_case(language))?;

        let letters: Vec<TailoredLetter> = tailoring
            .letters
            .iter()
            .copied()
            .filter(|letter| {
                let base = letter.base.to_string();
                let marked: String = [letter.base, letter.mark].into_iter().nfc().collect();
                compare(&marked, &base) == Ordering::Equal
            })
            .collect();

        (!letters.is_empty()).then_some(Self { letters })
    }

    /// Orders two texts the engine found equal. Base letters sort before
    /// their tailored counterparts, position by position.
    pub(crate) fn break_tie(&self, left: &str, right: &str) -> Ordering {
        self.marks(left).cmp(&self.marks(right))
    }

    /// One flag per tailored base letter in `text`: whether it carries the
    /// tailored mark.
    fn marks(&self, text: &str) -> Vec<bool> {
        let mut marks = Vec::new();
        // Index into `letters` of the base currently open for combining marks.
        let mut open: Option<usize> = None;

        for ch in text.nfd() {
            if let Some(pos) = self.letters.iter().position(|l| is_base(ch, l.base)) {
                marks.push(false);
                open = Some(pos);
            } else if is_combining_mark(ch) {
                if let Some(pos) = open {
                    if self.letters[pos].mark == ch {
                        if let Some(last) = marks.last_mut() {
                            *last = true;
                        }
                    }
                }
            } else {
                open = None;
            }
        }
        marks
    }
}

fn is_base(ch: char, base: char) -> bool {
    let mut lower = ch.to_lowercase();
    lower.next() == Some(base) && lower.next().is_none()
}
