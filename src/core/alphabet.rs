//! Accepted alphabet and letter normalization
//!
//! The game accepts ASCII `A`-`Z` plus the Czech letters with diacritics.
//! All comparisons happen on uppercase letters.

/// Letters with diacritics accepted in addition to ASCII `A`-`Z`
pub const EXTENDED_LETTERS: [char; 15] = [
    'Á', 'Č', 'Ď', 'É', 'Ě', 'Í', 'Ň', 'Ó', 'Ř', 'Š', 'Ť', 'Ú', 'Ů', 'Ý', 'Ž',
];

/// Check whether an (already uppercase) character belongs to the alphabet
#[inline]
#[must_use]
pub fn is_accepted(ch: char) -> bool {
    ch.is_ascii_uppercase() || EXTENDED_LETTERS.contains(&ch)
}

/// Uppercase a single typed character and check it against the alphabet
///
/// Returns `None` when the character is not a letter of the alphabet, or when
/// its uppercase form expands to more than one character (e.g. `ß`).
///
/// # Examples
/// ```
/// use hadej_slovo::core::normalize_letter;
///
/// assert_eq!(normalize_letter('ř'), Some('Ř'));
/// assert_eq!(normalize_letter('q'), Some('Q'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[must_use]
pub fn normalize_letter(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    let first = upper.next()?;
    if upper.next().is_some() {
        return None;
    }
    is_accepted(first).then_some(first)
}

/// Trim and uppercase a raw word
///
/// Unicode default case mapping agrees with Czech locale casing for every
/// letter of the alphabet, so no locale tables are needed.
#[must_use]
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_accepted() {
        for ch in 'A'..='Z' {
            assert!(is_accepted(ch), "{ch} should be accepted");
        }
        assert!(!is_accepted('a'));
    }

    #[test]
    fn extended_letters_are_accepted() {
        for ch in "ÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ".chars() {
            assert!(is_accepted(ch), "{ch} should be accepted");
        }
        assert!(!is_accepted('Ä'));
        assert!(!is_accepted('Ł'));
    }

    #[test]
    fn normalize_letter_uppercases() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('ž'), Some('Ž'));
        assert_eq!(normalize_letter('ů'), Some('Ů'));
        assert_eq!(normalize_letter('Ě'), Some('Ě'));
    }

    #[test]
    fn normalize_letter_rejects_non_letters() {
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('-'), None);
        assert_eq!(normalize_letter('ö'), None);
    }

    #[test]
    fn normalize_letter_rejects_multi_char_uppercase() {
        // 'ß' uppercases to "SS"
        assert_eq!(normalize_letter('ß'), None);
    }

    #[test]
    fn normalize_word_trims_and_uppercases() {
        assert_eq!(normalize_word("  kočka \r"), "KOČKA");
        assert_eq!(normalize_word("Řízek"), "ŘÍZEK");
    }
}
