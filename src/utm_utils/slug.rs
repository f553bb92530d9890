use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn non_slug_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_\s-]").unwrap())
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

/// Normalize free text into the slug alphabet `[a-z0-9_]` used for UTM
/// values: lowercase, strip diacritics ("é" becomes "e"), drop anything that
/// is not a word character, whitespace, or hyphen, then collapse whitespace
/// and hyphen runs into single underscores.
///
/// Total over any input, including empty strings, and idempotent. Non-Latin
/// scripts are stripped rather than transliterated.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let decomposed: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let cleaned = non_slug_chars().replace_all(&decomposed, "");
    let spaced = whitespace_runs().replace_all(&cleaned, "_");
    hyphen_runs().replace_all(&spaced, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Summer Sale"), "summer_sale");
        assert_eq!(normalize("Black Friday 2025"), "black_friday_2025");
    }

    #[test]
    fn test_normalize_strips_accents() {
        assert_eq!(normalize("Campaña Verano"), "campana_verano");
        assert_eq!(normalize("Été à Paris"), "ete_a_paris");
        assert_eq!(normalize("Führung"), "fuhrung");
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_hyphens() {
        assert_eq!(normalize("a   b"), "a_b");
        assert_eq!(normalize("a---b"), "a_b");
        assert_eq!(normalize("a\t\n b"), "a_b");
    }

    #[test]
    fn test_normalize_drops_special_characters() {
        assert_eq!(normalize("50% off!"), "50_off");
        assert_eq!(normalize("q4/launch (beta)"), "q4launch_beta");
        assert_eq!(normalize("snake_case_stays"), "snake_case_stays");
    }

    #[test]
    fn test_normalize_empty_and_stripped_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_non_latin_scripts_are_stripped() {
        assert_eq!(normalize("кампания"), "");
        assert_eq!(normalize("キャンペーン"), "");
        assert_eq!(normalize("promo кампания 2025"), "promo_2025");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "Campaña Verano",
            "  mixed -- CASE  ",
            "a---b c",
            "50% off!",
            "",
            "already_normalized_value",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let samples = ["Campaña Verano", "50% off!", "a - b _ c", "ÀÉÎÕÜ ñ ç"];
        for s in samples {
            for ch in normalize(s).chars() {
                assert!(
                    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_',
                    "character {:?} escaped the slug alphabet for input {:?}",
                    ch,
                    s
                );
            }
        }
    }
}
