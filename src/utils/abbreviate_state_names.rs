use crate::constants::STATE_ABBREVIATIONS;

/// Rewrites every long-form state name in the given text to the USPS
/// abbreviation the dataset stores (e.g. "california" becomes "ca").
///
/// Expects already lower-cased text. Replacement is whole-word only: a name
/// is rewritten when it is not flanked by alphanumeric characters, so
/// "arkansas" never loses its inner "kansas".
pub fn abbreviate_state_names(text: &str) -> String {
    let mut normalized = text.to_string();

    for (long_form, abbreviation) in STATE_ABBREVIATIONS {
        if normalized.contains(long_form) {
            normalized = replace_whole_phrase(&normalized, long_form, abbreviation);
        }
    }

    normalized
}

fn replace_whole_phrase(text: &str, phrase: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(phrase) {
        let start = cursor + offset;
        let end = start + phrase.len();

        let bounded_left = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_right = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if bounded_left && bounded_right {
            result.push_str(&text[cursor..start]);
            result.push_str(replacement);
        } else {
            result.push_str(&text[cursor..end]);
        }

        cursor = end;
    }

    result.push_str(&text[cursor..]);
    result
}
