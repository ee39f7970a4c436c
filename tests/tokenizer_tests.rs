use school_search::types::TokenSet;
use school_search::Tokenizer;

#[cfg(test)]
mod field_tokenizer_tests {
    use super::*;

    fn token_set(words: &[&str]) -> TokenSet {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_lowercases_input() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("MOUNTAIN VIEW ELEMENTARY");
        assert_eq!(tokens, token_set(&["mountain", "view", "elementary"]));
    }

    #[test]
    fn test_stop_words_never_survive() {
        let tokenizer = Tokenizer::field_parser();

        assert_eq!(tokenizer.tokenize("Lincoln School"), token_set(&["lincoln"]));
        assert_eq!(
            tokenizer.tokenize("Lincoln Academy"),
            token_set(&["lincoln"])
        );
        assert_eq!(
            tokenizer.tokenize("Roosevelt Institute"),
            token_set(&["roosevelt"])
        );
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("LINCOLN-DOUGLAS HIGH");
        assert_eq!(tokens, token_set(&["lincoln", "douglas", "high"]));
    }

    #[test]
    fn test_punctuation_replaced_before_stripping() {
        let tokenizer = Tokenizer::field_parser();

        // The apostrophe becomes a space first, so "MARY'S" never merges
        // into a single "marys" token.
        let tokens = tokenizer.tokenize("ST. MARY'S");
        assert_eq!(tokens, token_set(&["st", "mary", "s"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("LINCOLN LINCOLN LINCOLN");
        assert_eq!(tokens, token_set(&["lincoln"]));
    }

    #[test]
    fn test_mixed_whitespace() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("JEFFERSON\t MIDDLE\n\n  SCHOOL");
        assert_eq!(tokens, token_set(&["jefferson", "middle"]));
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        let tokenizer = Tokenizer::field_parser();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t\n").is_empty());
        assert!(tokenizer.tokenize("...,,,---").is_empty());
    }

    #[test]
    fn test_field_parser_keeps_state_names_verbatim() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("CALIFORNIA");
        assert_eq!(tokens, token_set(&["california"]));
    }

    #[test]
    fn test_tokenization_is_referentially_transparent() {
        let tokenizer = Tokenizer::field_parser();
        let text = "LINCOLN HIGH SCHOOL, SPRINGFIELD";

        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[test]
    fn test_tokenization_is_idempotent_over_its_own_rendering() {
        let tokenizer = Tokenizer::field_parser();

        let tokens = tokenizer.tokenize("LINCOLN HIGH SCHOOL, SPRINGFIELD");
        let rendering = tokens.iter().cloned().collect::<Vec<_>>().join(" ");

        assert_eq!(tokenizer.tokenize(&rendering), tokens);
    }
}

#[cfg(test)]
mod query_tokenizer_tests {
    use super::*;

    fn token_set(words: &[&str]) -> TokenSet {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_state_names_abbreviated() {
        let tokenizer = Tokenizer::query_parser();

        assert_eq!(
            tokenizer.tokenize("lincoln california"),
            token_set(&["lincoln", "ca"])
        );
        assert_eq!(tokenizer.tokenize("New York"), token_set(&["ny"]));
    }

    #[test]
    fn test_overlapping_state_names_resolve_longest_first() {
        let tokenizer = Tokenizer::query_parser();

        assert_eq!(tokenizer.tokenize("west virginia"), token_set(&["wv"]));
        assert_eq!(tokenizer.tokenize("virginia"), token_set(&["va"]));
    }

    #[test]
    fn test_state_name_inside_a_word_is_untouched() {
        let tokenizer = Tokenizer::query_parser();

        // "kansas" sits inside "arkansas" but is not word-bounded there.
        assert_eq!(tokenizer.tokenize("arkansas"), token_set(&["ar"]));
        assert_eq!(
            tokenizer.tokenize("californian dreams"),
            token_set(&["californian", "dreams"])
        );
    }

    #[test]
    fn test_query_stop_words_removed() {
        let tokenizer = Tokenizer::query_parser();

        assert_eq!(
            tokenizer.tokenize("lincoln high school"),
            token_set(&["lincoln", "high"])
        );
        assert!(tokenizer.tokenize("school academy institute").is_empty());
    }
}
