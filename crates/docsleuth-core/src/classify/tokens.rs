/// Filename tokenisation for the name-matching phase.
///
/// Filenames are lowercased and split on any run of `_`, `-`, `.` or
/// spaces, so `"1_ЛС_смета.xlsx"`, `"1-лс-СМЕТА.xlsx"` and
/// `"1 лс смета.xlsx"` all produce the tokens `[1, лс, смета, xlsx]`.
/// The extension is deliberately part of the token stream — the dot is
/// just another delimiter.

/// Characters that separate filename tokens.
const DELIMITERS: [char; 4] = ['_', '-', '.', ' '];

/// Split a filename into its lowercase tokens.
pub fn filename_tokens(filename: &str) -> Vec<String> {
    filename
        .to_lowercase()
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// `true` when any tag, lowercased, is exactly equal to one of the tokens.
///
/// Equality, not substring: the tag `"лс"` matches the token `"лс"` but
/// not `"полс"`. A tag containing a delimiter (such as a two-word phrase)
/// can never equal a single token and therefore never matches here — such
/// tags only have an effect in the content phase.
pub fn any_tag_matches_tokens(tokens: &[String], tags: &[String]) -> bool {
    tags.iter()
        .any(|tag| tokens.iter().any(|token| *token == tag.to_lowercase()))
}
