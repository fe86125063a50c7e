//! Closest-name suggestions for mistyped identifiers.

/// Best candidate for `input`: an exact case-insensitive match, then a
/// prefix or suffix match, then the nearest name within edit distance 3.
pub fn closest<'a, S: AsRef<str>>(input: &str, candidates: &'a [S]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let lowered: Vec<(&str, String)> = candidates
        .iter()
        .map(|c| (c.as_ref(), c.as_ref().to_lowercase()))
        .collect();

    if let Some((name, _)) = lowered.iter().find(|(_, lower)| *lower == input_lower) {
        return Some(*name);
    }

    if !input_lower.is_empty() {
        let affix = lowered.iter().find(|(_, lower)| {
            lower.starts_with(&input_lower) || lower.ends_with(&input_lower)
        });
        if let Some((name, _)) = affix {
            return Some(*name);
        }
    }

    lowered
        .iter()
        .map(|(name, lower)| (*name, levenshtein(&input_lower, lower)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name)
}

/// Hint text for an unknown name, if anything is close enough.
pub fn did_you_mean<S: AsRef<str>>(input: &str, candidates: &[S]) -> Option<String> {
    closest(input, candidates).map(|name| format!("Did you mean '{}'?", name))
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }
    previous[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn exact_match_ignores_case() {
        let names = ["toJson", "toString"];
        assert_eq!(closest("TOJSON", &names), Some("toJson"));
    }

    #[test]
    fn prefix_and_suffix_matches() {
        let names = ["regexReplaceAll", "trimSuffix"];
        assert_eq!(closest("regexRep", &names), Some("regexReplaceAll"));
        assert_eq!(closest("suffix", &names), Some("trimSuffix"));
    }

    #[test]
    fn nearest_within_three_edits() {
        let names = ["upper", "lower", "title"];
        assert_eq!(closest("uper", &names), Some("upper"));
        assert_eq!(closest("zzzzzzzz", &names), None);
        assert_eq!(
            did_you_mean("lowr", &names).as_deref(),
            Some("Did you mean 'lower'?")
        );
    }
}
