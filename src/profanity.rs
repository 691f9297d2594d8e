//! Player name sanitizing
//!
//! Names pass through a [`NameFilter`] before they reach the leaderboard.

/// Sanitizes player-entered names
pub trait NameFilter {
    fn sanitize(&self, name: &str) -> String;
}

impl<F: NameFilter + ?Sized> NameFilter for Box<F> {
    fn sanitize(&self, name: &str) -> String {
        (**self).sanitize(name)
    }
}

/// Leaves names untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl NameFilter for PassThrough {
    fn sanitize(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Masks every occurrence of a listed word with `*`, ignoring ASCII case
#[derive(Debug, Clone, Default)]
pub struct WordListFilter {
    words: Vec<String>,
}

impl WordListFilter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

impl NameFilter for WordListFilter {
    fn sanitize(&self, name: &str) -> String {
        let mut chars: Vec<char> = name.chars().collect();
        let lowered: Vec<char> = chars.iter().map(|c| c.to_ascii_lowercase()).collect();

        for word in &self.words {
            let needle: Vec<char> = word.chars().collect();
            if needle.len() > lowered.len() {
                continue;
            }
            for start in 0..=lowered.len() - needle.len() {
                if lowered[start..start + needle.len()] == needle[..] {
                    for c in &mut chars[start..start + needle.len()] {
                        *c = '*';
                    }
                }
            }
        }
        chars.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_listed_words_any_case() {
        let filter = WordListFilter::new(["darn", "heck"]);
        assert_eq!(filter.sanitize("DarnPilot"), "****Pilot");
        assert_eq!(filter.sanitize("what the HECK"), "what the ****");
        assert_eq!(filter.sanitize("Clean"), "Clean");
    }

    #[test]
    fn test_overlapping_matches() {
        let filter = WordListFilter::new(["aa"]);
        assert_eq!(filter.sanitize("aaa"), "***");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(PassThrough.sanitize("Anything"), "Anything");
    }
}
