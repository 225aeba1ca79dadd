/// Number of characters kept from a repository file
pub const EXCERPT_LENGTH: usize = 160;

/// Marker appended when an excerpt was cut short
pub const ELLIPSIS: &str = "...";

/// LicenseExcerpt policy for turning repository file contents into a
/// one-line annotation
///
/// Lengths are counted in characters, not bytes, so multi-byte text is
/// never split inside a code point.
pub struct LicenseExcerpt;

impl LicenseExcerpt {
    /// First `EXCERPT_LENGTH` characters, plus `ELLIPSIS` iff anything was cut
    pub fn truncate(content: &str) -> String {
        Self::take_window(content.chars(), 0)
    }

    /// Window of `EXCERPT_LENGTH` characters starting at the first
    /// case-insensitive occurrence of `keyword`, after newlines have been
    /// collapsed to spaces
    ///
    /// # Returns
    /// `None` if the keyword does not occur
    pub fn keyword_window(content: &str, keyword: &str) -> Option<String> {
        let collapsed = Self::collapse_newlines(content);
        let chars: Vec<char> = collapsed.chars().collect();
        let start = Self::find_ignore_case(&chars, keyword)?;
        Some(Self::take_window(chars.into_iter(), start))
    }

    /// Replaces every line break (`\r\n`, `\n`, `\r`) with a single space
    pub fn collapse_newlines(content: &str) -> String {
        content.replace("\r\n", " ").replace(['\n', '\r'], " ")
    }

    fn take_window(chars: impl Iterator<Item = char>, start: usize) -> String {
        let mut rest = chars.skip(start);
        let mut excerpt: String = rest.by_ref().take(EXCERPT_LENGTH).collect();
        if rest.next().is_some() {
            excerpt.push_str(ELLIPSIS);
        }
        excerpt
    }

    /// Character index of the first case-insensitive match of `needle`
    fn find_ignore_case(haystack: &[char], needle: &str) -> Option<usize> {
        let needle: Vec<char> = needle.chars().collect();
        if needle.is_empty() || needle.len() > haystack.len() {
            return None;
        }
        haystack.windows(needle.len()).position(|window| {
            window
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
        })
    }
}
