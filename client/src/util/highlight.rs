//! Summary highlighting: split text into plain and highlighted runs.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Terms worth a second look in any legal summary.
pub const KEY_TERMS: &[&str] = &[
    "liability",
    "indemnif",
    "terminat",
    "penalty",
    "penalties",
    "confidential",
    "payment",
    "breach",
    "jurisdiction",
    "warranty",
    "arbitration",
    "non-compete",
    "renewal",
    "deadline",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

/// Split `text` at ASCII-case-insensitive occurrences of any term.
///
/// When several terms start at the same position the longest wins. The
/// segments concatenate back to `text` exactly.
pub fn highlight_segments<S: AsRef<str>>(text: &str, terms: &[S]) -> Vec<HighlightSegment> {
    let needles: Vec<&str> = terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < text.len() {
        if !text.is_char_boundary(i) {
            i += 1;
            continue;
        }
        let hit = needles
            .iter()
            .filter_map(|needle| {
                let end = i + needle.len();
                (end <= text.len() && text.is_char_boundary(end) && text[i..end].eq_ignore_ascii_case(needle))
                    .then_some(end)
            })
            .max();
        match hit {
            Some(end) => {
                if plain_start < i {
                    segments.push(HighlightSegment { text: text[plain_start..i].to_owned(), highlighted: false });
                }
                segments.push(HighlightSegment { text: text[i..end].to_owned(), highlighted: true });
                i = end;
                plain_start = end;
            }
            None => i += 1,
        }
    }
    if plain_start < text.len() {
        segments.push(HighlightSegment { text: text[plain_start..].to_owned(), highlighted: false });
    }
    segments
}

/// Terms for the current toggle/query combination.
pub fn active_terms(key_terms: bool, query: &str) -> Vec<String> {
    let mut terms: Vec<String> = if key_terms {
        KEY_TERMS.iter().map(|t| (*t).to_owned()).collect()
    } else {
        Vec::new()
    };
    let query = query.trim();
    if !query.is_empty() {
        terms.push(query.to_owned());
    }
    terms
}
