//! 在一般文字中辨識經節參照，並把省略書卷或章數的參照補齊。
//!
//! 這裡只處理字串，不會呼叫 API；補齊後的參照可以直接交給
//! [`VerseFetcher`](crate::core::fetcher::VerseFetcher)。

use regex::Regex;
use std::sync::LazyLock;

pub const SCRIPTURE_READING: &str = "Scripture Reading:";

static VERSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:[0-9] )?[A-Z][a-z]+\.? )?[0-9a-d:, -]+$").expect("verse pattern")
});

static V_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:v\.|vv\.) [0-9a-d, -]+$").expect("v. pattern"));

static PAREN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("paren pattern"));

const TRAILING_PUNCTUATION: &[char] = &['.', '?', '!', ':', ',', ';'];

pub fn is_scripture_reading(line: &str) -> bool {
    line.starts_with(SCRIPTURE_READING)
}

pub fn remove_trailing_punctuation(line: &str) -> &str {
    line.trim().trim_end_matches(TRAILING_PUNCTUATION)
}

/// 去掉 `cf.` 與 `, footnote ...` 這類不屬於參照的字
pub fn remove_words(candidate: &str) -> String {
    let cleaned = candidate.replace("cf.", "");
    let cleaned = cleaned.trim();
    match cleaned.split_once(", footnote") {
        Some((head, _)) => head.trim().to_string(),
        None => cleaned.to_string(),
    }
}

pub fn is_reference(candidate: &str) -> bool {
    let candidate = remove_words(candidate);
    VERSE_PATTERN.is_match(&candidate) || V_PATTERN.is_match(&candidate)
}

/// 行尾以破折號接參照，例如 `The Lord is the word of God. - John 1:1`。
/// 回傳的位置以去掉頭尾空白與結尾標點後的字串為準。
pub fn find_dash_before_reference(line: &str) -> Option<usize> {
    let line = remove_trailing_punctuation(line);

    for (index, _) in line.match_indices('-') {
        let candidates: Vec<&str> = line[index + 1..].trim().split("; ").collect();
        if candidates.iter().all(|c| is_reference(c)) {
            tracing::debug!("Found a reference after dash: {:?}", candidates);
            return Some(index);
        }
        tracing::debug!("Not a reference: {:?}", candidates);
    }

    None
}

/// 括號中的參照，例如 `The Lord is the word of God (John 1:1-2).`
pub fn find_references_in_paren(line: &str) -> Vec<String> {
    let mut result = Vec::new();

    for caps in PAREN_PATTERN.captures_iter(line) {
        for candidate in caps[1].trim().split("; ") {
            if is_reference(candidate) {
                result.push(candidate.to_string());
            } else {
                tracing::debug!("Not a reference in paren: {}", candidate);
            }
        }
    }

    result
}

/// 一行文字中的參照群組，尚未補齊書卷與章數
pub fn references_in_line(line: &str) -> Vec<String> {
    let split_groups = |text: &str| -> Vec<String> {
        text.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };

    if is_scripture_reading(line) {
        return split_groups(&line[SCRIPTURE_READING.len()..]);
    }

    if let Some(dash) = find_dash_before_reference(line) {
        let stripped = remove_trailing_punctuation(line);
        return split_groups(remove_trailing_punctuation(&stripped[dash + 1..]));
    }

    find_references_in_paren(line)
}

/// 記住上一個書卷與章數，用來補齊 `v. 5`、`4:1`、`11` 這類省略寫法
#[derive(Debug, Default, Clone)]
pub struct ReferenceResolver {
    last_book: Option<String>,
    last_chapter: Option<String>,
}

impl ReferenceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以逗號分隔的一組參照
    pub fn resolve(&mut self, references: &str) -> Vec<String> {
        let mut result = Vec::new();

        for item in references.split(',') {
            let stripped = item.trim();
            if stripped.is_empty() {
                continue;
            }

            let mut book = self.last_book.clone();
            let mut chapter = self.last_chapter.clone();
            let stripped = remove_words(stripped);

            let verse = if V_PATTERN.is_match(&stripped) {
                match stripped.split_once(' ') {
                    Some((_, verse)) => verse.to_string(),
                    None => continue,
                }
            } else if VERSE_PATTERN.is_match(&stripped) {
                let chapter_and_verse = match stripped.rsplit_once(' ') {
                    Some((b, cv)) => {
                        book = Some(b.to_string());
                        cv
                    }
                    None => stripped.as_str(),
                };
                match chapter_and_verse.split_once(':') {
                    Some((c, v)) => {
                        chapter = Some(c.to_string());
                        v.to_string()
                    }
                    None => chapter_and_verse.to_string(),
                }
            } else {
                tracing::warn!("Can't parse: '{}', ignoring.", item.trim());
                continue;
            };

            let (Some(b), Some(c)) = (book.as_deref(), chapter.as_deref()) else {
                tracing::warn!("No book or chapter to complete '{}', ignoring.", stripped);
                continue;
            };

            result.push(format!("{} {}:{}", b, c, verse));
            self.last_book = book;
            self.last_chapter = chapter;
        }

        result
    }

    pub fn resolve_all<I, S>(&mut self, groups: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        groups
            .into_iter()
            .flat_map(|group| self.resolve(group.as_ref()))
            .collect()
    }
}
