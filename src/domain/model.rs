use url::{form_urlencoded, Url};

/// 一次 recver.php 查詢：經節參照加上輸出格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseQuery {
    pub reference: String,
}

impl VerseQuery {
    pub const OUTPUT_FORMAT: &'static str = "json";

    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// `<base>?String=<reference>&Out=json`，參照會經過 URL 編碼
    pub fn to_url(&self, base: &Url) -> Url {
        let params = format!(
            "String={}&Out={}",
            encode_component(&self.reference),
            Self::OUTPUT_FORMAT
        );
        let query = match base.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, params),
            _ => params,
        };

        let mut url = base.clone();
        url.set_query(Some(&query));
        url
    }
}

// 空白編成 %20 而不是 +；原本的 + 已被編成 %2B
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
