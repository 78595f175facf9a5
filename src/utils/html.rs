use scraper::Html;

/// 將 HTML 片段轉為可見的純文字並去除首尾空白。空字串輸入回傳空字串。
pub fn strip_to_plain_text(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }

    let document = Html::parse_fragment(fragment);
    document
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
