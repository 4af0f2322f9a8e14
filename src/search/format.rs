//! Output text rendering
//!
//! The strings produced here are a compatibility surface: downstream chat
//! consumers match on them, so they are reproduced byte-for-byte.

use crate::search::filter::SearchResult;

/// Prompt returned when the keyword is empty or whitespace-only
pub const MSG_EMPTY_KEYWORD: &str = "请输入搜索关键词。";

/// Renders the final result text for a keyword
///
/// With no results, a "nothing found" message naming the keyword; otherwise a
/// header line followed by one numbered line per result.
///
/// # Arguments
///
/// * `keyword` - The trimmed search keyword
/// * `results` - Filtered results in display order
///
/// # Example
///
/// ```
/// use pansearch::search::{render_results, SearchResult};
///
/// let results = vec![SearchResult {
///     provider: "百度网盘".to_string(),
///     title: "流浪地球4K".to_string(),
///     url: "https://pan.baidu.com/s/abc123".to_string(),
/// }];
/// assert_eq!(
///     render_results("流浪地球", &results),
///     "搜索关键词：流浪地球\n1. 【百度网盘】流浪地球4K - https://pan.baidu.com/s/abc123"
/// );
/// ```
pub fn render_results(keyword: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("未找到与“{}”相关的资源。", keyword);
    }

    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(format!("搜索关键词：{}", keyword));
    for (index, result) in results.iter().enumerate() {
        lines.push(format!(
            "{}. 【{}】{} - {}",
            index + 1,
            result.provider,
            result.title,
            result.url
        ));
    }
    lines.join("\n")
}
