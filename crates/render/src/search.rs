use fetch::SearchResult;
use tracing::debug;

use crate::html::{escape_html, format_relevance};
use crate::region::Region;

pub const NO_RESULTS: &str = "No results found.";

pub fn render_search_result(result: &SearchResult) -> String {
    format!(
        r#"<div class="search-result-item"><h3>{}</h3><span class="type">{}</span><p>{}</p><div class="relevance">Relevance: {}</div></div>"#,
        escape_html(&result.title),
        escape_html(&result.kind),
        escape_html(&result.description),
        format_relevance(result.relevance_score)
    )
}

pub fn render_search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("<p>{}</p>", NO_RESULTS);
    }
    let items: String = results.iter().map(render_search_result).collect();
    format!(r#"<div class="search-results">{}</div>"#, items)
}

/// Renders the results and makes the (initially hidden) region visible,
/// including when there is nothing to show.
pub fn display_search_results(region: &mut Region, results: &[SearchResult]) {
    debug!(count = results.len(), "Rendering search results");
    region.set_content("", render_search_results(results));
    region.show();
}
