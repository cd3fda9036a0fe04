//! HTML fragments for the search dropdown
//!
//! Every value taken from a record or an error message is escaped before it
//! is interpolated.

use crate::models::RankedResult;
use std::fmt::Write;

/// Fragment shown when a search yields nothing
pub const EMPTY_FRAGMENT: &str =
    r#"<div class="p-4 text-center text-gray-500">No suggestions found</div>"#;

/// Render ranked results as a list of suggestion items
pub fn render_results(results: &[RankedResult]) -> String {
    if results.is_empty() {
        return EMPTY_FRAGMENT.to_string();
    }

    let mut html = String::new();
    for result in results {
        render_item(&mut html, result);
    }
    html
}

fn render_item(html: &mut String, result: &RankedResult) {
    let record = &result.record;

    html.push_str(r#"<div class="p-4 border-b border-gray-200 suggestion-item">"#);
    // Writing into a String cannot fail
    let _ = write!(html, r#"<div class="font-medium">{}</div>"#, escape_html(&record.name));
    let _ = write!(
        html,
        r#"<div class="text-sm text-gray-600">Category: {}</div>"#,
        escape_html(&record.category)
    );

    if let Some(distance_km) = result.distance_km {
        let _ = write!(
            html,
            r#"<div class="text-xs text-gray-500">{:.2} km away</div>"#,
            distance_km
        );
    }

    if !record.tags.is_empty() {
        html.push_str(r#"<div class="mt-1 flex flex-wrap gap-1">"#);
        for tag in &record.tags {
            let _ = write!(
                html,
                r#"<span class="px-2 py-1 text-xs bg-gray-100 rounded-full">{}</span>"#,
                escape_html(tag)
            );
        }
        html.push_str("</div>");
    }

    html.push_str("</div>");
}

/// Render a user-visible error block
pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="p-4 text-center text-red-500">Error: {}</div>"#,
        escape_html(message)
    )
}

/// Escape the characters that are significant in HTML text and attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
