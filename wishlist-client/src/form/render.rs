//! Declarative rendering of search results
//!
//! Surfaces build their result table from these rows instead of
//! concatenating markup themselves.

use shared::Wishlist;

/// Column headers for the search-result table
pub const RESULT_HEADER: [&str; 3] = ["ID", "Name", "CustomerEmail"];

/// One text row per record, in response order
pub fn result_rows(records: &[Wishlist]) -> Vec<[String; 3]> {
    records
        .iter()
        .map(|w| [w.id.to_string(), w.name.clone(), w.email.clone()])
        .collect()
}

/// Plain-text table for line-oriented surfaces.
///
/// Zero records renders the header line alone.
pub fn render_table(records: &[Wishlist]) -> String {
    let mut out = RESULT_HEADER.join("\t");
    for row in result_rows(records) {
        out.push('\n');
        out.push_str(&row.join("\t"));
    }
    out
}
