use cardsort_core::formatting::{count_label, format_duration};
use cardsort_core::models::Sort;

/// Render sorts as a plain-text report, one block per board.
pub fn render_text(sorts: &[Sort]) -> String {
    let mut out = String::new();
    for sort in sorts {
        out.push_str(&format!(
            "{}  ({}, {}, {})\n",
            sort.name,
            format_duration(sort.duration),
            count_label(sort.groups.len(), "group"),
            count_label(sort.card_count(), "card"),
        ));
        for group in &sort.groups {
            let cards: Vec<String> = group.cards.iter().map(ToString::to_string).collect();
            out.push_str(&format!("  {}: {}\n", group.name, cards.join(", ")));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} total\n", count_label(sorts.len(), "sort")));
    out
}

/// Render sorts as a pretty-printed JSON array.
pub fn render_json(sorts: &[Sort]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sorts)
}
