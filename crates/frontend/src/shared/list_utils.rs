/// List helpers shared by the table widgets (match highlighting, sort markers).
use contracts::domain::order::pipeline::{SortDirection, SortKey, SortState};
use leptos::prelude::*;

/// Wraps every case-insensitive occurrence of `filter` inside `text` in a
/// highlighted span. Empty filters return the text untouched.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    if !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(
                view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any(),
            );
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! {
                <mark class="table__highlight">{text[actual_pos..match_end].to_string()}</mark>
            }
            .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Marker for a sortable column header. The active column shows its
/// direction, the rest show a neutral double arrow.
pub fn sort_indicator(sort: &SortState, key: SortKey) -> &'static str {
    match sort.key {
        Some(active) if active == key => match sort.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_indicator_tracks_active_key() {
        let mut sort = SortState::default();
        assert_eq!(sort_indicator(&sort, SortKey::Id), " ⇅");

        sort.toggle(SortKey::Id);
        assert_eq!(sort_indicator(&sort, SortKey::Id), " ▲");
        assert_eq!(sort_indicator(&sort, SortKey::User), " ⇅");

        sort.toggle(SortKey::Id);
        assert_eq!(sort_indicator(&sort, SortKey::Id), " ▼");
    }
}
