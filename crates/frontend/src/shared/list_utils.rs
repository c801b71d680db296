//! Catalog search: case-insensitive substring filtering and match highlighting.

use contracts::domain::a001_catalog::{Category, Program};
use leptos::prelude::*;

pub trait Searchable {
    /// `filter` is already lowercased and trimmed.
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for Program {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.short_description.to_lowercase().contains(filter)
    }
}

impl Searchable for Category {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
    }
}

fn normalize(filter: &str) -> String {
    filter.trim().to_lowercase()
}

/// Categories visible for `filter`. Matching programs take precedence: a
/// category keeps only those. A category with no matching program is kept
/// whole when its own name matches, and dropped otherwise. An empty filter
/// keeps everything.
pub fn filter_categories(categories: &[Category], filter: &str) -> Vec<Category> {
    let filter = normalize(filter);
    if filter.is_empty() {
        return categories.to_vec();
    }

    categories
        .iter()
        .filter_map(|category| {
            let programs: Vec<Program> = category
                .programs
                .iter()
                .filter(|p| p.matches_filter(&filter))
                .cloned()
                .collect();
            if !programs.is_empty() {
                return Some(Category {
                    programs,
                    ..category.clone()
                });
            }
            category.matches_filter(&filter).then(|| category.clone())
        })
        .collect()
}

/// Highlights case-insensitive matches of `filter` in `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = normalize(filter);
    let text_lower = text.to_lowercase();

    // Lowercasing may change byte lengths outside ASCII; offsets would not line up.
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search programs...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="button button--icon search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: &str, name: &str, short: &str) -> Program {
        let mut p = Program::new_placeholder();
        p.id = id.into();
        p.name = name.into();
        p.short_description = short.into();
        p
    }

    fn catalog() -> Vec<Category> {
        vec![
            Category {
                id: "c1".into(),
                name: "Tools".into(),
                programs: vec![
                    program("p1", "My App", "Edits photos"),
                    program("p2", "Zipper", "Compresses files"),
                ],
            },
            Category {
                id: "c2".into(),
                name: "Games".into(),
                programs: vec![program("p3", "Chess", "Board game")],
            },
        ]
    }

    fn ids(categories: &[Category]) -> Vec<Vec<&str>> {
        categories
            .iter()
            .map(|c| c.programs.iter().map(|p| p.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(filter_categories(&catalog(), "   "), catalog());
    }

    #[test]
    fn test_matches_name_or_short_description_case_insensitively() {
        assert_eq!(ids(&filter_categories(&catalog(), "MY app")), vec![vec!["p1"]]);
        assert_eq!(ids(&filter_categories(&catalog(), "compress")), vec![vec!["p2"]]);
        assert_eq!(ids(&filter_categories(&catalog(), "board")), vec![vec!["p3"]]);
    }

    #[test]
    fn test_category_name_match_keeps_whole_category() {
        let result = filter_categories(&catalog(), "tool");
        assert_eq!(ids(&result), vec![vec!["p1", "p2"]]);
    }

    #[test]
    fn test_matching_programs_win_over_category_name() {
        let mut categories = catalog();
        categories[0].programs.push(program("p4", "Toolbox", "Many small tools"));

        let result = filter_categories(&categories, "tool");

        assert_eq!(ids(&result), vec![vec!["p4"]]);
        assert_eq!(result[0].name, "Tools");
    }

    #[test]
    fn test_no_match_drops_everything() {
        assert!(filter_categories(&catalog(), "nothing like this").is_empty());
    }
}
