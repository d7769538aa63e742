//! Catalog Select Component
//!
//! Labelled dropdown over shop or category entries.

use leptos::prelude::*;

/// Build `(value, label)` option pairs, optionally led by an "all" entry.
pub fn select_options<'a>(
    entries: impl IntoIterator<Item = (u32, &'a str)>,
    all_label: Option<&str>,
) -> Vec<(String, String)> {
    let all = all_label.map(|label| (shopping_core::filter::ALL.to_string(), label.to_string()));
    all.into_iter()
        .chain(entries.into_iter().map(|(id, name)| (id.to_string(), name.to_string())))
        .collect()
}

/// Dropdown for catalog entries
///
/// # Arguments
/// * `selected` - Value of the option currently chosen
/// * `on_change` - Called with the raw option value
#[component]
pub fn CatalogSelect(
    #[prop(into)] label: String,
    options: Vec<(String, String)>,
    selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="catalog-select">
            <span class="select-label">{label}</span>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options.into_iter().map(|(value, text)| {
                    let is_selected = {
                        let value = value.clone();
                        move || selected.get() == value
                    };
                    view! {
                        <option value=value selected=is_selected>{text}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_with_all() {
        let options = select_options([(1, "Teknosa"), (2, "Eczane")], Some("All"));
        assert_eq!(
            options,
            vec![
                ("all".to_string(), "All".to_string()),
                ("1".to_string(), "Teknosa".to_string()),
                ("2".to_string(), "Eczane".to_string()),
            ]
        );
    }

    #[test]
    fn test_select_options_without_all() {
        let options = select_options([(6, "Kasap")], None);
        assert_eq!(options, vec![("6".to_string(), "Kasap".to_string())]);
    }
}
