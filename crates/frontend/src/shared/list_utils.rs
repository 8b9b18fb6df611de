/// Утилиты списков: поле поиска с debounce, подсветка совпадений, индикатор сортировки
use contracts::shared::grid::SortState;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка перед применением поискового запроса, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    // Позиции ищем в нижнем регистре; если длина в байтах поменялась, не подсвечиваем
    let haystack = text.to_lowercase();
    if haystack.len() != text.len() || !haystack.contains(&needle) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }

        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <span class="search-highlight">{text[start..end].to_string()}</span> }
                .into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Индикатор сортировки для заголовка колонки
pub fn sort_indicator(sort: Option<&SortState>, key: &str) -> &'static str {
    match sort {
        Some(s) if s.key == key => {
            if s.ascending {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => " ⇅",
    }
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Применённое значение (после debounce)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // drop() отменяет предыдущий таймер
        pending.set_value(None);
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Очистить" on:click=clear>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState {
            key: "name".into(),
            ascending: false,
        };
        assert_eq!(sort_indicator(Some(&sort), "name"), " ▼");
        assert_eq!(sort_indicator(Some(&sort), "email"), " ⇅");
        assert_eq!(sort_indicator(None, "name"), " ⇅");
    }
}
