use contracts::shared::grid::field_text;
use leptos::prelude::*;
use serde_json::{Number, Value};

use crate::shared::modal::Modal;

/// Форма редактирования плоских полей записи в модальном окне
#[component]
pub fn RecordEditor(
    #[prop(into)] title: String,
    /// (ключ, подпись) редактируемых полей
    fields: Vec<(String, String)>,
    /// Исходная запись; `{}` для новой
    record: Value,
    on_save: Callback<Value>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(record);

    view! {
        <Modal title=title on_close=on_close>
            <form
                class="record-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_save.run(draft.get_untracked());
                }
            >
                {fields
                    .into_iter()
                    .map(|(key, label)| {
                        let key_for_value = key.clone();
                        view! {
                            <label class="record-form__field">
                                <span class="record-form__label">{label}</span>
                                <input
                                    type="text"
                                    class="record-form__input"
                                    prop:value=move || draft.with(|d| field_text(d, &key_for_value))
                                    on:input=move |ev| {
                                        let text = event_target_value(&ev);
                                        draft.update(|d| set_field(d, &key, text));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <div class="record-form__actions">
                    <button type="submit" class="button button--primary">"Сохранить"</button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Отмена"
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Пишет текст в поле верхнего уровня; числовые поля остаются числами, пока текст разбирается
fn set_field(record: &mut Value, key: &str, text: String) {
    if !record.is_object() {
        *record = Value::Object(Default::default());
    }
    let Some(map) = record.as_object_mut() else {
        return;
    };
    let was_number = map.get(key).is_some_and(Value::is_number);
    let number = if was_number {
        text.trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
    } else {
        None
    };
    let value = match number {
        Some(n) => Value::Number(n),
        None => Value::String(text),
    };
    map.insert(key.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_field_keeps_numbers_numeric() {
        let mut record = json!({"name": "Cut", "price": 10});
        set_field(&mut record, "price", "12.5".to_string());
        set_field(&mut record, "name", "Haircut".to_string());
        assert_eq!(record, json!({"name": "Haircut", "price": 12.5}));

        set_field(&mut record, "price", "free".to_string());
        assert_eq!(record["price"], json!("free"));
    }

    #[test]
    fn test_set_field_on_new_record() {
        let mut record = Value::Null;
        set_field(&mut record, "title", "Spring".to_string());
        assert_eq!(record, json!({"title": "Spring"}));
    }
}
