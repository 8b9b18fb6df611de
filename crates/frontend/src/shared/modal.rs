use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Оверлей с карточкой; закрывается кликом по фону или кнопкой в заголовке
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_event = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    // Закрытие откладываем на следующий тик: оверлей удаляется во время своего же click
    let close_later = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| pressed_on_overlay.set(is_overlay_event(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && is_overlay_event(&ev);
                pressed_on_overlay.set(false);
                if close {
                    close_later();
                }
            }
        >
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                    <button class="modal__close" title="Закрыть" on:click=move |_| close_later()>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}

/// Список «поле: значение» для карточки записи
#[component]
pub fn FieldList(fields: Vec<(String, String)>) -> impl IntoView {
    view! {
        <dl class="field-list">
            {fields
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <dt class="field-list__label">{label}</dt>
                        <dd class="field-list__value">{value}</dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}
