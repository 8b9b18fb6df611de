use contracts::shared::navigation::NavMenuConfig;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Страница, открытая во вкладке
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Ключ маршрута из меню, например "admin_roles"
    pub key: String,
    pub title: String,
}

/// Состояние рабочей области: открытые вкладки, активная вкладка, видимость меню
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Открывает вкладку из `?active=` и дальше держит адресную строку в синхроне
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let initial = params
            .get("active")
            .cloned()
            .unwrap_or_else(|| "home".to_string());
        self.open_tab(&initial, &title_for_key(&initial));

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key)]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        log::debug!("activate tab '{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let next = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

/// Заголовок вкладки по ключу маршрута: подпись пункта меню либо сам ключ
pub fn title_for_key(key: &str) -> String {
    NavMenuConfig::default_menu()
        .find_route(key)
        .map(|node| node.label.clone())
        .unwrap_or_else(|| key.to_string())
}
