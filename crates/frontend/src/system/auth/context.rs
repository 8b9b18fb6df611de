use contracts::shared::access::AccessEvaluator;
use contracts::shared::navigation::SessionFlags;
use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session state shared through context.
///
/// `access` stays `None` until the grant list has been read and indexed;
/// nothing permission-dependent renders before that.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub access: Option<AccessEvaluator>,
}

impl AuthState {
    fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        // The only place the stored grant list is read.
        let access = AccessEvaluator::from_grant_source(storage::get_permissions_raw().as_deref());
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
            access: Some(access),
        }
    }

    pub fn session_flags(&self) -> SessionFlags {
        self.user_info
            .as_ref()
            .map(UserInfo::session_flags)
            .unwrap_or_default()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            // Validate token by fetching current user
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState::signed_in(access_token, user_info));
                }
                Err(e) => {
                    log::info!("session restore: {}, trying refresh", e);
                    let Some(refresh_token) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            let user_info = match api::get_current_user(&response.access_token).await {
                                Ok(user_info) => Some(user_info),
                                Err(_) => storage::get_user_info(),
                            };
                            if let Some(user_info) = user_info {
                                set_auth_state.set(AuthState::signed_in(response.access_token, user_info));
                            }
                        }
                        Err(_) => storage::clear_tokens(),
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Evaluator of the current session, `None` while grants are still loading
pub fn use_access() -> Signal<Option<AccessEvaluator>> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.access.clone()))
}

/// Helper: store a fresh login and switch the UI to the signed-in state
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_session(&response);
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));
}

/// Helper: Perform logout
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout: {}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState::default());

    Ok(())
}
