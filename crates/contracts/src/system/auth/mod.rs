use crate::shared::navigation::SessionFlags;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
    /// Raw grant list, `[{"module": .., "action": ..}]`. Kept untyped so a
    /// malformed payload degrades to "no permissions" instead of a failed login.
    #[serde(default)]
    pub permissions: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub provider_only: bool,
}

impl UserInfo {
    pub fn session_flags(&self) -> SessionFlags {
        SessionFlags {
            provider_only: self.provider_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::access::AccessEvaluator;

    #[test]
    fn test_login_response_without_permissions() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "access_token": "a",
                "refresh_token": "r",
                "user": {"id": "1", "username": "root", "full_name": null, "email": null}
            }"#,
        )
        .unwrap();
        assert!(!response.user.provider_only);
        assert!(response.permissions.is_null());
        assert!(AccessEvaluator::from_grant_value(&response.permissions).is_fail_closed());
    }

    #[test]
    fn test_provider_flag_maps_to_session_flags() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id": "2", "username": "p", "full_name": null, "email": null, "provider_only": true}"#,
        )
        .unwrap();
        assert!(user.session_flags().provider_only);
    }
}
