use contracts::system::users::{DeleteUsersDto, UpdateUserStatusDto, User};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::system::auth::api::{fetch_with_auth, send_with_auth};

pub async fn fetch_users(access_token: &str) -> Result<Vec<User>, String> {
    fetch_with_auth("/api/system/users", access_token).await
}

pub async fn update_status(dto: UpdateUserStatusDto, access_token: &str) -> Result<(), String> {
    let url = api_url(&format!("/api/system/users/{}/status", dto.id));
    send_with_auth(Request::put(&url), &dto, access_token).await
}

/// Bulk delete in one request
pub async fn delete_users(ids: Vec<String>, access_token: &str) -> Result<(), String> {
    let dto = DeleteUsersDto { ids };
    send_with_auth(Request::post(&api_url("/api/system/users/delete")), &dto, access_token).await
}
