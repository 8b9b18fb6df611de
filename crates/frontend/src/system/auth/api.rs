use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B, what: &str) -> Result<Response, String> {
    let response = builder
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("{} failed: {}", what, response.status()));
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Login with username and password. The response carries the grant list.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    let response = send_json(Request::post(&api_url("/api/system/auth/login")), &request, "Login").await?;
    parse(response).await
}

/// Refresh access token using refresh token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };
    let response = send_json(Request::post(&api_url("/api/system/auth/refresh")), &request, "Refresh").await?;
    parse(response).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };
    send_json(Request::post(&api_url("/api/system/auth/logout")), &request, "Logout").await?;
    Ok(())
}

/// Get current user info
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    fetch_with_auth("/api/system/auth/me", access_token).await
}

/// GET with bearer token
pub async fn fetch_with_auth<T>(path: &str, access_token: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(&api_url(path))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    parse(response).await
}

/// PUT/POST/DELETE with bearer token and JSON body, response body ignored
pub async fn send_with_auth<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    access_token: &str,
) -> Result<(), String> {
    let builder = builder.header("Authorization", &format!("Bearer {}", access_token));
    send_json(builder, body, "Request").await?;
    Ok(())
}

/// DELETE with bearer token
pub async fn delete_with_auth(path: &str, access_token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete failed: {}", response.status()));
    }
    Ok(())
}
