//! REST calls for schema-less list pages.
//!
//! Every resource follows the same layout:
//! `GET {base}` list, `POST {base}` create, `PUT {base}/{id}` update,
//! `PUT {base}/{id}/status` status change, `DELETE {base}/{id}` delete.

use gloo_net::http::Request;
use serde_json::{json, Value};

use crate::system::auth::api::{delete_with_auth, fetch_with_auth, send_with_auth};
use crate::shared::api_utils::api_url;

/// Fetch all records; accepts a bare array or `{"data": [...]}`
pub async fn fetch_records(base: &str, access_token: &str) -> Result<Vec<Value>, String> {
    let body: Value = fetch_with_auth(base, access_token).await?;
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err("Unexpected response: no data array".to_string()),
        },
        _ => Err("Unexpected response: not a list".to_string()),
    }
}

pub async fn create_record(base: &str, record: &Value, access_token: &str) -> Result<(), String> {
    send_with_auth(Request::post(&api_url(base)), record, access_token).await
}

pub async fn update_record(base: &str, id: &str, record: &Value, access_token: &str) -> Result<(), String> {
    let url = api_url(&format!("{}/{}", base, id));
    send_with_auth(Request::put(&url), record, access_token).await
}

pub async fn set_record_status(base: &str, id: &str, status: &str, access_token: &str) -> Result<(), String> {
    let url = api_url(&format!("{}/{}/status", base, id));
    send_with_auth(Request::put(&url), &json!({ "status": status }), access_token).await
}

pub async fn delete_record(base: &str, id: &str, access_token: &str) -> Result<(), String> {
    delete_with_auth(&format!("{}/{}", base, id), access_token).await
}
