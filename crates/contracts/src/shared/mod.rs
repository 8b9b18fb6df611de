pub mod access;
pub mod action_gate;
pub mod grid;
pub mod navigation;
pub mod request_token;
