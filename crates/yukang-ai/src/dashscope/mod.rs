//! Alibaba DashScope text-generation client.
//!
//! Implements the `AiClient` trait for Qwen models via the DashScope
//! `aigc/text-generation/generation` endpoint with bearer-token auth.

mod api;
mod client;
mod config;

pub use client::DashScopeClient;
pub use config::DashScopeConfig;
