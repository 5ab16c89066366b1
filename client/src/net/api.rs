//! REST helpers for the optional profile and visitor-count enrichments.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the backend is only
//! contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of errors; pages fall back to their
//! hardcoded defaults and the failure is only logged to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Profile;
#[cfg(feature = "hydrate")]
use super::types::VisitorCount;

/// Backend origin plus `/api` prefix. Override at build time with
/// `PORTFOLIO_API_BASE`.
pub const API_BASE: &str = match option_env!("PORTFOLIO_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000/api",
};

fn api_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn contact_endpoint() -> String {
    api_url(API_BASE, "contact")
}

pub fn profile_endpoint() -> String {
    api_url(API_BASE, "profile")
}

pub fn visitor_count_endpoint() -> String {
    api_url(API_BASE, "visitor-count")
}

/// Fetch the owner profile from `/profile`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_profile() -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(&profile_endpoint()).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("profile request failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("profile request failed: {}", resp.status());
            return None;
        }
        resp.json::<Profile>()
            .await
            .inspect_err(|e| log::warn!("profile parse failed: {e}"))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the visitor counter from `/visitor-count`.
///
/// The backend increments the counter on every call, so pages fetch it once
/// per mount.
pub async fn fetch_visitor_count() -> Option<u64> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&visitor_count_endpoint())
            .send()
            .await
            .inspect_err(|e| log::warn!("visitor count request failed: {e}"))
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<VisitorCount>().await.ok().map(|c| c.visitor_count)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
