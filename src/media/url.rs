//! Image locator helpers.
//!
//! Cache busting appends `t=<millis>` so the host refetches a resource that
//! changed under the same path (e.g. a freshly uploaded avatar).

use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;

use crate::config::MediaConfig;

/// Milliseconds since the Unix epoch, `0` if the clock is before it.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

fn is_absolute_http(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

fn is_local(url: &str, config: &MediaConfig) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .is_some_and(|host| config.local_hosts.iter().any(|l| l == host)),
        Err(_) => config.local_hosts.iter().any(|l| url.contains(l.as_str())),
    }
}

/// Append a cache buster to `url`.
///
/// Left untouched: empty URLs, and absolute http(s) URLs or default-avatar
/// URLs that don't point at a local host.
pub fn add_cache_buster(url: &str, now_ms: u64, config: &MediaConfig) -> String {
    if url.is_empty() {
        return String::new();
    }

    let names_avatar = default_avatar_stem(&config.default_avatar).is_some_and(|stem| url.contains(stem));
    let exempt = names_avatar || is_absolute_http(url);
    if exempt && !is_local(url, config) {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, now_ms)
}

/// Resolve an image locator, falling back to the default avatar.
pub fn resolve_image_url(url: Option<&str>, force_bust: bool, now_ms: u64, config: &MediaConfig) -> String {
    match url {
        None | Some("") => config.default_avatar.clone(),
        Some(url) if force_bust => add_cache_buster(url, now_ms, config),
        Some(url) => url.to_string(),
    }
}

/// `"/default-avatar.png"` → `Some("default-avatar")`; `None` when the
/// locator has no file name (e.g. `"/avatars/"`).
pub(crate) fn default_avatar_stem(default_avatar: &str) -> Option<&str> {
    let name = default_avatar.rsplit('/').next().unwrap_or(default_avatar);
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    };
    (!stem.is_empty()).then_some(stem)
}
