//! Feed Endpoint Configuration
//!
//! Resolves the relay's WebSocket URL: a runtime override in local storage
//! wins over the build-time `ASSETBOARD_WS_URL`, which wins over the default.

/// Default feed URL
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws";

/// Local storage key for the runtime override
pub const WS_URL_STORAGE_KEY: &str = "assetboard_ws_url";

/// Get the feed URL for this page load
pub fn get_feed_url() -> String {
    resolve_feed_url(stored_feed_url(), option_env!("ASSETBOARD_WS_URL"))
}

fn stored_feed_url() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(WS_URL_STORAGE_KEY).ok()?
}

/// Pick the first configured URL and normalize it
pub fn resolve_feed_url(stored: Option<String>, build_time: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .or_else(|| build_time.filter(|url| !url.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_WS_URL.to_string());

    // Normalize: remove trailing slash
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(resolve_feed_url(None, None), "ws://localhost:8000/ws");
    }

    #[test]
    fn test_stored_url_wins() {
        let url = resolve_feed_url(
            Some("wss://relay.example.com/ws".to_string()),
            Some("ws://build:9000/ws"),
        );
        assert_eq!(url, "wss://relay.example.com/ws");
    }

    #[test]
    fn test_build_time_url_used_without_override() {
        assert_eq!(resolve_feed_url(None, Some("ws://build:9000/ws")), "ws://build:9000/ws");
        assert_eq!(
            resolve_feed_url(Some("  ".to_string()), Some("ws://build:9000/ws")),
            "ws://build:9000/ws"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            resolve_feed_url(Some("ws://localhost:8000/ws/".to_string()), None),
            "ws://localhost:8000/ws"
        );
    }
}
