//! Balance Feed
//!
//! One WebSocket per mounted dashboard. Every text frame replaces the
//! balances; nothing is ever sent and a dropped connection is not retried.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use super::dashboard::DashboardState;

/// Anything the guard can close
pub trait FeedSocket {
    fn close(&self);
}

/// Browser socket together with the message handler it calls
pub struct BrowserSocket {
    ws: WebSocket,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
}

impl FeedSocket for BrowserSocket {
    fn close(&self) {
        self.ws.set_onmessage(None);
        if let Err(e) = self.ws.close() {
            web_sys::console::error_1(&format!("Failed to close balance feed: {:?}", e).into());
        }
    }
}

/// Owns an open feed and closes it exactly once
pub struct FeedGuard<S: FeedSocket> {
    socket: Option<S>,
}

impl<S: FeedSocket> FeedGuard<S> {
    pub fn new(socket: S) -> Self {
        Self {
            socket: Some(socket),
        }
    }

    /// Close the socket whatever its ready state; later calls do nothing
    pub fn release(&mut self) {
        if let Some(socket) = self.socket.take() {
            socket.close();
        }
    }
}

impl<S: FeedSocket> Drop for FeedGuard<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to open balance feed at {url}: {reason}")]
    Connect { url: String, reason: String },
}

/// Open the feed and route its frames into `state`
pub fn open_balance_feed(
    url: &str,
    state: DashboardState,
) -> Result<FeedGuard<BrowserSocket>, FeedError> {
    let ws = WebSocket::new(url).map_err(|e| FeedError::Connect {
        url: url.to_string(),
        reason: format!("{:?}", e),
    })?;

    let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
            let text: String = text.into();
            handle_frame(&state, &text);
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

    web_sys::console::log_1(&format!("Balance feed opened: {}", url).into());

    Ok(FeedGuard::new(BrowserSocket {
        ws,
        _on_message: on_message,
    }))
}

fn handle_frame(state: &DashboardState, text: &str) {
    match state.ingest_frame(text) {
        Ok(count) => {
            web_sys::console::log_1(&format!("Received {} balances", count).into());
        }
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeSocket {
        closes: Rc<Cell<u32>>,
    }

    impl FeedSocket for FakeSocket {
        fn close(&self) {
            self.closes.set(self.closes.get() + 1);
        }
    }

    fn guard() -> (FeedGuard<FakeSocket>, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let guard = FeedGuard::new(FakeSocket {
            closes: Rc::clone(&closes),
        });
        (guard, closes)
    }

    #[test]
    fn test_release_closes_once() {
        let (mut guard, closes) = guard();
        guard.release();
        guard.release();
        assert_eq!(closes.get(), 1);

        drop(guard);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_drop_closes() {
        let (guard, closes) = guard();
        drop(guard);
        assert_eq!(closes.get(), 1);
    }
}
