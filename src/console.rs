//! Browser console logging.
//!
//! `log!` and `warn!` take `format!` arguments. On wasm32 they forward to
//! `console.log` / `console.warn`; on native targets (unit tests) the
//! message is formatted and dropped, since the JS bindings panic
//! outside a browser.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}

macro_rules! warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format!($($arg)*);
    }};
}
