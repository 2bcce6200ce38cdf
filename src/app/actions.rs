//! Semantic action IDs owned by the shell. Screens use 100 and up.

// ── Bottom tab bar ───────────────────────────────────────────
pub const TAB_BASE: u16 = 1; // +Tab::index 0..4

// ── Drawer ───────────────────────────────────────────────────
pub const TOGGLE_DRAWER: u16 = 9;
pub const DRAWER_ITEM_BASE: u16 = 10; // +Tab::index 0..4
pub const LOGOUT: u16 = 19;
