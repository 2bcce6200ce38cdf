//! Semantic action IDs for the self-assessment screen.

// ── Question view ────────────────────────────────────────────
pub const OPTION_BASE: u16 = 400; // +option index 0..4

// ── Results view ─────────────────────────────────────────────
pub const RETRY: u16 = 410;
