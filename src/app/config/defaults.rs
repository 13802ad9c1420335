// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window size
//! - **Layout**: Content width of the landing page
//! - **Notifications**: Toast stacking and auto-dismiss timing

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Maximum width of the centered page column.
pub const CONTENT_MAX_WIDTH: f32 = 1080.0;

/// Cards per row in the feature, privacy and pricing grids.
pub const GRID_COLUMNS: usize = 3;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Maximum number of toasts visible at once; the rest wait in a queue.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Auto-dismiss delay for success and info toasts (in seconds).
pub const SUCCESS_DISMISS_SECS: u64 = 3;

/// Auto-dismiss delay for warning toasts (in seconds).
pub const WARNING_DISMISS_SECS: u64 = 5;

/// Tick interval while toasts are visible (in milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
    assert!(CONTENT_MAX_WIDTH > MIN_WINDOW_WIDTH);
    assert!(GRID_COLUMNS > 0);
    assert!(MAX_VISIBLE_NOTIFICATIONS > 0);
    assert!(WARNING_DISMISS_SECS >= SUCCESS_DISMISS_SECS);
    assert!(NOTIFICATION_TICK_MS < SUCCESS_DISMISS_SECS * 1000);
};
