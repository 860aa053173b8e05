// SPDX-License-Identifier: MIT
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window dimensions
//! - **Display**: Fixed image display area
//! - **Feedback**: Button feedback pulse timing
//! - **Categories**: Number of category slots and grid breakpoints

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width when no size is configured.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1200;

/// Default window height when no size is configured.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 730;

/// Smallest window width accepted from the config file.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Smallest window height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Width of the fixed image display area in pixels.
pub const IMAGE_DISPLAY_WIDTH: u32 = 576;

/// Height of the fixed image display area in pixels.
pub const IMAGE_DISPLAY_HEIGHT: u32 = 360;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Default duration of the button feedback pulse (milliseconds).
pub const DEFAULT_PULSE_MS: u64 = 50;

/// Minimum feedback pulse duration (milliseconds).
pub const MIN_PULSE_MS: u64 = 10;

/// Maximum feedback pulse duration (milliseconds).
pub const MAX_PULSE_MS: u64 = 500;

/// Tick interval used while a feedback pulse is pending (milliseconds).
pub const PULSE_TICK_MS: u64 = 16;

// ==========================================================================
// Category Defaults
// ==========================================================================

/// Number of category slots, bound to the digit keys 1-9.
pub const CATEGORY_SLOTS: usize = 9;

/// Below this window width the category grid collapses to a single column.
pub const GRID_SINGLE_COLUMN_BELOW: f32 = 560.0;

/// At or above this window width all category buttons share one row.
pub const GRID_SINGLE_ROW_FROM: f32 = 1900.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_default_lies_within_bounds() {
        assert!((MIN_PULSE_MS..=MAX_PULSE_MS).contains(&DEFAULT_PULSE_MS));
        assert!(PULSE_TICK_MS < DEFAULT_PULSE_MS);
    }

    #[test]
    fn default_window_fits_display_area() {
        assert!(DEFAULT_WINDOW_WIDTH > IMAGE_DISPLAY_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT > IMAGE_DISPLAY_HEIGHT);
        assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn grid_breakpoints_are_ordered() {
        assert!(GRID_SINGLE_COLUMN_BELOW < GRID_SINGLE_ROW_FROM);
    }
}
