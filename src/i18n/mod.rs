// SPDX-License-Identifier: MIT
//! Internationalization (i18n) support for the application.
//!
//! Labels, dialog texts and help content are resolved through Fluent bundles
//! embedded at compile time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when a locale or a key is missing

pub mod fluent;
