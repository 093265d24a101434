// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the console messages.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Locale selection from the CLI or the config file; the OS locale is not consulted
//! - Translation files embedded at compile time from `assets/i18n/*.ftl`
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;

pub use fluent::I18n;
