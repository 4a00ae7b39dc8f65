// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system: translation files are embedded at
//! build time, the locale is resolved from CLI, config, or system settings,
//! and strings are formatted at render time.

pub mod fluent;
