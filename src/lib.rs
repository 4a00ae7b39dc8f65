// SPDX-License-Identifier: MPL-2.0
//! `snapgrid` is a small image capture and gallery app built with the Iced
//! GUI framework.
//!
//! Images are picked through a platform gateway, collected in an in-memory
//! session store, and browsed in a three-column grid with long-press
//! deletion. The crate also demonstrates internationalization with Fluent
//! and user preference management.

pub mod app;
pub mod collection;
pub mod config;
pub mod error;
pub mod gateway;
pub mod i18n;
pub mod test_utils;
pub mod ui;
