// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a toast notification engine for applications built with
//! the Iced GUI framework.
//!
//! The core is a renderer-agnostic lifecycle manager: notifications queue
//! before the surface is ready, replace each other by tag, and auto-hide
//! under a bounded number of concurrent countdowns. The `ui` module layers
//! ready-made Iced overlay widgets on top.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod test_utils;
pub mod ui;
