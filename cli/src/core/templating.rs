//! # StockChat Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Renders the browser chat widget served by `stockchat srv`. The page source
//! is embedded in the binary at compile time (`cli/assets/widget.html.tera`)
//! and rendered once at server startup with the Tera templating engine, so
//! the page title and the reply delay come from the effective configuration.
//!
//! ## Examples
//!
//! ```rust
//! let html = templating::render_widget_page(&WidgetContext {
//!     title: "Stock Assistant".into(),
//!     reply_delay_ms: 600,
//! })?;
//! ```
//!
use crate::chat::Role;
use crate::core::error::{Result, StockchatError};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

/// Embedded widget page template.
const WIDGET_TEMPLATE: &str = include_str!("../../assets/widget.html.tera");

/// Values injected into the widget page.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetContext {
    pub title: String,
    pub reply_delay_ms: u64,
}

/// # Render Widget Page (`render_widget_page`)
///
/// Renders the embedded widget template with HTML autoescaping enabled.
/// Avatar image names come from `Role::avatar`.
///
/// ## Errors
///
/// Returns `StockchatError::Template` if the template fails to parse or render.
pub fn render_widget_page(ctx: &WidgetContext) -> Result<String> {
    let mut context = Context::from_serialize(ctx).map_err(StockchatError::from)?;
    context.insert("user_avatar", Role::User.avatar());
    context.insert("assistant_avatar", Role::Assistant.avatar());
    let html = Tera::one_off(WIDGET_TEMPLATE, &context, true).map_err(StockchatError::from)?;
    debug!("Rendered widget page ({} bytes)", html.len());
    Ok(html)
}
