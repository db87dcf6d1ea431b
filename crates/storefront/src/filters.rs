//! Askama filters used by `base.html`.
//!
//! Both ignore their input; templates call them on an empty string.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Year for the footer copyright line, e.g. `{{ ""|current_year }}`.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

/// Fingerprint of `static/css/main.css`, set by `build.rs`.
///
/// Links the stylesheet as `main.{hash}.css` so a CSS change busts caches:
/// `{{ ""|css_hash }}`.
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
