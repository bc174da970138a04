//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal:
//! - filter: Filter hotkeys, cycling and match counts
//! - formatting: Text wrapping and truncation in display columns
//! - freedom: Freedom level tiers and bar fill
//! - layout: Card stacking and scroll calculations
//! - navigation: Cursor selection with wrapping
//! - ui: Toast timing and small UI labels

pub mod filter;
pub mod formatting;
pub mod freedom;
pub mod layout;
pub mod navigation;
pub mod ui;
