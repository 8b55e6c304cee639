//! Core types and the layout engine for the planbook ecosystem.
//!
//! This crate provides everything needed to turn a set of scheduled items
//! into renderable geometry for a day/week calendar view:
//! - `item`: `ScheduledItem` and interval sanitization
//! - `layout`: the layout pipeline (segmentation, overlap grouping, lane
//!   assignment, geometry, responsive reflow)
//! - `config`: engine tunables and the user preference file
//! - `ics`: import adapter for `.ics` files
//!
//! The pipeline is a pure function of its inputs. It runs synchronously and
//! never raises from layout itself, and derived values come back as new
//! objects instead of being written onto caller-owned data.

pub mod config;
pub mod constants;
pub mod error;
pub mod ics;
pub mod item;
pub mod layout;

// Re-export the most commonly used types at crate root for convenience
pub use config::{LayoutConfig, Preferences};
pub use error::{PlanbookError, PlanbookResult};
pub use item::{ItemKind, ScheduledItem, TimeSpan};
pub use layout::{layout_day, layout_days, DayLayout, PlacedItem, Viewport};
