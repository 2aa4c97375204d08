//! # STARDIAL UI
//!
//! The host-facing widget layer for the rating engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    WIDGET PIPELINE                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  PointerState → Hit Test → Interaction Policy → Response │
//! │       ↓             ↓              ↓              ↓      │
//! │   Hover Track   Star Index    stardial_core   Host Store │
//! │                                                          │
//! │  RatingState → icon_sequence → GlyphTable → Commands     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! The widget is a lens, not a database. It carries a snapshot of the
//! host's rating state for immediate redraw, and every change it makes is
//! also handed back in the [`widget::RowResponse`] for the host to persist.
//! Concrete glyphs never appear here; the [`render::GlyphTable`] maps the
//! closed icon-state enumeration to whatever the host draws.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use input::{PointerButton, PointerState};
pub use layout::{Rect, StarRowLayout};
pub use render::{GlyphId, GlyphTable, RenderCommand};
pub use style::{Color, StarStyle};
pub use widget::{DisplayOptions, RowResponse, StarRowWidget};
