#![forbid(unsafe_code)]

//! Data model for the VDU display engine.
//!
//! `vdu-core` holds the plain types shared between the display context and
//! its collaborators: pixel geometry, cursor behaviour flags, font metrics,
//! colors, and the tagged selectors that replace the raw "active" pointers
//! of a classic firmware design.
//!
//! # Design principles
//!
//! - **No I/O**: all types are pure data + arithmetic.
//! - **Saturating coordinates**: cursor math clamps at the representable
//!   pixel range instead of wrapping.
//! - **`#![forbid(unsafe_code)]`**: safety enforced at compile time.

pub mod behaviour;
pub mod color;
pub mod font;
pub mod geometry;
pub mod processor;
pub mod selector;

pub use behaviour::CursorBehaviour;
pub use color::Rgb;
pub use font::FontMetrics;
pub use geometry::{Point, Viewport};
pub use processor::{KeyModifiers, PauseRequest};
pub use selector::{CursorType, ViewportType};
