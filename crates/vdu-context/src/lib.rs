#![forbid(unsafe_code)]

//! Cursor/viewport engine for a serial-driven display coprocessor.
//!
//! `vdu-context` owns the stateful heart of the display terminal: an
//! explicit [`Context`] object tracking a text cursor and a graphics
//! cursor, their viewports, orientation behaviour, the visible (optionally
//! flashing) cursor overlay, and the paged-output row budget.
//!
//! # Primary responsibilities
//!
//! - **Normalization**: map raw cursor positions into an
//!   orientation-independent logical space ([`normalise`]).
//! - **Edge policy**: decide scroll vs wrap vs no-op when the cursor
//!   leaves the viewport.
//! - **Movement**: orientation-aware cursor motion (up/down/left/right,
//!   CR, home, tab, relative moves).
//! - **Presentation**: lifecycle of the XOR-composited cursor overlay.
//! - **Paged output**: row-budget flow control raising pause intents.
//!
//! # Concurrency contract
//!
//! The context is single-threaded by design: every operation takes
//! `&mut self` and the type holds no internal locking. Exactly one
//! consumer thread may drive it; producers communicate through
//! `vdu-queue`. The flash tick is an ordinary `&mut self` entry point and
//! is therefore serialized by construction.

pub mod backend;
pub mod context;
pub mod edges;
pub mod movement;
pub mod normalise;
pub mod overlay;
pub mod paging;
pub mod testing;

pub use backend::{BackendError, FontProvider, GraphicsBackend, OverlayHandle, ScrollDirection};
pub use context::Context;
pub use paging::PagedMode;
