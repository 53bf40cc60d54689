//! Core of the interactive dot field: a grid of points that spring back
//! to their origins and are pulled toward the cursor.
//!
//! Main components:
//! - [`field`] — grid construction over a viewport.
//! - [`point`] — a single dot with its fixed origin.
//! - [`simulator`] — per-frame physics update and drawing.
//! - [`animation`] — owned state driven by frame and input callbacks.
//! - [`cursor`] — pointer position with an "away" sentinel.
//! - [`debounce`] — cancel-and-restart timer for resize coalescing.
//! - [`surface`] — the drawing capability the core renders into.
//! - [`media`] — random playlist pick and click-to-cycle pictures.
//! - [`config`] / [`error`] — tunable parameters and their loading errors.
//! - [`types`] — shared type aliases.

pub mod animation;
pub mod config;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod field;
pub mod media;
pub mod point;
pub mod simulator;
pub mod surface;
pub mod types;
