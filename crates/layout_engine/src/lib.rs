//! Layout Engine - Wall slot planning, placement, scaling, and composition
//!
//! This crate turns a gallery document into placement instructions for a
//! rendering surface: where each artwork hangs, how large it renders, and
//! where its frame and label sit. The engine is a pure function of its
//! inputs; it holds no scene state and every layout run is independent.
//!
//! The pipeline: room geometry from the size class, candidate wall slots
//! for the artwork count, artwork-to-slot assignment with collision
//! resolution, physical-to-render scaling, and frame/label composition.

mod assigner;
mod composer;
mod dimension;
mod error;
mod geometry;
mod layout;
mod room;
mod scaler;
mod slot_planner;

pub use assigner::*;
pub use composer::*;
pub use dimension::*;
pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use room::*;
pub use scaler::*;
pub use slot_planner::*;
