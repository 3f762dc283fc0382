//! Gallery Model - Gallery and artwork documents as loaded from the store
//!
//! This crate defines the data model consumed by the layout engine: gallery
//! records, denormalized artwork snapshots, physical dimension parsing, and
//! the normalization of field-name variance across producers (`url` vs
//! `mainImageUrl`, `dimensions` string vs numeric width/height).

mod artwork;
mod dimensions;
mod error;
mod frame_style;
mod gallery;
mod room_size;

pub use artwork::*;
pub use dimensions::*;
pub use error::*;
pub use frame_style::*;
pub use gallery::*;
pub use room_size::*;
