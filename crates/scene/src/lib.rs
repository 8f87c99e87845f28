//! Visual side of a search: paired markers and list items, their symbology and
//! the single-selection rules that tie them together.
//!
//! The map and the list are reached only through [`MapSurface`] and
//! [`ListSurface`], so everything here runs the same against the browser and
//! against the in-memory surfaces in [`headless`].

pub mod entity;
pub mod headless;
pub mod list;
pub mod markers;
pub mod result_set;
pub mod selection;
pub mod surface;
pub mod symbology;
pub mod world;

pub use entity::*;
pub use list::*;
pub use markers::*;
pub use result_set::*;
pub use selection::*;
pub use surface::*;
pub use symbology::*;
pub use world::*;
