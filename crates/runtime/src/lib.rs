//! Search orchestration: the page context, the session pipeline and the
//! feedback seams it reports through.

pub mod event_bus;
pub mod finder;
pub mod geolocate;
pub mod notify;
pub mod session;

pub use event_bus::*;
pub use finder::*;
pub use geolocate::*;
pub use notify::*;
pub use session::*;
