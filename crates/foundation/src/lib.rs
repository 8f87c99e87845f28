pub mod future;
pub mod geo;
pub mod handles;

// Foundation crate: small, well-tested primitives only.
pub use future::*;
pub use geo::*;
pub use handles::*;
