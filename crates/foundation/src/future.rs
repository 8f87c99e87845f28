use std::future::Future;
use std::pin::Pin;

/// Boxed future pinned to the current thread.
///
/// External collaborators (geolocation, fetch) live on a single-threaded event
/// loop, so their futures are not required to be `Send`.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
