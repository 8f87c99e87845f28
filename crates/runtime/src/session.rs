//! One search, from button press to rebuilt surfaces.

use std::cell::RefCell;

use facility::{FacilityClient, SearchCategory, SearchError};
use foundation::handles::Generation;
use scene::{ListSurface, MapSurface};
use tracing::debug;

use crate::finder::Finder;
use crate::geolocate::Geolocator;
use crate::notify::Notifier;

/// What the page controls held when the search started.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub category: SearchCategory,
    /// Free text; used by general searches only.
    pub keyword: Option<String>,
    /// Radius selector value in kilometres.
    pub radius_km: Option<f64>,
}

impl SearchParams {
    pub fn new(category: SearchCategory) -> Self {
        Self {
            category,
            keyword: None,
            radius_km: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }
}

/// A started session, stamped with its generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub params: SearchParams,
}

impl SearchTicket {
    pub fn category(&self) -> SearchCategory {
        self.params.category
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Both surfaces now show this session's results.
    Rebuilt { generation: Generation, count: usize },
    /// The session stopped; the previous results are still on screen.
    Failed(SearchError),
    /// A newer session started first; nothing was applied.
    Superseded { generation: Generation },
}

impl SessionOutcome {
    pub fn is_rebuilt(&self) -> bool {
        matches!(self, SessionOutcome::Rebuilt { .. })
    }
}

/// Runs one search end to end.
///
/// The finder is borrowed only between the two suspension points, so other
/// sessions and clicks can interleave while this one waits on the device or
/// the network.
pub async fn run_search<M, L, N, G, C>(
    finder: &RefCell<Finder<M, L, N>>,
    geolocator: &G,
    client: &C,
    params: SearchParams,
) -> SessionOutcome
where
    M: MapSurface,
    L: ListSurface,
    N: Notifier,
    G: Geolocator + ?Sized,
    C: FacilityClient + ?Sized,
{
    let ticket = finder.borrow_mut().begin(params);

    let position = geolocator.current_position().await;
    let located = finder.borrow_mut().locate(&ticket, position);
    let query = match located {
        Ok(query) => query,
        Err(outcome) => return outcome,
    };

    debug!(generation = ?ticket.generation, path = query.path(), "fetching");
    let response = client.fetch(&query).await;
    finder.borrow_mut().complete(&ticket, &query, response)
}
