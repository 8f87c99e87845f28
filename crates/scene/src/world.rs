use facility::{FacilityRecord, SearchCategory};
use foundation::geo::LatLng;
use foundation::handles::Generation;
use tracing::info;

use crate::entity::EntryKey;
use crate::list::{ActionKind, EntryAction, ListCollection};
use crate::markers::MarkerCollection;
use crate::result_set::{Entry, ResultSet};
use crate::selection::{SelectionController, SelectionState};
use crate::surface::{ListSurface, MapSurface};

/// Everything visible for the current generation: both collections, the
/// paired result set and the selection.
///
/// Nothing here is global; the owner passes it where it is needed.
pub struct Scene<M: MapSurface, L: ListSurface> {
    markers: MarkerCollection<M>,
    list: ListCollection<L>,
    results: ResultSet<M::Marker, L::Item>,
    selection: SelectionController,
}

impl<M: MapSurface, L: ListSurface> Scene<M, L> {
    pub fn new(map: M, list: L, detail_radius_m: u32) -> Self {
        Self {
            markers: MarkerCollection::new(map),
            list: ListCollection::new(list, detail_radius_m),
            results: ResultSet::default(),
            selection: SelectionController::new(),
        }
    }

    /// Replaces the whole result set.
    ///
    /// Selection is reset first, then the old markers are removed and the new
    /// markers and list items are built from `records` in order.
    pub fn rebuild(
        &mut self,
        generation: Generation,
        category: SearchCategory,
        records: Vec<FacilityRecord>,
    ) {
        self.selection.reset();

        let previous = std::mem::take(&mut self.results).into_entries();
        let mut stale_markers = Vec::with_capacity(previous.len());
        let mut stale_items = Vec::with_capacity(previous.len());
        for entry in previous {
            stale_markers.push(entry.marker);
            stale_items.push(entry.item);
        }

        let placed = self
            .markers
            .rebuild(stale_markers, generation, category, &records);
        let listed = self.list.rebuild(generation, category, &records);
        // Old items are released only once the container has been cleared.
        drop(stale_items);

        let entries = records
            .into_iter()
            .zip(placed)
            .zip(listed)
            .map(|((record, placed), listed)| Entry {
                record,
                normal: placed.normal,
                marker: placed.marker,
                item: listed.item,
                actions: listed.actions,
            })
            .collect();
        self.results = ResultSet::new(generation, category, entries);
        info!(%category, ?generation, count = self.results.len(), "result set rebuilt");
    }

    pub fn select(&mut self, key: EntryKey) -> bool {
        self.selection
            .select(key, &self.results, &mut self.markers, &mut self.list)
    }

    /// Selects by position in the current generation.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.results.key_at(index) {
            Some(key) => self.select(key),
            None => false,
        }
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn reset_selection(&mut self) {
        self.selection.reset();
    }

    /// Looks up an action control of a live entry. Never changes selection.
    pub fn action(&self, key: EntryKey, kind: ActionKind) -> Option<&EntryAction> {
        self.results
            .get(key)?
            .actions
            .iter()
            .find(|a| a.kind() == kind)
    }

    pub fn show_user_location(&mut self, at: LatLng) {
        self.markers.set_user_location(at);
    }

    pub fn recenter(&mut self, center: LatLng, level: u8) {
        self.markers.set_view(center, level);
    }

    pub fn results(&self) -> &ResultSet<M::Marker, L::Item> {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn map(&self) -> &M {
        self.markers.map()
    }

    pub fn map_mut(&mut self) -> &mut M {
        self.markers.map_mut()
    }

    pub fn list(&self) -> &L {
        self.list.surface()
    }

    pub fn list_mut(&mut self) -> &mut L {
        self.list.surface_mut()
    }
}
