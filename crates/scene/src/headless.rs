//! In-memory surfaces.
//!
//! They keep the model a real map/list would show and log every call, so the
//! selection and rebuild rules can be checked without a browser. The command
//! line driver renders from them too.

use std::collections::BTreeMap;

use foundation::geo::LatLng;

use crate::entity::EntryKey;
use crate::list::ListEntry;
use crate::surface::{ListSurface, MapSurface, MarkerSpec};
use crate::symbology::MarkerVisual;

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    Add { id: u64, key: Option<EntryKey> },
    Remove(u64),
    Restyle { id: u64, visual: MarkerVisual },
    PanTo(LatLng),
    SetView { center: LatLng, level: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessMarker {
    pub id: u64,
    pub spec: MarkerSpec,
    /// Current look; starts as `spec.visual`.
    pub visual: MarkerVisual,
}

#[derive(Debug, Default)]
pub struct HeadlessMap {
    next_id: u64,
    markers: BTreeMap<u64, HeadlessMarker>,
    center: Option<LatLng>,
    level: Option<u8>,
    calls: Vec<MapCall>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Facility markers in creation order.
    pub fn facility_markers(&self) -> impl Iterator<Item = &HeadlessMarker> + '_ {
        self.markers.values().filter(|m| m.spec.key.is_some())
    }

    pub fn user_marker(&self) -> Option<&HeadlessMarker> {
        self.markers.values().find(|m| m.spec.key.is_none())
    }

    pub fn marker_for(&self, key: EntryKey) -> Option<&HeadlessMarker> {
        self.markers.values().find(|m| m.spec.key == Some(key))
    }

    pub fn marker_count(&self) -> usize {
        self.facility_markers().count()
    }

    pub fn center(&self) -> Option<LatLng> {
        self.center
    }

    pub fn level(&self) -> Option<u8> {
        self.level
    }

    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<MapCall> {
        std::mem::take(&mut self.calls)
    }
}

impl MapSurface for HeadlessMap {
    type Marker = u64;

    fn add_marker(&mut self, spec: &MarkerSpec) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.markers.insert(
            id,
            HeadlessMarker {
                id,
                spec: spec.clone(),
                visual: spec.visual,
            },
        );
        self.calls.push(MapCall::Add { id, key: spec.key });
        id
    }

    fn remove_marker(&mut self, marker: u64) {
        self.markers.remove(&marker);
        self.calls.push(MapCall::Remove(marker));
    }

    fn restyle_marker(&mut self, marker: &u64, visual: MarkerVisual) {
        if let Some(m) = self.markers.get_mut(marker) {
            m.visual = visual;
        }
        self.calls.push(MapCall::Restyle {
            id: *marker,
            visual,
        });
    }

    fn pan_to(&mut self, at: LatLng) {
        self.center = Some(at);
        self.calls.push(MapCall::PanTo(at));
    }

    fn set_view(&mut self, center: LatLng, level: u8) {
        self.center = Some(center);
        self.level = Some(level);
        self.calls.push(MapCall::SetView { center, level });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCall {
    Clear,
    Append(u64),
    Activate(u64),
    Deactivate(u64),
    Scroll(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessItem {
    pub id: u64,
    pub entry: ListEntry,
    pub active: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessList {
    next_id: u64,
    items: Vec<HeadlessItem>,
    calls: Vec<ListCall>,
}

impl HeadlessList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[HeadlessItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks an item up by its DOM id (`item-<index>`).
    pub fn by_dom_id(&self, dom_id: &str) -> Option<&HeadlessItem> {
        self.items.iter().find(|i| i.entry.dom_id == dom_id)
    }

    pub fn active(&self) -> Vec<&HeadlessItem> {
        self.items.iter().filter(|i| i.active).collect()
    }

    pub fn calls(&self) -> &[ListCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<ListCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ListSurface for HeadlessList {
    type Item = u64;

    fn clear(&mut self) {
        self.items.clear();
        self.calls.push(ListCall::Clear);
    }

    fn append(&mut self, entry: &ListEntry) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(HeadlessItem {
            id,
            entry: entry.clone(),
            active: false,
        });
        self.calls.push(ListCall::Append(id));
        id
    }

    fn set_active(&mut self, item: &u64, active: bool) {
        if let Some(i) = self.items.iter_mut().find(|i| i.id == *item) {
            i.active = active;
        }
        self.calls.push(if active {
            ListCall::Activate(*item)
        } else {
            ListCall::Deactivate(*item)
        });
    }

    fn scroll_into_view(&mut self, item: &u64) {
        self.calls.push(ListCall::Scroll(*item));
    }
}
