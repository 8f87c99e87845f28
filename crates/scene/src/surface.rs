//! Seams to the two visual surfaces.
//!
//! Both traits draw what they are told and hand back an opaque handle.
//! Pairing, ordering and selection live above them.

use foundation::geo::LatLng;

use crate::entity::EntryKey;
use crate::list::ListEntry;
use crate::symbology::MarkerVisual;

/// Everything a map needs to construct one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// `None` for the user-location marker, which is not clickable.
    pub key: Option<EntryKey>,
    pub position: LatLng,
    pub title: String,
    pub visual: MarkerVisual,
}

pub trait MapSurface {
    type Marker;

    /// Constructs a marker and puts it on the map.
    ///
    /// Implementations wire marker clicks back to selection using `spec.key`.
    fn add_marker(&mut self, spec: &MarkerSpec) -> Self::Marker;
    /// Takes a marker off the map and releases it.
    fn remove_marker(&mut self, marker: Self::Marker);
    fn restyle_marker(&mut self, marker: &Self::Marker, visual: MarkerVisual);
    /// Smoothly pans to `at`.
    fn pan_to(&mut self, at: LatLng);
    /// Jumps to `center` at the given map level.
    fn set_view(&mut self, center: LatLng, level: u8);
}

pub trait ListSurface {
    type Item;

    /// Removes every item from the list container.
    fn clear(&mut self);
    /// Appends one item built from `entry`.
    ///
    /// The item body routes clicks to selection; action controls must not.
    fn append(&mut self, entry: &ListEntry) -> Self::Item;
    fn set_active(&mut self, item: &Self::Item, active: bool);
    /// Smoothly scrolls `item` to the centre of the viewport.
    fn scroll_into_view(&mut self, item: &Self::Item);
}
