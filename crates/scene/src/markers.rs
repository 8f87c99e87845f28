use facility::{FacilityRecord, SearchCategory};
use foundation::geo::LatLng;
use foundation::handles::Generation;
use tracing::debug;

use crate::entity::EntryKey;
use crate::surface::{MapSurface, MarkerSpec};
use crate::symbology::{MarkerVisual, USER_LOCATION_TITLE, marker_title};

/// A facility marker built by a rebuild, with the visual it returns to when
/// deselected.
#[derive(Debug)]
pub struct PlacedMarker<K> {
    pub marker: K,
    pub normal: MarkerVisual,
}

/// Lifecycle of every marker on the map.
///
/// Facility markers are handed out to the caller, which owns their pairing with
/// list items. The user-location marker is kept here and is never touched by a
/// rebuild.
pub struct MarkerCollection<M: MapSurface> {
    map: M,
    user: Option<M::Marker>,
}

impl<M: MapSurface> MarkerCollection<M> {
    pub fn new(map: M) -> Self {
        Self { map, user: None }
    }

    /// Removes `previous` from the map, then places one marker per record.
    pub fn rebuild(
        &mut self,
        previous: impl IntoIterator<Item = M::Marker>,
        generation: Generation,
        category: SearchCategory,
        records: &[FacilityRecord],
    ) -> Vec<PlacedMarker<M::Marker>> {
        let mut removed = 0usize;
        for marker in previous {
            self.map.remove_marker(marker);
            removed += 1;
        }

        let placed: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let normal = MarkerVisual::normal(category, record);
                let spec = MarkerSpec {
                    key: Some(EntryKey::new(index, generation)),
                    position: record.position(),
                    title: marker_title(category, record),
                    visual: normal,
                };
                PlacedMarker {
                    marker: self.map.add_marker(&spec),
                    normal,
                }
            })
            .collect();
        debug!(%category, removed, placed = placed.len(), "markers rebuilt");
        placed
    }

    pub fn set_selected(&mut self, marker: &M::Marker) {
        self.map.restyle_marker(marker, MarkerVisual::SELECTED);
    }

    pub fn clear_selected(&mut self, marker: &M::Marker, normal: MarkerVisual) {
        self.map.restyle_marker(marker, normal);
    }

    /// Replaces the singleton user-location marker.
    pub fn set_user_location(&mut self, at: LatLng) {
        if let Some(old) = self.user.take() {
            self.map.remove_marker(old);
        }
        let spec = MarkerSpec {
            key: None,
            position: at,
            title: USER_LOCATION_TITLE.to_string(),
            visual: MarkerVisual::USER_LOCATION,
        };
        self.user = Some(self.map.add_marker(&spec));
    }

    pub fn has_user_location(&self) -> bool {
        self.user.is_some()
    }

    pub fn pan_to(&mut self, at: LatLng) {
        self.map.pan_to(at);
    }

    pub fn set_view(&mut self, center: LatLng, level: u8) {
        self.map.set_view(center, level);
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerCollection;
    use crate::headless::{HeadlessMap, MapCall};
    use crate::symbology::{MarkerImage, MarkerVisual};
    use facility::{FacilityRecord, SearchCategory};
    use foundation::geo::LatLng;
    use foundation::handles::Generation;

    fn records(n: usize) -> Vec<FacilityRecord> {
        (0..n)
            .map(|i| FacilityRecord::new(format!("응급{i}"), 37.0 + i as f64 * 0.01, 127.0, 1.0).with_available(i as u32))
            .collect()
    }

    #[test]
    fn rebuild_removes_previous_markers_before_placing() {
        let mut markers = MarkerCollection::new(HeadlessMap::new());
        let first = markers.rebuild(Vec::new(), Generation(1), SearchCategory::Emergency, &records(3));
        assert_eq!(markers.map().marker_count(), 3);

        let old: Vec<u64> = first.into_iter().map(|p| p.marker).collect();
        markers.map_mut().take_calls();
        let second = markers.rebuild(old, Generation(2), SearchCategory::Emergency, &records(2));

        assert_eq!(second.len(), 2);
        assert_eq!(markers.map().marker_count(), 2);
        let calls = markers.map().calls();
        assert!(matches!(&calls[..3], [MapCall::Remove(_), MapCall::Remove(_), MapCall::Remove(_)]));
        assert!(matches!(calls[3], MapCall::Add { .. }));
    }

    #[test]
    fn emergency_markers_follow_bed_availability() {
        let mut markers = MarkerCollection::new(HeadlessMap::new());
        let placed = markers.rebuild(Vec::new(), Generation(1), SearchCategory::Emergency, &records(2));
        assert_eq!(placed[0].normal.image, MarkerImage::BedsFull);
        assert_eq!(placed[1].normal.image, MarkerImage::BedsAvailable);
    }

    #[test]
    fn user_location_is_a_replaced_singleton() {
        let mut markers = MarkerCollection::new(HeadlessMap::new());
        markers.set_user_location(LatLng::new(37.5, 127.0));
        markers.set_user_location(LatLng::new(37.6, 127.1));
        let user = markers.map().user_marker().map(|m| (m.spec.position, m.visual));
        assert_eq!(user, Some((LatLng::new(37.6, 127.1), MarkerVisual::USER_LOCATION)));
        assert_eq!(markers.map().marker_count(), 0);

        markers.rebuild(Vec::new(), Generation(1), SearchCategory::General, &records(2));
        assert!(markers.has_user_location());
        assert!(markers.map().user_marker().is_some());
    }
}
