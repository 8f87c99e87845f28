use tracing::{debug, trace};

use crate::entity::EntryKey;
use crate::list::ListCollection;
use crate::markers::MarkerCollection;
use crate::result_set::ResultSet;
use crate::surface::{ListSurface, MapSurface};

/// At most one highlighted entry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    SelectedIndex(usize),
}

/// Single-selection state machine shared by both surfaces.
///
/// Marker clicks and list-body clicks both end up in [`SelectionController::select`].
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Forgets the selection without touching any visual.
    ///
    /// Only valid right before a rebuild replaces every visual.
    pub fn reset(&mut self) {
        self.state = SelectionState::NoSelection;
    }

    /// Moves the highlight to `key`.
    ///
    /// Returns `false`, and changes nothing, when `key` does not address a live
    /// entry. Re-selecting the current entry replays restore-then-apply.
    pub fn select<M, L>(
        &mut self,
        key: EntryKey,
        results: &ResultSet<M::Marker, L::Item>,
        markers: &mut MarkerCollection<M>,
        list: &mut ListCollection<L>,
    ) -> bool
    where
        M: MapSurface,
        L: ListSurface,
    {
        let Some(next) = results.get(key) else {
            debug!(?key, live = ?results.generation(), "ignoring selection of stale entry");
            return false;
        };

        if let SelectionState::SelectedIndex(prev) = self.state {
            if let Some(prev_entry) = results.get_index(prev) {
                markers.clear_selected(&prev_entry.marker, prev_entry.normal);
                list.clear_active(&prev_entry.item);
            }
        }

        markers.set_selected(&next.marker);
        list.set_active(&next.item);
        markers.pan_to(next.record.position());

        self.state = SelectionState::SelectedIndex(key.index());
        trace!(index = key.index(), name = %next.record.name, "selected");
        true
    }
}
