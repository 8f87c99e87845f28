use facility::{FacilityRecord, SearchCategory};
use foundation::handles::Generation;

use crate::entity::EntryKey;
use crate::list::EntryAction;
use crate::symbology::MarkerVisual;

/// One result with both of its visual handles.
#[derive(Debug)]
pub struct Entry<K, I> {
    pub record: FacilityRecord,
    pub normal: MarkerVisual,
    pub marker: K,
    pub item: I,
    pub actions: Vec<EntryAction>,
}

/// The current generation's results, each paired with its marker and list item.
///
/// Marker and list item of an entry are created, addressed and destroyed
/// together, so the two surfaces cannot drift apart by index.
#[derive(Debug)]
pub struct ResultSet<K, I> {
    generation: Generation,
    category: Option<SearchCategory>,
    entries: Vec<Entry<K, I>>,
}

impl<K, I> Default for ResultSet<K, I> {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            category: None,
            entries: Vec::new(),
        }
    }
}

impl<K, I> ResultSet<K, I> {
    pub fn new(generation: Generation, category: SearchCategory, entries: Vec<Entry<K, I>>) -> Self {
        Self {
            generation,
            category: Some(category),
            entries,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Category of the search that built this set; `None` before the first one.
    pub fn category(&self) -> Option<SearchCategory> {
        self.category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `key` if it belongs to this generation and is in range.
    pub fn get(&self, key: EntryKey) -> Option<&Entry<K, I>> {
        if key.generation() != self.generation {
            return None;
        }
        self.entries.get(key.index())
    }

    pub fn get_index(&self, index: usize) -> Option<&Entry<K, I>> {
        self.entries.get(index)
    }

    pub fn key_at(&self, index: usize) -> Option<EntryKey> {
        (index < self.entries.len()).then(|| EntryKey::new(index, self.generation))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryKey, &Entry<K, I>)> + '_ {
        let generation = self.generation;
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, e)| (EntryKey::new(i, generation), e))
    }

    pub fn records(&self) -> impl Iterator<Item = &FacilityRecord> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn into_entries(self) -> Vec<Entry<K, I>> {
        self.entries
    }
}
