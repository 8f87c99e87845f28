use foundation::handles::{Generation, Handle};

/// Key of one result entry: its index within the generation that built it.
///
/// The same key addresses the entry's marker and its list item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey(pub Handle);

impl EntryKey {
    pub fn new(index: usize, generation: Generation) -> Self {
        EntryKey(Handle::new(index as u32, generation))
    }

    pub fn index(&self) -> usize {
        self.0.index() as usize
    }

    pub fn generation(&self) -> Generation {
        self.0.generation()
    }

    /// DOM id of the list item built for this key.
    pub fn dom_id(&self) -> String {
        format!("item-{}", self.index())
    }
}
