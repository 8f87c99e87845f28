use facility::{DetailQuery, FacilityRecord, SearchCategory};
use foundation::handles::Generation;
use tracing::debug;

use crate::entity::EntryKey;
use crate::surface::ListSurface;

const NO_ADDRESS: &str = "주소 정보 없음";
const NO_PHONE: &str = "-";
const AVAILABLE_COLOR: &str = "#2E7D32";
const FULL_COLOR: &str = "#D32F2F";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Detail,
    Call,
}

/// A control inside a list item that acts without selecting the entry.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryAction {
    /// Keyword place lookup, then open the resolved detail link.
    Detail {
        label: &'static str,
        query: DetailQuery,
    },
    /// Telephony link.
    Call { label: &'static str, href: String },
}

impl EntryAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            EntryAction::Detail { .. } => ActionKind::Detail,
            EntryAction::Call { .. } => ActionKind::Call,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryAction::Detail { label, .. } | EntryAction::Call { label, .. } => label,
        }
    }
}

/// Emergency bed status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub beds: u32,
    pub label: String,
    pub color: &'static str,
}

impl Availability {
    pub fn for_beds(beds: u32) -> Self {
        if beds > 0 {
            Self {
                beds,
                label: format!("🟢 가능 ({beds}석)"),
                color: AVAILABLE_COLOR,
            }
        } else {
            Self {
                beds,
                label: "🔴 불가 (만실)".to_string(),
                color: FULL_COLOR,
            }
        }
    }
}

/// Render model of one list item.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub key: EntryKey,
    pub dom_id: String,
    pub icon: &'static str,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub distance_label: String,
    /// Emergency only.
    pub availability: Option<Availability>,
    /// Pharmacy open/closed text, when reported.
    pub open_status: Option<String>,
    pub hours: Option<String>,
    pub actions: Vec<EntryAction>,
}

impl ListEntry {
    pub fn render(
        key: EntryKey,
        category: SearchCategory,
        record: &FacilityRecord,
        detail_radius_m: u32,
    ) -> Self {
        let emergency = category == SearchCategory::Emergency;

        let mut actions = Vec::with_capacity(2);
        if emergency {
            if let Some(phone) = record.phone.as_deref().filter(|p| !p.trim().is_empty()) {
                actions.push(EntryAction::Call {
                    label: "📞 전화",
                    href: format!("tel:{}", phone.trim()),
                });
            }
        }
        actions.push(EntryAction::Detail {
            label: if emergency {
                "카카오맵 >"
            } else {
                "카카오맵 상세정보 >"
            },
            query: DetailQuery::new(record.name.clone(), record.position(), detail_radius_m),
        });

        let pharmacy = category == SearchCategory::Pharmacy;
        Self {
            key,
            dom_id: key.dom_id(),
            icon: category.icon(),
            name: record.name.clone(),
            address: non_blank(record.address.as_deref()).unwrap_or(NO_ADDRESS).to_string(),
            phone: non_blank(record.phone.as_deref()).unwrap_or(NO_PHONE).to_string(),
            distance_label: format!("{}km", record.distance),
            availability: emergency.then(|| Availability::for_beds(record.available.unwrap_or(0))),
            open_status: pharmacy
                .then(|| non_blank(record.status.as_deref()).map(str::to_string))
                .flatten(),
            hours: pharmacy
                .then(|| non_blank(record.hours_summary.as_deref()).map(str::to_string))
                .flatten(),
            actions,
        }
    }

    pub fn action(&self, kind: ActionKind) -> Option<&EntryAction> {
        self.actions.iter().find(|a| a.kind() == kind)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// One list item built by a rebuild, with the actions it exposes.
#[derive(Debug)]
pub struct ListedItem<I> {
    pub item: I,
    pub actions: Vec<EntryAction>,
}

/// The on-page list mirroring the current result set.
#[derive(Debug)]
pub struct ListCollection<L: ListSurface> {
    surface: L,
    detail_radius_m: u32,
}

impl<L: ListSurface> ListCollection<L> {
    pub fn new(surface: L, detail_radius_m: u32) -> Self {
        Self {
            surface,
            detail_radius_m,
        }
    }

    /// Clears the container and appends one item per record, in order.
    pub fn rebuild(
        &mut self,
        generation: Generation,
        category: SearchCategory,
        records: &[FacilityRecord],
    ) -> Vec<ListedItem<L::Item>> {
        let detail_radius_m = self.detail_radius_m;
        let surface = &mut self.surface;
        surface.clear();
        let items: Vec<_> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let entry = ListEntry::render(
                    EntryKey::new(index, generation),
                    category,
                    record,
                    detail_radius_m,
                );
                ListedItem {
                    item: surface.append(&entry),
                    actions: entry.actions,
                }
            })
            .collect();
        debug!(%category, count = items.len(), "list rebuilt");
        items
    }

    pub fn set_active(&mut self, item: &L::Item) {
        self.surface.set_active(item, true);
        self.surface.scroll_into_view(item);
    }

    pub fn clear_active(&mut self, item: &L::Item) {
        self.surface.set_active(item, false);
    }

    pub fn surface(&self) -> &L {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut L {
        &mut self.surface
    }
}
