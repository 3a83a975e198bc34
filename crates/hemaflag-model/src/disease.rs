//! Ranked "possible disease" slots.

use serde::{Deserialize, Serialize};

use crate::cell::CellValue;

/// Number of ranked disease slots per row.
pub const SLOT_COUNT: usize = 3;
/// Columns per slot: name, probability, analysis.
pub const SLOT_WIDTH: u32 = 3;

/// Insertion rank of a disease descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Takes slot 1 and pushes existing entries down.
    High,
    /// Fills the first empty slot, or merges into slot 3's analysis.
    Normal,
}

/// Immutable disease entry carried by a marker template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiseaseDescriptor {
    pub name: &'static str,
    pub probability: &'static str,
    pub analysis: &'static str,
    pub priority: Priority,
    /// Substrings that mark an existing slot as already covering this disease.
    pub keywords: &'static [&'static str],
}

/// One (name, probability, analysis) triple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiseaseSlot {
    pub name: CellValue,
    pub probability: CellValue,
    pub analysis: CellValue,
}

impl DiseaseSlot {
    pub fn from_descriptor(descriptor: &DiseaseDescriptor) -> Self {
        Self {
            name: CellValue::text(descriptor.name),
            probability: CellValue::text(descriptor.probability),
            analysis: CellValue::text(descriptor.analysis),
        }
    }

    /// A slot is free when its name cell is blank.
    pub fn is_vacant(&self) -> bool {
        self.name.is_blank()
    }

    fn has_content(&self) -> bool {
        self.name.is_present() || self.probability.is_present() || self.analysis.is_present()
    }
}

/// The three ranked slots of one data row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiseaseSlots {
    pub slots: [DiseaseSlot; SLOT_COUNT],
}

impl DiseaseSlots {
    pub fn new(slots: [DiseaseSlot; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn last(&self) -> &DiseaseSlot {
        &self.slots[SLOT_COUNT - 1]
    }

    /// True when any slot already names this disease, or already carries its
    /// analysis from an earlier overflow merge.
    pub fn mentions(&self, descriptor: &DiseaseDescriptor) -> bool {
        self.slots.iter().any(|slot| {
            let named = slot.name.as_text().is_some_and(|name| {
                name.contains(descriptor.name)
                    || descriptor.keywords.iter().any(|keyword| name.contains(keyword))
            });
            named
                || slot
                    .analysis
                    .as_text()
                    .is_some_and(|analysis| analysis.contains(descriptor.analysis))
        })
    }

    /// Shift every slot one rank down and place `slot` first.
    ///
    /// Returns the entry pushed out of the last slot when it held anything.
    pub fn push_front(&mut self, slot: DiseaseSlot) -> Option<DiseaseSlot> {
        self.slots.rotate_right(1);
        let dropped = std::mem::replace(&mut self.slots[0], slot);
        dropped.has_content().then_some(dropped)
    }

    /// Index of the first slot whose name is blank.
    pub fn first_vacant(&self) -> Option<usize> {
        self.slots.iter().position(DiseaseSlot::is_vacant)
    }
}

/// What happened when a descriptor was offered to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotOutcome {
    /// A slot already names the disease; nothing changed.
    AlreadyPresent,
    /// Inserted at slot 1, existing entries shifted down.
    Promoted,
    /// Written into the first empty slot (0-based index).
    Filled(usize),
    /// All slots occupied; the analysis was appended to slot 3.
    Merged,
}
