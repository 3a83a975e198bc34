//! Ranked insertion into a row's three disease slots.
//!
//! High-priority findings take slot 1 and push the others down; the entry
//! falling off the end keeps only its analysis text, appended to the new
//! slot 3. Normal-priority findings never displace an entry: they fill the
//! first vacant slot, or are folded into slot 3's analysis when none is left.

use hemaflag_model::{
    CellValue, DiseaseDescriptor, DiseaseSlot, DiseaseSlots, Priority, SLOT_COUNT, SLOT_WIDTH,
    Sheet, SlotOutcome,
};

use crate::fusion::join_semicolon;

/// Offer `descriptor` to `slots`. Never fails; blank cells count as empty.
pub fn insert_disease(slots: &mut DiseaseSlots, descriptor: &DiseaseDescriptor) -> SlotOutcome {
    if slots.mentions(descriptor) {
        return SlotOutcome::AlreadyPresent;
    }
    match descriptor.priority {
        Priority::High => {
            let dropped = slots.push_front(DiseaseSlot::from_descriptor(descriptor));
            if let Some(dropped) = dropped {
                let extra = dropped.analysis.display_text();
                if !extra.is_empty() {
                    append_analysis(&mut slots.slots[SLOT_COUNT - 1], &extra);
                }
            }
            SlotOutcome::Promoted
        }
        Priority::Normal => match slots.first_vacant() {
            Some(index) => {
                slots.slots[index] = DiseaseSlot::from_descriptor(descriptor);
                SlotOutcome::Filled(index)
            }
            None => {
                append_analysis(&mut slots.slots[SLOT_COUNT - 1], descriptor.analysis);
                SlotOutcome::Merged
            }
        },
    }
}

fn append_analysis(slot: &mut DiseaseSlot, extra: &str) {
    let merged = join_semicolon(&slot.analysis.display_text(), extra);
    slot.analysis = CellValue::Text(merged);
}

/// Read the slot group starting at `first_column` (the `可能疾病1` column).
pub fn read_slots(sheet: &Sheet, row: u32, first_column: u32) -> DiseaseSlots {
    let read = |index: u32| {
        let base = first_column + index * SLOT_WIDTH;
        DiseaseSlot {
            name: sheet.cell(row, base).clone(),
            probability: sheet.cell(row, base + 1).clone(),
            analysis: sheet.cell(row, base + 2).clone(),
        }
    };
    DiseaseSlots::new([read(0), read(1), read(2)])
}

/// Write the slot group back; unchanged cells are left alone.
pub fn write_slots(sheet: &mut Sheet, row: u32, first_column: u32, slots: DiseaseSlots) {
    for (index, slot) in (0u32..).zip(slots.slots) {
        let base = first_column + index * SLOT_WIDTH;
        sheet.set(row, base, slot.name);
        sheet.set(row, base + 1, slot.probability);
        sheet.set(row, base + 2, slot.analysis);
    }
}

/// Apply [`insert_disease`] to one row of `sheet` in place.
pub fn insert_disease_in_row(
    sheet: &mut Sheet,
    row: u32,
    first_column: u32,
    descriptor: &DiseaseDescriptor,
) -> SlotOutcome {
    let mut slots = read_slots(sheet, row, first_column);
    let outcome = insert_disease(&mut slots, descriptor);
    if outcome != SlotOutcome::AlreadyPresent {
        write_slots(sheet, row, first_column, slots);
    }
    outcome
}
