//! Header-driven column bindings for one sheet.

use hemaflag_model::{HeaderIndex, Marker, Sheet};

pub const SUMMARY_HEADER: &str = "总结1";
pub const SHORT_HEADER: &str = "总结2";
pub const INTERPRETATION_HEADER: &str = "解读";
pub const DISEASE_HEADER: &str = "可能疾病1";

/// Status column of a marker plus its implicit prompt/basis neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerColumns {
    pub marker: Marker,
    pub status: u32,
}

impl MarkerColumns {
    pub fn prompt(&self) -> u32 {
        self.status + 1
    }

    pub fn basis(&self) -> u32 {
        self.status + 2
    }
}

/// Every column the marker pass may touch. Absent headers stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetColumns {
    pub markers: Vec<MarkerColumns>,
    pub summary: Option<u32>,
    pub short: Option<u32>,
    pub interpretation: Option<u32>,
    pub disease: Option<u32>,
}

impl SheetColumns {
    pub fn resolve(sheet: &Sheet) -> Self {
        Self::from_headers(&sheet.header_index())
    }

    pub fn from_headers(headers: &HeaderIndex) -> Self {
        let markers = Marker::ALL
            .into_iter()
            .filter_map(|marker| {
                headers
                    .column(marker.status_header())
                    .map(|status| MarkerColumns { marker, status })
            })
            .collect();
        Self {
            markers,
            summary: headers.column(SUMMARY_HEADER),
            short: headers.column(SHORT_HEADER),
            interpretation: headers.column(INTERPRETATION_HEADER),
            disease: headers.column(DISEASE_HEADER),
        }
    }

    pub fn marker(&self, marker: Marker) -> Option<&MarkerColumns> {
        self.markers.iter().find(|columns| columns.marker == marker)
    }
}
