//! Reordering of histogram entries by a selectable criterion

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;
use crate::histogram::HistogramEntry;

/// Ordering applied to the color list of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Most frequent first.
    #[default]
    Frequency,
    /// Ascending HSV hue.
    Hue,
    /// Most saturated first.
    Saturation,
    /// Highest HSV value first.
    Brightness,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Frequency,
        SortCriterion::Hue,
        SortCriterion::Saturation,
        SortCriterion::Brightness,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortCriterion::Frequency => "frequency",
            SortCriterion::Hue => "hue",
            SortCriterion::Saturation => "saturation",
            SortCriterion::Brightness => "brightness",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortCriterion {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| AnalysisError::InvalidSortCriterion(s.to_string()))
    }
}

/// Reorder `entries` in place. The sort is stable.
///
/// `entries` are expected in histogram order, so `Frequency` leaves them untouched.
pub fn sort_entries(entries: &mut [HistogramEntry], criterion: SortCriterion) {
    let (key, descending): (fn(&HistogramEntry) -> f64, bool) = match criterion {
        SortCriterion::Frequency => return,
        SortCriterion::Hue => (|e: &HistogramEntry| e.color.to_hsv().hue, false),
        SortCriterion::Saturation => (|e: &HistogramEntry| e.color.to_hsv().saturation, true),
        SortCriterion::Brightness => (|e: &HistogramEntry| e.color.to_hsv().value, true),
    };

    // one HSV conversion per entry
    let mut keyed: Vec<(f64, HistogramEntry)> = entries.iter().map(|&e| (key(&e), e)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let order = a.total_cmp(b);
        if descending { order.reverse() } else { order }
    });
    for (slot, (_, entry)) in entries.iter_mut().zip(keyed) {
        *slot = entry;
    }
}
