//! Cap-table types for the exemption computation engine.
//!
//! The cap table maps an eligibility year to the statutory monthly pension
//! cap and exemption percentage for that year, and derives the lifetime
//! exemption capital from them.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// Returns the capitalization factor converting a monthly cap into
/// lifetime exemption capital.
///
/// The statutory factor is 180 (months).
pub fn capitalization_months() -> Decimal {
    Decimal::from(180)
}

/// The cap values for a single eligibility year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CapEntry {
    /// The statutory monthly pension cap for the year.
    pub monthly_cap: Decimal,
    /// The exemption percentage for the year, as a fraction (e.g. 0.57).
    pub exemption_percentage: Decimal,
}

/// A cap-table row as it appears in the YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct CapYearRow {
    /// The eligibility year this row applies to.
    pub year: i32,
    /// The statutory monthly pension cap for the year.
    pub monthly_cap: Decimal,
    /// The exemption percentage for the year, as a fraction.
    pub exemption_percentage: Decimal,
}

/// Cap-table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CapTableFile {
    /// The cap rows, one per defined year.
    pub entries: Vec<CapYearRow>,
}

/// The annual exemption-cap table.
///
/// Immutable after construction. Lookups for years outside the defined
/// range clamp to the latest defined year rather than failing: the table
/// extrapolates forward (and backward) by clamping, so every method is
/// total over all years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapTable {
    entries: BTreeMap<i32, CapEntry>,
}

impl CapTable {
    /// Creates a cap table from per-year entries.
    ///
    /// The table must not be empty: the engine always falls back to the
    /// latest defined year for out-of-range lookups, so an empty table has
    /// no total answer to give. An empty map is rejected here rather than
    /// failing on a later lookup.
    pub fn new(entries: BTreeMap<i32, CapEntry>) -> EngineResult<Self> {
        if entries.is_empty() {
            return Err(EngineError::CalculationError {
                message: "cap table defines no entries".to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// Returns the cap entry for the given year, clamping out-of-range
    /// years to the latest defined year.
    fn entry(&self, year: i32) -> &CapEntry {
        if let Some(entry) = self.entries.get(&year) {
            return entry;
        }
        // Undefined years fall back to the latest defined year.
        let (_, latest) = self
            .entries
            .last_key_value()
            .expect("cap table defines at least one year");
        latest
    }

    /// Returns the statutory monthly pension cap for the given eligibility
    /// year.
    ///
    /// # Examples
    ///
    /// ```
    /// use exemption_engine::config::CapTable;
    /// use rust_decimal::Decimal;
    ///
    /// let caps = CapTable::default();
    /// assert_eq!(caps.monthly_cap(2025), Decimal::from(9430));
    /// ```
    pub fn monthly_cap(&self, year: i32) -> Decimal {
        self.entry(year).monthly_cap
    }

    /// Returns the exemption percentage for the given eligibility year,
    /// as a fraction.
    pub fn exemption_percentage(&self, year: i32) -> Decimal {
        self.entry(year).exemption_percentage
    }

    /// Returns the lifetime exemption capital for the given eligibility
    /// year: `monthly_cap × 180 × exemption_percentage`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exemption_engine::config::CapTable;
    /// use rust_decimal::Decimal;
    ///
    /// let caps = CapTable::default();
    /// assert_eq!(caps.exempt_capital(2025), Decimal::new(96751800, 2));
    /// ```
    pub fn exempt_capital(&self, year: i32) -> Decimal {
        self.monthly_cap(year) * capitalization_months() * self.exemption_percentage(year)
    }

    /// Returns the latest year the table defines.
    pub fn latest_year(&self) -> i32 {
        self.entries
            .last_key_value()
            .map(|(year, _)| *year)
            .expect("cap table defines at least one year")
    }
}

impl Default for CapTable {
    /// Builds the built-in statutory table covering 2012–2025.
    fn default() -> Self {
        fn entry(monthly_cap: i64, pct_milli: i64) -> CapEntry {
            CapEntry {
                monthly_cap: Decimal::from(monthly_cap),
                exemption_percentage: Decimal::new(pct_milli, 3),
            }
        }

        let rows = [
            (2012, entry(8190, 435)),
            (2013, entry(8310, 435)),
            (2014, entry(8470, 435)),
            (2015, entry(8460, 435)),
            (2016, entry(8380, 490)),
            (2017, entry(8360, 490)),
            (2018, entry(8380, 490)),
            (2019, entry(8480, 490)),
            (2020, entry(8510, 520)),
            (2021, entry(8460, 520)),
            (2022, entry(8660, 520)),
            (2023, entry(9120, 520)),
            (2024, entry(9430, 520)),
            (2025, entry(9430, 570)),
        ];

        Self {
            entries: rows.into_iter().collect(),
        }
    }
}
