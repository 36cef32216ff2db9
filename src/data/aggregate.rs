use std::collections::BTreeMap;

use super::model::{PokemonTable, Record};

// ---------------------------------------------------------------------------
// Restricted flag
// ---------------------------------------------------------------------------

/// A record paired with its derived Restricted flag. Borrows the view, so
/// the caller's table is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlaggedRecord<'a> {
    pub record: &'a Record,
    pub restricted: bool,
}

pub fn derive_restricted(view: &PokemonTable) -> Vec<FlaggedRecord<'_>> {
    view.records
        .iter()
        .map(|record| FlaggedRecord {
            record,
            restricted: record.is_restricted(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Long-form type table
// ---------------------------------------------------------------------------

/// One (id, type, restricted) row. A dual-typed record yields two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub id: i64,
    pub type_name: String,
    pub restricted: bool,
}

/// All primary-type rows, then all secondary-type rows, each half in view
/// order. Records without a secondary type contribute one row only.
pub fn long_form_types(flagged: &[FlaggedRecord<'_>]) -> Vec<TypeEntry> {
    let primary = flagged.iter().map(|f| TypeEntry {
        id: f.record.id,
        type_name: f.record.type_1.clone(),
        restricted: f.restricted,
    });
    let secondary = flagged.iter().filter_map(|f| {
        f.record.type_2.as_ref().map(|t| TypeEntry {
            id: f.record.id,
            type_name: t.clone(),
            restricted: f.restricted,
        })
    });
    primary.chain(secondary).collect()
}

// ---------------------------------------------------------------------------
// Group-by counts
// ---------------------------------------------------------------------------

/// Counts for one type, split by Restricted. Both columns always exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestrictedCounts {
    pub unrestricted: usize,
    pub restricted: usize,
}

impl RestrictedCounts {
    pub fn get(&self, restricted: bool) -> usize {
        if restricted {
            self.restricted
        } else {
            self.unrestricted
        }
    }

    pub fn total(&self) -> usize {
        self.unrestricted + self.restricted
    }
}

/// Type × Restricted count matrix, rows sorted by type name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeRestrictedMatrix {
    pub rows: BTreeMap<String, RestrictedCounts>,
}

impl TypeRestrictedMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest cell, used to scale the heatmap.
    pub fn max_cell(&self) -> usize {
        self.rows
            .values()
            .map(|c| c.unrestricted.max(c.restricted))
            .max()
            .unwrap_or(0)
    }
}

pub fn count_by_type_and_restricted(entries: &[TypeEntry]) -> TypeRestrictedMatrix {
    let mut rows: BTreeMap<String, RestrictedCounts> = BTreeMap::new();
    for e in entries {
        let cell = rows.entry(e.type_name.clone()).or_default();
        if e.restricted {
            cell.restricted += 1;
        } else {
            cell.unrestricted += 1;
        }
    }
    TypeRestrictedMatrix { rows }
}

/// Total rows per type, keyed (and therefore ordered) by type name.
pub fn count_by_type(entries: &[TypeEntry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for e in entries {
        *counts.entry(e.type_name.clone()).or_insert(0) += 1;
    }
    counts
}
