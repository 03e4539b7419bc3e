//! The shared in-memory store and its row-level helpers.

use std::sync::RwLock;

use onyx_core::assets::Asset;
use onyx_core::envelopes::Envelope;
use onyx_core::errors::{Error, Result};
use onyx_core::flows::FlowItem;
use onyx_core::liabilities::Liability;
use onyx_core::objectives::Objective;

/// One stored record together with its owner.
pub(crate) struct Row<T> {
    pub owner_id: String,
    pub record_id: String,
    pub record: T,
}

pub(crate) type Table<T> = RwLock<Vec<Row<T>>>;

/// Owner-scoped in-memory store shared by the repository structs.
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) envelopes: Table<Envelope>,
    pub(crate) assets: Table<Asset>,
    pub(crate) liabilities: Table<Liability>,
    pub(crate) flows: Table<FlowItem>,
    pub(crate) objectives: Table<Objective>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rejects operations that arrive without an authenticated owner.
pub(crate) fn authorize(owner_id: &str) -> Result<()> {
    if owner_id.is_empty() {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub(crate) fn list_rows<T: Clone>(table: &Table<T>, owner_id: &str) -> Result<Vec<T>> {
    authorize(owner_id)?;
    let rows = table
        .read()
        .map_err(|_| Error::Unexpected("storage lock poisoned".to_string()))?;
    Ok(rows
        .iter()
        .filter(|r| r.owner_id == owner_id)
        .map(|r| r.record.clone())
        .collect())
}

pub(crate) fn insert_row<T: Clone>(
    table: &Table<T>,
    owner_id: &str,
    record_id: String,
    record: T,
) -> Result<T> {
    authorize(owner_id)?;
    let mut rows = table
        .write()
        .map_err(|_| Error::Unexpected("storage lock poisoned".to_string()))?;
    rows.push(Row {
        owner_id: owner_id.to_string(),
        record_id,
        record: record.clone(),
    });
    Ok(record)
}

/// Deletes the owner's record with the given id. Records belonging to
/// another owner are left untouched; the returned count is 0 when
/// nothing matched.
pub(crate) fn delete_row<T>(table: &Table<T>, owner_id: &str, record_id: &str) -> Result<usize> {
    authorize(owner_id)?;
    let mut rows = table
        .write()
        .map_err(|_| Error::Unexpected("storage lock poisoned".to_string()))?;
    let before = rows.len();
    rows.retain(|r| !(r.owner_id == owner_id && r.record_id == record_id));
    Ok(before - rows.len())
}
