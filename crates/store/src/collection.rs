use app_error::{AppError, AppResult};
use app_models::Record;

/// An ordered list of records plus the id the next insert will receive.
///
/// Ids come from a counter that only moves forward, so a removed record's id
/// is never handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    records: Vec<T>,
    next_id: i32,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(T::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));

        Self { records, next_id }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn next_id(&self) -> i32 {
        self.next_id
    }

    /// First record carrying `id`, in insertion order
    pub fn get(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Appends the record produced by `build` for the next free id.
    pub fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> AppResult<T> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            AppError::StoreError(anyhow::anyhow!("{} id space exhausted", T::KIND))
        })?;

        let record = build(id);
        self.records.push(record.clone());
        Ok(record)
    }

    /// Swaps the record at the first index carrying `id`. Returns `None`
    /// when no record matches, leaving the collection untouched.
    pub fn replace(&mut self, id: i32, record: T) -> Option<T> {
        let slot = self.records.iter_mut().find(|existing| existing.id() == id)?;
        *slot = record.clone();
        Some(record)
    }

    /// Drops every record carrying `id` and returns what remains.
    pub fn remove(&mut self, id: i32) -> Vec<T> {
        self.records.retain(|record| record.id() != id);
        self.records.clone()
    }

    /// The records without `id`, leaving the collection itself unchanged.
    pub fn without(&self, id: i32) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| record.id() != id)
            .cloned()
            .collect()
    }
}
