use std::sync::Arc;

use app_config::{ReferencePolicy, StoreConfig};

use crate::RecordStore;

pub fn initialize_store(config: &StoreConfig) -> Arc<RecordStore> {
    tracing::debug!(
        seed = config.seed,
        deletion = %config.deletion,
        references = %config.references,
        "Initializing record store"
    );

    if config.references == ReferencePolicy::Unchecked {
        tracing::info!("Teacher course references are not validated on mutation");
    }

    let store = RecordStore::new(*config);

    match (store.teacher_count(), store.course_count()) {
        (Ok(teachers), Ok(courses)) => {
            tracing::info!(teachers, courses, "Record store ready");
        }
        _ => tracing::warn!("Record store ready but its size could not be read"),
    }

    Arc::new(store)
}
