use sqlx::PgPool;

use super::{MemoryStore, ResourceStore, StoreError};
use crate::models::ResourceKind;
use crate::models::meeting::Meeting;
use crate::models::toner::Toner;

/// In-memory collections for every resource kind.
#[derive(Default)]
pub struct MemoryStores {
    pub meetings: MemoryStore<Meeting>,
    pub toners: MemoryStore<Toner>,
}

/// Resource kinds with a collection in [`MemoryStores`].
pub trait MemoryBacked: ResourceKind {
    fn collection(stores: &MemoryStores) -> &MemoryStore<Self>;
}

impl MemoryBacked for Meeting {
    fn collection(stores: &MemoryStores) -> &MemoryStore<Self> {
        &stores.meetings
    }
}

impl MemoryBacked for Toner {
    fn collection(stores: &MemoryStores) -> &MemoryStore<Self> {
        &stores.toners
    }
}

/// The store selected at startup: PostgreSQL when a database URL is
/// configured, otherwise process memory.
pub enum Backend {
    Postgres(PgPool),
    Memory(MemoryStores),
}

impl Backend {
    pub fn memory() -> Self {
        Backend::Memory(MemoryStores::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Postgres(_) => "postgres",
            Backend::Memory(_) => "memory",
        }
    }
}

impl<K> ResourceStore<K> for Backend
where
    K: MemoryBacked,
    PgPool: ResourceStore<K>,
{
    async fn list(&self) -> Result<Vec<K::Record>, StoreError> {
        match self {
            Backend::Postgres(pool) => ResourceStore::<K>::list(pool).await,
            Backend::Memory(stores) => K::collection(stores).list().await,
        }
    }

    async fn create(&self, new: K::NewRecord) -> Result<K::Record, StoreError> {
        match self {
            Backend::Postgres(pool) => ResourceStore::<K>::create(pool, new).await,
            Backend::Memory(stores) => K::collection(stores).create(new).await,
        }
    }

    async fn update(&self, id: i64, patch: K::Patch) -> Result<K::Record, StoreError> {
        match self {
            Backend::Postgres(pool) => ResourceStore::<K>::update(pool, id, patch).await,
            Backend::Memory(stores) => K::collection(stores).update(id, patch).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        match self {
            Backend::Postgres(pool) => ResourceStore::<K>::delete(pool, id).await,
            Backend::Memory(stores) => K::collection(stores).delete(id).await,
        }
    }
}
