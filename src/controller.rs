//! CRUD controller shared by every resource kind.
//!
//! Translates an [`Operation`] into a store call and an [`Outcome`]. Store
//! failures are logged here with the operation and resource kind and
//! surfaced as a generic [`AppError::Internal`] message.

use crate::errors::AppError;
use crate::models::{RecordId, ResourceKind, UpdateRequest};
use crate::store::{ResourceStore, StoreError};

pub enum Operation<K: ResourceKind> {
    List,
    Create(K::NewRecord),
    Update(UpdateRequest<K::Patch>),
    Delete(Option<RecordId>),
}

#[derive(Debug)]
pub enum Outcome<K: ResourceKind> {
    Listed(Vec<K::Record>),
    Created(K::Record),
    Updated(K::Record),
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Fetch => "fetch",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }

    fn gerund(self) -> &'static str {
        match self {
            Action::Fetch => "fetching",
            Action::Create => "creating",
            Action::Update => "updating",
            Action::Delete => "deleting",
        }
    }

    fn noun<K: ResourceKind>(self) -> &'static str {
        match self {
            Action::Fetch => K::PLURAL,
            _ => K::SINGULAR,
        }
    }
}

fn failure<K: ResourceKind>(action: Action, err: StoreError) -> AppError {
    match err {
        StoreError::NotFound(id) => {
            log::warn!("Error {} {} {}: not found", action.gerund(), K::SINGULAR, id);
            AppError::NotFound(format!("{} not found", K::TITLE))
        }
        other => {
            log::error!("Error {} {}: {}", action.gerund(), action.noun::<K>(), other);
            AppError::Internal(format!("Failed to {} {}", action.verb(), action.noun::<K>()))
        }
    }
}

fn id_required<K: ResourceKind>() -> AppError {
    AppError::BadRequest(format!("{} ID required", K::TITLE))
}

/// Resolve a client-supplied id, rejecting absent or non-numeric values.
fn require_id<K: ResourceKind>(id: Option<&RecordId>) -> Result<i64, AppError> {
    id.and_then(RecordId::resolve).ok_or_else(id_required::<K>)
}

pub async fn execute<K, S>(store: &S, op: Operation<K>) -> Result<Outcome<K>, AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    match op {
        Operation::List => list::<K, S>(store).await.map(Outcome::Listed),
        Operation::Create(new) => create::<K, S>(store, new).await.map(Outcome::Created),
        Operation::Update(req) => update::<K, S>(store, req).await.map(Outcome::Updated),
        Operation::Delete(id) => delete::<K, S>(store, id.as_ref())
            .await
            .map(|()| Outcome::Deleted),
    }
}

pub async fn list<K, S>(store: &S) -> Result<Vec<K::Record>, AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    store.list().await.map_err(|e| failure::<K>(Action::Fetch, e))
}

pub async fn create<K, S>(store: &S, new: K::NewRecord) -> Result<K::Record, AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    let record = store
        .create(new)
        .await
        .map_err(|e| failure::<K>(Action::Create, e))?;
    log::info!("Created {} {}", K::SINGULAR, K::id(&record));
    Ok(record)
}

/// Patch update. The id is checked before the store is touched.
pub async fn update<K, S>(store: &S, req: UpdateRequest<K::Patch>) -> Result<K::Record, AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    let id = require_id::<K>(req.id.as_ref())?;
    let record = store
        .update(id, req.patch)
        .await
        .map_err(|e| failure::<K>(Action::Update, e))?;
    log::info!("Updated {} {}", K::SINGULAR, id);
    Ok(record)
}

pub async fn delete<K, S>(store: &S, id: Option<&RecordId>) -> Result<(), AppError>
where
    K: ResourceKind,
    S: ResourceStore<K>,
{
    let id = require_id::<K>(id)?;
    store
        .delete(id)
        .await
        .map_err(|e| failure::<K>(Action::Delete, e))?;
    log::info!("Deleted {} {}", K::SINGULAR, id);
    Ok(())
}
