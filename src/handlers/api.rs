//! JSON API: one resource per kind, `GET`/`POST`/`PUT`/`DELETE` on the
//! collection path.

use actix_web::{HttpResponse, Resource, web};
use serde::Deserialize;

use crate::controller;
use crate::errors::AppError;
use crate::models::{RecordId, ResourceKind, UpdateRequest};
use crate::store::{Backend, ResourceStore};
use crate::templates_structs::SuccessResponse;

/// Routes for one kind, e.g. `/api/meetings`.
pub fn resource<K>(path: &str) -> Resource
where
    K: ResourceKind + 'static,
    Backend: ResourceStore<K>,
{
    web::resource(path)
        .route(web::get().to(list::<K>))
        .route(web::post().to(create::<K>))
        .route(web::put().to(update::<K>))
        .route(web::delete().to(delete::<K>))
}

/// GET: all records, newest first.
pub async fn list<K>(backend: web::Data<Backend>) -> Result<HttpResponse, AppError>
where
    K: ResourceKind,
    Backend: ResourceStore<K>,
{
    let records = controller::list::<K, Backend>(backend.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// POST: create; the stored record comes back with 201.
pub async fn create<K>(
    backend: web::Data<Backend>,
    body: web::Json<K::NewRecord>,
) -> Result<HttpResponse, AppError>
where
    K: ResourceKind,
    Backend: ResourceStore<K>,
{
    let record = controller::create::<K, Backend>(backend.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

/// PUT: `{id, ...fields}`; fields left out keep their stored value.
pub async fn update<K>(
    backend: web::Data<Backend>,
    body: web::Json<UpdateRequest<K::Patch>>,
) -> Result<HttpResponse, AppError>
where
    K: ResourceKind,
    Backend: ResourceStore<K>,
{
    let record = controller::update::<K, Backend>(backend.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// DELETE ?id=
pub async fn delete<K>(
    backend: web::Data<Backend>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError>
where
    K: ResourceKind,
    Backend: ResourceStore<K>,
{
    let id = query.into_inner().id.map(RecordId::Text);
    controller::delete::<K, Backend>(backend.get_ref(), id.as_ref()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}
