use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::registry::models::RepositoryPayload;
use crate::modules::registry::services::RegistryService;

/// List all repositories
/// GET /repositories
pub async fn list_repositories(service: web::Data<Arc<RegistryService>>) -> HttpResponse {
    HttpResponse::Ok().json(service.list_repositories())
}

/// Create a new repository
/// POST /repositories
pub async fn create_repository(
    service: web::Data<Arc<RegistryService>>,
    payload: web::Json<RepositoryPayload>,
) -> Result<HttpResponse, AppError> {
    let repository = service.create_repository(payload.into_inner())?;

    Ok(HttpResponse::Ok().json(repository))
}

/// Replace a repository's client-supplied fields
/// PUT /repositories/{id}
pub async fn update_repository(
    service: web::Data<Arc<RegistryService>>,
    path: web::Path<String>,
    payload: web::Json<RepositoryPayload>,
) -> Result<HttpResponse, AppError> {
    let repository = service.update_repository(&path.into_inner(), payload.into_inner())?;

    Ok(HttpResponse::Ok().json(repository))
}

/// Delete a repository
/// DELETE /repositories/{id}
pub async fn delete_repository(
    service: web::Data<Arc<RegistryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_repository(&path.into_inner())?;

    Ok(HttpResponse::NoContent().finish())
}

/// Increment a repository's like counter
/// POST /repositories/{id}/like
pub async fn like_repository(
    service: web::Data<Arc<RegistryService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repository = service.like_repository(&path.into_inner())?;

    Ok(HttpResponse::Ok().json(repository))
}

/// Configure repository routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/repositories")
            .route("", web::get().to(list_repositories))
            .route("", web::post().to(create_repository))
            .route("/{id}", web::put().to(update_repository))
            .route("/{id}", web::delete().to(delete_repository))
            .route("/{id}/like", web::post().to(like_repository)),
    );
}
