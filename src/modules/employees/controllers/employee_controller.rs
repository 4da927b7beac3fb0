use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::employees::models::EmployeeRequest;
use crate::modules::employees::services::employee_service::EmployeeService;

/// Create a new employee
/// POST /api/employees
pub async fn create_employee(
    service: web::Data<Arc<EmployeeService>>,
    request: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let employee = service.create_employee(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// Get employee by ID
/// GET /api/employees/{id}
pub async fn get_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get_employee_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// List all employees
/// GET /api/employees
pub async fn list_employees(
    service: web::Data<Arc<EmployeeService>>,
) -> Result<HttpResponse, AppError> {
    let employees = service.get_all_employees().await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Update an existing employee
/// PUT /api/employees/{id}
pub async fn update_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
    request: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let employee = service
        .update_employee(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Delete an employee
/// DELETE /api/employees/{id}
pub async fn delete_employee(
    service: web::Data<Arc<EmployeeService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_employee(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/employees")
            .route("", web::post().to(create_employee))
            .route("", web::get().to(list_employees))
            .route("/{id}", web::get().to(get_employee))
            .route("/{id}", web::put().to(update_employee))
            .route("/{id}", web::delete().to(delete_employee)),
    );
}
