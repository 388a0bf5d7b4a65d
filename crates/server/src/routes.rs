//! API route definitions

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;

use desk::domain::{Customer, Employee, ServiceTicket};
use desk::ops::{DeskError, TicketService};
use desk::storage::TicketStore;
use desk::views::{CustomerDetail, EmployeeDetail, TicketDetail};

/// Shared application state
pub type AppState<S> = Arc<TicketService<S>>;

/// Create API routes
pub fn create_routes<S: TicketStore>(service: Arc<TicketService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/employees", get(list_employees))
        .route("/employees/:id", get(get_employee))
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer))
        .route("/servicetickets", get(list_tickets).post(create_ticket))
        .route(
            "/servicetickets/:id",
            delete(delete_ticket).put(update_ticket).get(get_ticket),
        )
        .route("/servicetickets/:id/complete", post(complete_ticket))
        .with_state(service)
}

/// Map an operation error to its response status. Errors carry no body.
fn error_status(err: &DeskError) -> StatusCode {
    match err {
        DeskError::NotFound { .. } => StatusCode::NOT_FOUND,
        DeskError::UnknownCustomer(_) | DeskError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "desk-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all employees
async fn list_employees<S: TicketStore>(State(service): State<AppState<S>>) -> Json<Vec<Employee>> {
    Json(service.list_employees())
}

/// List all customers
async fn list_customers<S: TicketStore>(State(service): State<AppState<S>>) -> Json<Vec<Customer>> {
    Json(service.list_customers())
}

/// List all service tickets
async fn list_tickets<S: TicketStore>(
    State(service): State<AppState<S>>,
) -> Json<Vec<ServiceTicket>> {
    Json(service.list_tickets())
}

/// Get a single employee with their assigned tickets
async fn get_employee<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
) -> Result<Json<EmployeeDetail>, StatusCode> {
    service.employee_detail(id).map(Json).map_err(|e| {
        tracing::error!("Failed to get employee {}: {}", id, e);
        error_status(&e)
    })
}

/// Get a single customer with their tickets
async fn get_customer<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
) -> Result<Json<CustomerDetail>, StatusCode> {
    service.customer_detail(id).map(Json).map_err(|e| {
        tracing::error!("Failed to get customer {}: {}", id, e);
        error_status(&e)
    })
}

/// Get a single ticket with its customer and employee resolved
async fn get_ticket<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
) -> Result<Json<TicketDetail>, StatusCode> {
    service.ticket_detail(id).map(Json).map_err(|e| {
        tracing::error!("Failed to get ticket {}: {}", id, e);
        error_status(&e)
    })
}

/// Create a service ticket; 201 with a Location header on success
async fn create_ticket<S: TicketStore>(
    State(service): State<AppState<S>>,
    Json(draft): Json<ServiceTicket>,
) -> Result<impl IntoResponse, StatusCode> {
    let detail = service.create_ticket(draft).map_err(|e| {
        tracing::error!("Failed to create ticket: {}", e);
        error_status(&e)
    })?;

    let location = format!("/servicetickets/{}", detail.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(detail),
    ))
}

/// Delete a service ticket
async fn delete_ticket<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
) -> Result<StatusCode, StatusCode> {
    service
        .delete_ticket(id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| {
            tracing::error!("Failed to delete ticket {}: {}", id, e);
            error_status(&e)
        })
}

/// Overwrite a service ticket wholesale
async fn update_ticket<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
    Json(payload): Json<ServiceTicket>,
) -> Result<StatusCode, StatusCode> {
    service
        .update_ticket(id, payload)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| {
            tracing::error!("Failed to update ticket {}: {}", id, e);
            error_status(&e)
        })
}

/// Mark a service ticket completed as of today
async fn complete_ticket<S: TicketStore>(
    Path(id): Path<u32>,
    State(service): State<AppState<S>>,
) -> Result<StatusCode, StatusCode> {
    service
        .complete_ticket(id)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| {
            tracing::error!("Failed to complete ticket {}: {}", id, e);
            error_status(&e)
        })
}
