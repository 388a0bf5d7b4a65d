//! Ticket lifecycle operations and direct store reads.
//!
//! The `TicketService` handles all business logic for the dispatcher:
//! listing and resolving entities into views, and the create/update/
//! complete/delete ticket mutations with their referential-integrity checks.

use chrono::Local;
use thiserror::Error;

use crate::domain::{Customer, Employee, ServiceTicket};
use crate::storage::TicketStore;
use crate::views::{
    self, created_ticket_detail, CustomerDetail, EmployeeDetail, TicketDetail,
};

/// Errors surfaced by the lifecycle operations.
///
/// Each variant maps to exactly one response status at the dispatch
/// boundary: `NotFound` to 404, the other two to 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeskError {
    /// The id does not resolve in the relevant collection
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u32 },
    /// Ticket creation referenced a customer that does not exist
    #[error("unknown customer: {0}")]
    UnknownCustomer(u32),
    /// Update where the body id disagrees with the path id
    #[error("ticket id mismatch: path {path}, body {body}")]
    IdMismatch { path: u32, body: u32 },
}

impl DeskError {
    fn ticket_not_found(id: u32) -> Self {
        DeskError::NotFound { kind: "ticket", id }
    }
}

/// Executes service desk operations against a shared store.
///
/// Generic over the storage backend so tests and the server share the same
/// code path.
pub struct TicketService<S: TicketStore> {
    store: S,
}

impl<S: TicketStore> TicketService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All customers, in seed order.
    pub fn list_customers(&self) -> Vec<Customer> {
        self.store.customers()
    }

    /// All employees, in seed order.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.store.employees()
    }

    /// All service tickets, in insertion order.
    pub fn list_tickets(&self) -> Vec<ServiceTicket> {
        self.store.tickets()
    }

    /// Detail view of one customer, with their tickets flattened.
    pub fn customer_detail(&self, id: u32) -> Result<CustomerDetail, DeskError> {
        let customer = self
            .store
            .customer(id)
            .ok_or(DeskError::NotFound { kind: "customer", id })?;
        Ok(views::customer_detail(&self.store, &customer))
    }

    /// Detail view of one employee, with their assigned tickets flattened.
    pub fn employee_detail(&self, id: u32) -> Result<EmployeeDetail, DeskError> {
        let employee = self
            .store
            .employee(id)
            .ok_or(DeskError::NotFound { kind: "employee", id })?;
        Ok(views::employee_detail(&self.store, &employee))
    }

    /// Detail view of one ticket, with both parties resolved.
    pub fn ticket_detail(&self, id: u32) -> Result<TicketDetail, DeskError> {
        let ticket = self
            .store
            .ticket(id)
            .ok_or_else(|| DeskError::ticket_not_found(id))?;
        Ok(views::ticket_detail(&self.store, &ticket))
    }

    /// Create a ticket from a client draft.
    ///
    /// The draft's customer id must resolve to an existing customer; on a
    /// miss the store is left untouched. The store assigns the new id.
    /// Returns the detail view with the customer nested and no employee,
    /// matching the creation flow where assignment happens later.
    pub fn create_ticket(&self, draft: ServiceTicket) -> Result<TicketDetail, DeskError> {
        let customer = self
            .store
            .customer(draft.customer_id)
            .ok_or(DeskError::UnknownCustomer(draft.customer_id))?;

        let stored = self.store.insert_ticket(draft);
        Ok(created_ticket_detail(&stored, &customer))
    }

    /// Overwrite the ticket with the given id wholesale.
    ///
    /// The payload id must match the path id. Foreign keys are not
    /// re-validated here; a dangling key simply resolves to null in later
    /// views.
    pub fn update_ticket(&self, id: u32, payload: ServiceTicket) -> Result<(), DeskError> {
        if self.store.ticket(id).is_none() {
            return Err(DeskError::ticket_not_found(id));
        }
        if payload.id != id {
            return Err(DeskError::IdMismatch {
                path: id,
                body: payload.id,
            });
        }

        self.store.update_ticket(id, payload);
        Ok(())
    }

    /// Mark the ticket completed as of today.
    pub fn complete_ticket(&self, id: u32) -> Result<(), DeskError> {
        let mut ticket = self
            .store
            .ticket(id)
            .ok_or_else(|| DeskError::ticket_not_found(id))?;

        ticket.date_completed = Some(Local::now().date_naive());
        self.store.update_ticket(id, ticket);
        Ok(())
    }

    /// Remove the ticket with the given id.
    pub fn delete_ticket(&self, id: u32) -> Result<(), DeskError> {
        if self.store.remove_ticket(id) {
            Ok(())
        } else {
            Err(DeskError::ticket_not_found(id))
        }
    }
}
