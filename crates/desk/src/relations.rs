//! Relationship resolution between tickets and the parties they reference.
//!
//! Tickets carry foreign keys; these functions turn them into the related
//! entities by scanning the store. A dangling or absent key resolves to
//! "no related entity", never an error: views render such misses as null.

use crate::domain::{Customer, Employee, ServiceTicket};
use crate::storage::TicketStore;

/// All tickets filed by the given customer, in store order.
pub fn tickets_for_customer<S: TicketStore>(store: &S, customer_id: u32) -> Vec<ServiceTicket> {
    store
        .tickets()
        .into_iter()
        .filter(|t| t.customer_id == customer_id)
        .collect()
}

/// All tickets assigned to the given employee, in store order.
///
/// Unassigned tickets (no employee id) never match.
pub fn tickets_for_employee<S: TicketStore>(store: &S, employee_id: u32) -> Vec<ServiceTicket> {
    store
        .tickets()
        .into_iter()
        .filter(|t| t.employee_id == Some(employee_id))
        .collect()
}

/// The customer a ticket was filed by, if the key resolves.
pub fn customer_of<S: TicketStore>(store: &S, ticket: &ServiceTicket) -> Option<Customer> {
    store.customer(ticket.customer_id)
}

/// The employee a ticket is assigned to, if any and if the key resolves.
pub fn employee_of<S: TicketStore>(store: &S, ticket: &ServiceTicket) -> Option<Employee> {
    ticket.employee_id.and_then(|id| store.employee(id))
}
