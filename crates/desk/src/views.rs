//! Response view assembly.
//!
//! Views are acyclic projections built fresh per response, so the mutual
//! references between customers, employees and tickets never reach the
//! serializer. Nesting is capped at one level in every direction: a ticket
//! embedded in a party detail is flattened (no party inside), and a party
//! summary embedded in a ticket detail carries no ticket list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Customer, Employee, ServiceTicket};
use crate::relations;
use crate::storage::TicketStore;

/// Flattened ticket shape, used inside party details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketView {
    pub id: u32,
    pub customer_id: u32,
    pub employee_id: Option<u32>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDate>,
}

/// One-level customer summary nested inside a ticket detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: u32,
    pub name: String,
    pub address: String,
}

/// One-level employee summary nested inside a ticket detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

/// Single-ticket detail: the flattened fields plus resolved party summaries.
///
/// A dangling or absent foreign key leaves the corresponding summary null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDetail {
    pub id: u32,
    pub customer_id: u32,
    pub customer: Option<CustomerRef>,
    pub employee_id: Option<u32>,
    pub employee: Option<EmployeeRef>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDate>,
}

/// Single-customer detail with that customer's tickets, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetail {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub tickets: Vec<TicketView>,
}

/// Single-employee detail with that employee's tickets, flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub tickets: Vec<TicketView>,
}

/// Flatten a ticket without resolving its parties.
pub fn ticket_view(ticket: &ServiceTicket) -> TicketView {
    TicketView {
        id: ticket.id,
        customer_id: ticket.customer_id,
        employee_id: ticket.employee_id,
        description: ticket.description.clone(),
        emergency: ticket.emergency,
        date_completed: ticket.date_completed,
    }
}

fn customer_ref(customer: &Customer) -> CustomerRef {
    CustomerRef {
        id: customer.id,
        name: customer.name.clone(),
        address: customer.address.clone(),
    }
}

fn employee_ref(employee: &Employee) -> EmployeeRef {
    EmployeeRef {
        id: employee.id,
        name: employee.name.clone(),
        specialty: employee.specialty.clone(),
    }
}

/// Assemble the single-ticket detail with both parties resolved.
pub fn ticket_detail<S: TicketStore>(store: &S, ticket: &ServiceTicket) -> TicketDetail {
    TicketDetail {
        id: ticket.id,
        customer_id: ticket.customer_id,
        customer: relations::customer_of(store, ticket)
            .as_ref()
            .map(customer_ref),
        employee_id: ticket.employee_id,
        employee: relations::employee_of(store, ticket)
            .as_ref()
            .map(employee_ref),
        description: ticket.description.clone(),
        emergency: ticket.emergency,
        date_completed: ticket.date_completed,
    }
}

/// Assemble the detail view for a newly created ticket.
///
/// The customer was just validated, so it nests resolved; the employee is
/// omitted since the creation flow never assigns one.
pub fn created_ticket_detail(ticket: &ServiceTicket, customer: &Customer) -> TicketDetail {
    TicketDetail {
        id: ticket.id,
        customer_id: ticket.customer_id,
        customer: Some(customer_ref(customer)),
        employee_id: ticket.employee_id,
        employee: None,
        description: ticket.description.clone(),
        emergency: ticket.emergency,
        date_completed: ticket.date_completed,
    }
}

/// Assemble the single-customer detail with that customer's tickets.
pub fn customer_detail<S: TicketStore>(store: &S, customer: &Customer) -> CustomerDetail {
    CustomerDetail {
        id: customer.id,
        name: customer.name.clone(),
        address: customer.address.clone(),
        tickets: relations::tickets_for_customer(store, customer.id)
            .iter()
            .map(ticket_view)
            .collect(),
    }
}

/// Assemble the single-employee detail with that employee's tickets.
pub fn employee_detail<S: TicketStore>(store: &S, employee: &Employee) -> EmployeeDetail {
    EmployeeDetail {
        id: employee.id,
        name: employee.name.clone(),
        specialty: employee.specialty.clone(),
        tickets: relations::tickets_for_employee(store, employee.id)
            .iter()
            .map(ticket_view)
            .collect(),
    }
}
