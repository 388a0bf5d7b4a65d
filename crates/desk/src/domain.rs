//! Core domain types for the service desk.
//!
//! This module defines the three entity kinds held by the store: customers,
//! employees, and the service tickets that relate them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer who can file service tickets.
///
/// Customers are seeded at process start and are read-only for the lifetime
/// of the process; no create/update/delete operations exist for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier (positive integer)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Postal address
    pub address: String,
}

/// An employee who can be assigned to service tickets.
///
/// Seeded at process start, read-only afterwards, like [`Customer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (positive integer)
    pub id: u32,
    /// Display name
    pub name: String,
    /// Specialty label (e.g. "Cell Phone Repair")
    pub specialty: String,
}

/// A unit of repair work linking a customer and optionally an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTicket {
    /// Unique identifier, assigned by the store on creation.
    ///
    /// Defaults to 0 when absent from a request body; the store overwrites
    /// it on insert, so clients never pick ids.
    #[serde(default)]
    pub id: u32,
    /// Id of the customer who filed the ticket. Must reference an existing
    /// customer at creation time.
    pub customer_id: u32,
    /// Id of the assigned employee, if any. Absent means unassigned. A
    /// dangling value is accepted and resolves to "no employee" in views.
    #[serde(default)]
    pub employee_id: Option<u32>,
    /// Free-text description of the work
    pub description: String,
    /// Whether the ticket is an emergency
    #[serde(default)]
    pub emergency: bool,
    /// Date the work was completed. Absent means the ticket is open.
    #[serde(default)]
    pub date_completed: Option<NaiveDate>,
}

impl ServiceTicket {
    /// Check whether this ticket is still open (no completion date).
    pub fn is_open(&self) -> bool {
        self.date_completed.is_none()
    }
}
