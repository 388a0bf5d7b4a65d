//! Service Desk Core Library
//!
//! This library provides the core functionality for service ticket tracking:
//! the entity store, relationship resolution between customers, employees and
//! tickets, response view assembly, and the ticket lifecycle operations.
//! The HTTP surface lives in the companion server crate.

pub mod domain;
pub mod ops;
pub mod relations;
pub mod storage;
pub mod views;

// Re-export commonly used types
pub use domain::{Customer, Employee, ServiceTicket};
pub use ops::{DeskError, TicketService};
pub use storage::{InMemoryStore, TicketStore};
pub use views::{CustomerDetail, EmployeeDetail, TicketDetail, TicketView};
