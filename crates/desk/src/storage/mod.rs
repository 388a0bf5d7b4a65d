//! Storage abstraction for the entity collections.
//!
//! This module defines the `TicketStore` trait that abstracts the three
//! collections (customers, employees, service tickets), so the lifecycle
//! operations and the server stay decoupled from the backing structure.

use crate::domain::{Customer, Employee, ServiceTicket};

pub mod memory;

// Re-export for convenience
pub use memory::InMemoryStore;

/// Trait for backends holding the customer, employee and ticket collections.
///
/// Customers and employees are read-only; only tickets mutate. Lookups match
/// on the id field exactly, and the list methods return the collections in
/// insertion order. Implementations must be `Clone` to support shared access
/// patterns, and clones must observe the same data.
///
/// # Examples
///
/// ```
/// use desk::storage::{InMemoryStore, TicketStore};
///
/// let store = InMemoryStore::seeded();
///
/// let ticket = store.ticket(1).unwrap();
/// assert_eq!(ticket.customer_id, 1);
/// assert!(store.customer(ticket.customer_id).is_some());
/// ```
pub trait TicketStore: Clone + Send + Sync + 'static {
    /// Look up a customer by id. `None` on a miss.
    fn customer(&self, id: u32) -> Option<Customer>;

    /// Look up an employee by id. `None` on a miss.
    fn employee(&self, id: u32) -> Option<Employee>;

    /// Look up a service ticket by id. `None` on a miss.
    fn ticket(&self, id: u32) -> Option<ServiceTicket>;

    /// All customers, in insertion order.
    fn customers(&self) -> Vec<Customer>;

    /// All employees, in insertion order.
    fn employees(&self) -> Vec<Employee>;

    /// All service tickets, in insertion order.
    fn tickets(&self) -> Vec<ServiceTicket>;

    /// Append a ticket, assigning it the next free id.
    ///
    /// The id on the passed ticket is ignored and overwritten with
    /// `max existing id + 1`, or 1 when the collection is empty. Returns the
    /// stored ticket with its assigned id.
    fn insert_ticket(&self, ticket: ServiceTicket) -> ServiceTicket;

    /// Replace the ticket with the given id wholesale.
    ///
    /// The stored ticket keeps `id`; every other field is taken from
    /// `ticket`. Returns false if no ticket with that id exists.
    fn update_ticket(&self, id: u32, ticket: ServiceTicket) -> bool;

    /// Remove the ticket with the given id. Returns true if one was removed.
    fn remove_ticket(&self, id: u32) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(customer_id: u32, description: &str) -> ServiceTicket {
        ServiceTicket {
            id: 0,
            customer_id,
            employee_id: None,
            description: description.to_string(),
            emergency: false,
            date_completed: None,
        }
    }

    #[test]
    fn test_trait_insert_and_lookup() {
        fn check<S: TicketStore>(store: S) {
            let stored = store.insert_ticket(draft(1, "Phone"));
            let loaded = store.ticket(stored.id).unwrap();
            assert_eq!(loaded.description, "Phone");
            assert_eq!(loaded.customer_id, 1);
        }

        check(InMemoryStore::new());
        check(InMemoryStore::seeded());
    }

    #[test]
    fn test_trait_lookup_matches_id_exactly() {
        let store = InMemoryStore::seeded();

        // Id 1 exists in all three collections and must resolve per-collection
        assert_eq!(store.customer(1).unwrap().name, "Dwight Schrute");
        assert_eq!(store.employee(1).unwrap().name, "Stanley Hudson");
        assert_eq!(store.ticket(1).unwrap().customer_id, 1);

        assert!(store.customer(99).is_none());
        assert!(store.employee(99).is_none());
        assert!(store.ticket(99).is_none());
    }

    #[test]
    fn test_trait_remove_ticket() {
        fn check<S: TicketStore>(store: S) {
            let stored = store.insert_ticket(draft(1, "Delete me"));
            let before = store.tickets().len();

            assert!(store.remove_ticket(stored.id));
            assert_eq!(store.tickets().len(), before - 1);
            assert!(store.ticket(stored.id).is_none());
            // Second removal finds nothing
            assert!(!store.remove_ticket(stored.id));
        }

        check(InMemoryStore::new());
        check(InMemoryStore::seeded());
    }
}
