//! In-memory store implementation.
//!
//! The only backend: all data lives in RAM and is discarded on process exit.
//! Collections are plain `Vec`s scanned linearly, which keeps lookup
//! semantics identical to insertion order and is well within the scale
//! envelope of this service.

use crate::domain::{Customer, Employee, ServiceTicket};
use crate::storage::TicketStore;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct Collections {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    tickets: Vec<ServiceTicket>,
}

/// In-memory store backed by `Vec`s behind a single read-write lock.
///
/// Clones share the same underlying data (`Arc`), so the server and tests
/// can hand out handles freely. Mutations take the write lock, so ticket
/// mutation is serialized while reads may run shared.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections::default())),
        }
    }

    /// Create a store with the given read-only parties and starting tickets.
    pub fn with_data(
        customers: Vec<Customer>,
        employees: Vec<Employee>,
        tickets: Vec<ServiceTicket>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections {
                customers,
                employees,
                tickets,
            })),
        }
    }

    /// Create a store seeded with the demo data set: three customers, two
    /// employees, and five tickets in a mix of open, completed, assigned and
    /// unassigned states.
    pub fn seeded() -> Self {
        let customers = vec![
            Customer {
                id: 1,
                name: "Dwight Schrute".to_string(),
                address: "123 Main Street".to_string(),
            },
            Customer {
                id: 2,
                name: "Jim Halpert".to_string(),
                address: "321 Other Street".to_string(),
            },
            Customer {
                id: 3,
                name: "Kelly Kapoor".to_string(),
                address: "456 Grape Street".to_string(),
            },
        ];

        let employees = vec![
            Employee {
                id: 1,
                name: "Stanley Hudson".to_string(),
                specialty: "Cell Phone Repair".to_string(),
            },
            Employee {
                id: 2,
                name: "Michael Scott".to_string(),
                specialty: "Customer Service".to_string(),
            },
        ];

        let tickets = vec![
            ServiceTicket {
                id: 1,
                customer_id: 1,
                employee_id: Some(2),
                description: "Phone doesn't turn on".to_string(),
                emergency: false,
                date_completed: NaiveDate::from_ymd_opt(2023, 11, 23),
            },
            ServiceTicket {
                id: 2,
                customer_id: 1,
                employee_id: Some(1),
                description: "Phone screen is cracked".to_string(),
                emergency: false,
                date_completed: None,
            },
            ServiceTicket {
                id: 3,
                customer_id: 2,
                employee_id: None,
                description: "Laptop won't open".to_string(),
                emergency: true,
                date_completed: NaiveDate::from_ymd_opt(2023, 11, 20),
            },
            ServiceTicket {
                id: 4,
                customer_id: 2,
                employee_id: Some(2),
                description: "Monitor is stuck on a black screen".to_string(),
                emergency: false,
                date_completed: None,
            },
            ServiceTicket {
                id: 5,
                customer_id: 3,
                employee_id: None,
                description: "Xbox has red ring of death".to_string(),
                emergency: true,
                date_completed: NaiveDate::from_ymd_opt(2023, 11, 15),
            },
        ];

        Self::with_data(customers, employees, tickets)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore for InMemoryStore {
    fn customer(&self, id: u32) -> Option<Customer> {
        self.inner
            .read()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    fn employee(&self, id: u32) -> Option<Employee> {
        self.inner
            .read()
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    fn ticket(&self, id: u32) -> Option<ServiceTicket> {
        self.inner
            .read()
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    fn customers(&self) -> Vec<Customer> {
        self.inner.read().customers.clone()
    }

    fn employees(&self) -> Vec<Employee> {
        self.inner.read().employees.clone()
    }

    fn tickets(&self) -> Vec<ServiceTicket> {
        self.inner.read().tickets.clone()
    }

    fn insert_ticket(&self, mut ticket: ServiceTicket) -> ServiceTicket {
        let mut inner = self.inner.write();
        // Next id is max + 1; an empty collection starts at 1.
        ticket.id = inner.tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        inner.tickets.push(ticket.clone());
        ticket
    }

    fn update_ticket(&self, id: u32, mut ticket: ServiceTicket) -> bool {
        let mut inner = self.inner.write();
        match inner.tickets.iter_mut().find(|t| t.id == id) {
            Some(stored) => {
                ticket.id = id;
                *stored = ticket;
                true
            }
            None => false,
        }
    }

    fn remove_ticket(&self, id: u32) -> bool {
        let mut inner = self.inner.write();
        match inner.tickets.iter().position(|t| t.id == id) {
            Some(index) => {
                inner.tickets.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

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
    fn test_first_ticket_in_empty_store_gets_id_one() {
        let store = InMemoryStore::new();
        let stored = store.insert_ticket(draft(1, "First"));
        assert_eq!(stored.id, 1);
    }

    #[test]
    fn test_insert_assigns_max_plus_one() {
        let store = InMemoryStore::seeded();
        let stored = store.insert_ticket(draft(1, "Sixth"));
        assert_eq!(stored.id, 6);

        // A gap below the max does not get reused
        assert!(store.remove_ticket(3));
        let next = store.insert_ticket(draft(1, "Seventh"));
        assert_eq!(next.id, 7);
    }

    #[test]
    fn test_insert_ignores_client_supplied_id() {
        let store = InMemoryStore::new();
        let mut ticket = draft(1, "Pushy client");
        ticket.id = 42;

        let stored = store.insert_ticket(ticket);
        assert_eq!(stored.id, 1);
        assert!(store.ticket(42).is_none());
    }

    #[test]
    fn test_tickets_preserve_insertion_order() {
        let store = InMemoryStore::new();
        store.insert_ticket(draft(1, "a"));
        store.insert_ticket(draft(2, "b"));
        store.insert_ticket(draft(1, "c"));

        let descriptions: Vec<_> = store
            .tickets()
            .iter()
            .map(|t| t.description.clone())
            .collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_overwrites_wholesale_but_keeps_id() {
        let store = InMemoryStore::seeded();

        let mut replacement = store.ticket(2).unwrap();
        replacement.id = 999; // stored id must win
        replacement.customer_id = 3;
        replacement.employee_id = None;
        replacement.description = "Reassigned".to_string();
        replacement.emergency = true;

        assert!(store.update_ticket(2, replacement));

        let stored = store.ticket(2).unwrap();
        assert_eq!(stored.id, 2);
        assert_eq!(stored.customer_id, 3);
        assert_eq!(stored.employee_id, None);
        assert_eq!(stored.description, "Reassigned");
        assert!(stored.emergency);
    }

    #[test]
    fn test_update_missing_ticket_returns_false() {
        let store = InMemoryStore::new();
        assert!(!store.update_ticket(7, draft(1, "nothing there")));
    }

    #[test]
    fn test_clone_shares_data() {
        let store1 = InMemoryStore::new();
        let store2 = store1.clone();

        store1.insert_ticket(draft(1, "shared"));

        let tickets = store2.tickets();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].description, "shared");
    }

    #[test]
    fn test_parties_are_read_only_surface() {
        let store = InMemoryStore::seeded();
        assert_eq!(store.customers().len(), 3);
        assert_eq!(store.employees().len(), 2);

        // Ticket mutation leaves the parties untouched
        store.insert_ticket(draft(1, "new"));
        store.remove_ticket(1);
        assert_eq!(store.customers().len(), 3);
        assert_eq!(store.employees().len(), 2);
    }

    proptest! {
        /// Every insert yields a fresh id strictly above all existing ids.
        #[test]
        fn prop_assigned_ids_are_unique_and_increasing(count in 1usize..40) {
            let store = InMemoryStore::new();
            let mut last_id = 0u32;

            for n in 0..count {
                let stored = store.insert_ticket(draft(1, &format!("t{n}")));
                prop_assert!(stored.id > last_id);
                last_id = stored.id;
            }

            let mut ids: Vec<_> = store.tickets().iter().map(|t| t.id).collect();
            let len = ids.len();
            ids.dedup();
            prop_assert_eq!(ids.len(), len);
        }

        /// Removals never disturb the relative order of the survivors.
        #[test]
        fn prop_remove_keeps_order(remove in 1u32..6) {
            let store = InMemoryStore::seeded();
            store.remove_ticket(remove);

            let ids: Vec<_> = store.tickets().iter().map(|t| t.id).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(ids, sorted);
        }
    }
}
