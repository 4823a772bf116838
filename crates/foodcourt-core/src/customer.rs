//! # Customers
//!
//! The phone-keyed customer registry and the per-customer profile record.
//!
//! ## Registration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register(name, phone)                                                  │
//! │       │                                                                 │
//! │       ├── phone known?  ──► Returning(existing)   no counter change     │
//! │       │                                                                 │
//! │       └── phone new     ──► Counters::allocate_customer_id()            │
//! │                             insert (phone → name, id)                   │
//! │                             New(customer)                               │
//! │                                                                         │
//! │  The caller persists: customers.txt, customer_counter.txt and one       │
//! │  profile record appended to customer_data.txt.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::counters::{Counters, CustomerId};
use crate::error::CoreResult;
use crate::record::{Record, RecordReader, RecordWriter};

/// A known customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    /// `None` for customers whose profile record was never journaled.
    pub id: Option<CustomerId>,
}

/// Outcome of a customer login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// First time this phone was seen; an id was allocated.
    New(Customer),
    /// Phone already registered; the stored entry is returned unchanged.
    Returning(Customer),
}

impl Registration {
    pub fn customer(&self) -> &Customer {
        match self {
            Registration::New(c) | Registration::Returning(c) => c,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Registration::New(_))
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Phone → customer, ordered by phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerRegistry {
    by_phone: BTreeMap<String, Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_phone.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_phone.is_empty()
    }

    pub fn get(&self, phone: &str) -> Option<&Customer> {
        self.by_phone.get(phone)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.by_phone.values()
    }

    /// Registers a login. A known phone is never inserted twice.
    ///
    /// Name and phone are expected to be validated already.
    pub fn register(&mut self, name: &str, phone: &str, counters: &mut Counters) -> Registration {
        if let Some(existing) = self.by_phone.get(phone) {
            return Registration::Returning(existing.clone());
        }

        let customer = Customer {
            name: name.to_string(),
            phone: phone.to_string(),
            id: Some(counters.allocate_customer_id()),
        };
        self.by_phone.insert(phone.to_string(), customer.clone());
        Registration::New(customer)
    }

    /// Gives customers their ids back from journaled profiles.
    ///
    /// Profiles for phones that are not in the directory are ignored. When a
    /// phone was journaled more than once, the first id wins.
    pub fn restore_ids(&mut self, profiles: &[CustomerProfile]) -> usize {
        let mut restored = 0;
        for profile in profiles {
            if let Some(customer) = self.by_phone.get_mut(&profile.phone) {
                if customer.id.is_none() {
                    customer.id = Some(profile.id);
                    restored += 1;
                }
            }
        }
        restored
    }

    // -------------------------------------------------------------------------
    // Directory file (customers.txt): repeating (phone, name) pairs
    // -------------------------------------------------------------------------

    pub fn encode_directory(&self) -> String {
        let mut out = RecordWriter::new();
        for customer in self.by_phone.values() {
            out.field(&customer.phone).field(&customer.name);
        }
        out.finish()
    }

    /// Parses the directory. A trailing phone with no name line is dropped.
    pub fn decode_directory(text: &str) -> Self {
        let mut registry = CustomerRegistry::new();
        let mut reader = RecordReader::new(text);

        while !reader.is_exhausted() {
            let (Ok(phone), Ok(name)) = (reader.next_field(), reader.next_field()) else {
                break;
            };
            registry.by_phone.insert(
                phone.to_string(),
                Customer {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    id: None,
                },
            );
        }

        registry
    }
}

// =============================================================================
// Profile Journal (customer_data.txt)
// =============================================================================

/// One journaled registration: name, phone, id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub phone: String,
    pub id: CustomerId,
}

impl CustomerProfile {
    /// Profile for a freshly registered customer; `None` if it has no id.
    pub fn of(customer: &Customer) -> Option<Self> {
        customer.id.map(|id| CustomerProfile {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            id,
        })
    }

    /// Reads profiles until the first damaged one.
    pub fn decode_journal(text: &str) -> Vec<CustomerProfile> {
        let mut reader = RecordReader::new(text);
        let mut profiles = Vec::new();
        while !reader.is_exhausted() {
            match CustomerProfile::read_record(&mut reader) {
                Ok(profile) => profiles.push(profile),
                Err(_) => break,
            }
        }
        profiles
    }
}

impl Record for CustomerProfile {
    fn write_record(&self, out: &mut RecordWriter) {
        out.field(&self.name).field(&self.phone).field(self.id);
    }

    fn read_record(reader: &mut RecordReader<'_>) -> CoreResult<Self> {
        let name = reader.next_field()?.to_string();
        let phone = reader.next_field()?.to_string();
        let id = reader.next_parsed("customer id")?;
        Ok(CustomerProfile { name, phone, id })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
