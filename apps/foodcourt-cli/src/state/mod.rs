//! # State Module
//!
//! The single owner of mutable food court state for one session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Ownership                                      │
//! │                                                                         │
//! │  run()                                                                  │
//! │   ├── EventLog            created once, lent to the manager            │
//! │   └── FoodCourtManager<'log>                                           │
//! │         ├── FoodCourtStore    file access only, no state               │
//! │         ├── Counters          order id, customer id, overall sales     │
//! │         ├── Vec<Stall>        one per stall, with order history        │
//! │         └── CustomerRegistry  phone → customer                         │
//! │                                                                         │
//! │  Commands borrow the manager mutably for the length of one action.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod manager;

pub use manager::FoodCourtManager;
