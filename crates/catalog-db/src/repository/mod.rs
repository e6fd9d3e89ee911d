//! # Repository Module
//!
//! Database repository implementation for the offline catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Screen call                                                           │
//! │       │                                                                 │
//! │       │  db.products().get_by_id("P1")                                 │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, product)                                            │
//! │  ├── update(&self, id, product)                                        │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Statement                                                  │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Easy to test against an in-memory database                          │
//! │  • Screens never see a connection handle                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
