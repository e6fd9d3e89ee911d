//! # catalog-core: Pure Domain Types for the Offline Catalog
//!
//! This crate contains the domain layer of the catalog app as pure types
//! and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Offline Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (mobile shell)                       │   │
//! │  │    List ──► Details ──► Add ──► Edit                            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   error   │  │ validation│                  │   │
//! │  │   │  Product  │  │ Validation│  │   rules   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   catalog-db (Database Layer)                   │   │
//! │  │            SQLite queries, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`error`] - Validation error types
//! - [`validation`] - Field-level input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Opaque Prices**: `price` stays decimal text end to end; no float math
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use catalog_core::Product` instead of
// `use catalog_core::types::Product`

pub use error::ValidationError;
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a caller-supplied product id.
///
/// ## Business Reason
/// Ids are typed or scanned on the Add screen; 64 characters covers
/// UUIDs, SKUs, and barcodes with room to spare while keeping the
/// primary key index compact.
pub const MAX_ID_LEN: usize = 64;

/// Maximum length of a product display name.
pub const MAX_NAME_LEN: usize = 200;
