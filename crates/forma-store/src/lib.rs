//! # forma-store: Template Store for Forma
//!
//! This crate owns all Template state behind a narrow read/mutate
//! contract. Everything above it (service boundary) injects a store;
//! everything below it (forma-core) only ever sees cloned snapshots.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     forma-store (Template Store)                        │
//! │                                                                         │
//! │   ┌──────────────────────────────────────────────────────────────┐     │
//! │   │              trait TemplateStore (the contract)              │     │
//! │   │                                                              │     │
//! │   │   ensure_template   add_rule   set_base_price                │     │
//! │   │   set_options       get_template                             │     │
//! │   └──────────────┬──────────────────────────┬────────────────────┘     │
//! │                  │                          │                           │
//! │   ┌──────────────▼──────────────┐   ┌───────▼───────────────────┐      │
//! │   │    MemoryTemplateStore      │   │  (future) durable store   │      │
//! │   │    RwLock<HashMap<..>>      │   │  e.g. sqlx repository     │      │
//! │   │    reference implementation │   │  behind the same trait    │      │
//! │   └─────────────────────────────┘   └───────────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract Invariants
//! - Every mutation is idempotent-by-identifier and auto-creates the
//!   template shell (`base price 0, no options, no rules`) on first use
//! - `get_template` is the only operation that can fail with "not found"
//! - Mutations are serialized; reads observe a consistent snapshot of a
//!   single template (templates are independent, so no cross-template
//!   coordination exists)

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryTemplateStore;

use async_trait::async_trait;
use forma_core::{CategoryOptions, Rule, Template};

// =============================================================================
// Template Store Contract
// =============================================================================

/// The persistence boundary for templates.
///
/// Object-safe on purpose: callers hold an `Arc<dyn TemplateStore>` so the
/// in-memory reference implementation can be swapped for a durable one
/// without touching the engine or the service boundary.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Creates the empty template shell if `template_id` is absent.
    /// A no-op when the template already exists.
    async fn ensure_template(&self, template_id: &str) -> StoreResult<()>;

    /// Appends a rule to the template's ordered rule sequence,
    /// auto-creating the template if needed.
    async fn add_rule(&self, template_id: &str, rule: Rule) -> StoreResult<()>;

    /// Overwrites the template's base price, auto-creating if needed.
    async fn set_base_price(&self, template_id: &str, base_price_cents: i64) -> StoreResult<()>;

    /// Replaces (not merges) one category's entire option catalog,
    /// auto-creating the template if needed.
    async fn set_options(
        &self,
        template_id: &str,
        category_id: &str,
        options: CategoryOptions,
    ) -> StoreResult<()>;

    /// Returns a consistent snapshot of the template.
    ///
    /// ## Errors
    /// `StoreError::TemplateNotFound` if no mutation ever touched this id.
    async fn get_template(&self, template_id: &str) -> StoreResult<Template>;
}
