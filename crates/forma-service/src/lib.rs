//! # forma-service: Boundary Operations for Forma
//!
//! The external-facing layer of the configurator: request DTOs, field
//! validation, error codes, and the [`ConfiguratorService`] facade tying
//! the Template Store and the pure engine together.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forma Service Layer                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Transport shell (HTTP/CLI, not bundled)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ DTOs in / DTOs out                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ forma-service (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   add_compatibility_rule      set_base_price                    │   │
//! │  │   add_options                 get_available_options             │   │
//! │  │   validate_configuration                                        │   │
//! │  └─────────────┬───────────────────────────────────┬───────────────┘   │
//! │                │                                   │                    │
//! │  ┌─────────────▼─────────────┐       ┌─────────────▼───────────────┐   │
//! │  │  forma-store              │       │  forma-core                 │   │
//! │  │  (injected TemplateStore) │       │  (pure rules/filter/price)  │   │
//! │  └───────────────────────────┘       └─────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use forma_service::{ConfiguratorService, SetBasePriceRequest};
//! use forma_store::MemoryTemplateStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = ConfiguratorService::new(Arc::new(MemoryTemplateStore::new()));
//!
//! let ack = service
//!     .set_base_price(SetBasePriceRequest {
//!         template_id: Some("chair".to_string()),
//!         base_price_cents: Some(100),
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(ack.template_id, "chair");
//! # }
//! ```

pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    AddOptionsRequest, AddRuleRequest, AvailableOptionDto, AvailableOptionsRequest, MutationAck,
    OptionPayload, SetBasePriceRequest, ValidateConfigurationRequest, ValidationResponse,
};
pub use error::{ApiError, ErrorCode};
pub use service::ConfiguratorService;
