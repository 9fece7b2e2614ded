//! # Configurator Service
//!
//! The five boundary operations, wired over an injected Template Store.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Boundary Operation Flow                             │
//! │                                                                         │
//! │  Request DTO                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Field validation (missing/empty) ── fail ──► ApiError VALIDATION_ERROR│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Template Store (mutate, or snapshot read) ── miss ──► NOT_FOUND        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  forma-core (filter / validate, pure)                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Response DTO                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations never run validation and validation never writes, so a
//! failed request leaves no partial state behind.

use std::sync::Arc;

use tracing::{debug, info};

use forma_core::filter::available_options;
use forma_core::validate::{validate_configuration, ConfigurationVerdict};
use forma_core::validation::{validate_identifier, validate_present};
use forma_core::{CategoryOptions, Rule, RuleType, SelectionContext};
use forma_store::TemplateStore;

use crate::dto::{
    AddOptionsRequest, AddRuleRequest, AvailableOptionDto, AvailableOptionsRequest, MutationAck,
    SetBasePriceRequest, ValidateConfigurationRequest, ValidationResponse,
};
use crate::error::ApiError;

/// The boundary facade over one Template Store.
///
/// ## Injection
/// Holds `Arc<dyn TemplateStore>` rather than a concrete store: the
/// transient in-memory store and any future durable one are
/// interchangeable from here up. No ambient global state.
#[derive(Clone)]
pub struct ConfiguratorService {
    store: Arc<dyn TemplateStore>,
}

impl ConfiguratorService {
    /// Creates a service over the given store.
    pub fn new(store: Arc<dyn TemplateStore>) -> Self {
        ConfiguratorService { store }
    }

    /// Appends a compatibility rule to a template's ordered rule set.
    ///
    /// Auto-creates the template on first use. Unrecognized rule type
    /// strings are stored as [`RuleType::Unknown`] and never block a
    /// configuration.
    ///
    /// ## Errors
    /// `VALIDATION_ERROR` when any of the four fields is missing or empty.
    pub async fn add_compatibility_rule(
        &self,
        request: AddRuleRequest,
    ) -> Result<MutationAck, ApiError> {
        let template_id = validate_identifier("templateId", request.template_id.as_deref())?;
        let rule_type = validate_identifier("ruleType", request.rule_type.as_deref())?;
        let primary =
            validate_identifier("primaryChoiceId", request.primary_choice_id.as_deref())?;
        let secondary =
            validate_identifier("secondaryChoiceId", request.secondary_choice_id.as_deref())?;

        let rule = Rule::new(RuleType::parse(&rule_type), primary, secondary);
        self.store.add_rule(&template_id, rule).await?;

        info!(template_id = %template_id, "Compatibility rule added");
        Ok(MutationAck { template_id })
    }

    /// Overwrites a template's base price, auto-creating on first use.
    ///
    /// ## Errors
    /// `VALIDATION_ERROR` when the template id or base price is missing.
    pub async fn set_base_price(
        &self,
        request: SetBasePriceRequest,
    ) -> Result<MutationAck, ApiError> {
        let template_id = validate_identifier("templateId", request.template_id.as_deref())?;
        let base_price_cents = validate_present("basePrice", request.base_price_cents)?;

        self.store
            .set_base_price(&template_id, base_price_cents)
            .await?;

        info!(template_id = %template_id, base_price_cents, "Base price set");
        Ok(MutationAck { template_id })
    }

    /// Replaces one category's entire option catalog (overwrite, not
    /// merge), auto-creating the template on first use.
    ///
    /// ## Errors
    /// `VALIDATION_ERROR` when the template id or category id is
    /// missing/empty, or the options map is absent.
    pub async fn add_options(&self, request: AddOptionsRequest) -> Result<MutationAck, ApiError> {
        let template_id = validate_identifier("templateId", request.template_id.as_deref())?;
        let category_id = validate_identifier("categoryId", request.category_id.as_deref())?;
        let payload = validate_present("options", request.options)?;

        // Payload order becomes catalog order
        let options: CategoryOptions = payload
            .into_iter()
            .map(|(choice_id, option)| (choice_id, option.into()))
            .collect();

        let count = options.len();
        self.store
            .set_options(&template_id, &category_id, options)
            .await?;

        info!(
            template_id = %template_id,
            category_id = %category_id,
            count,
            "Category options replaced"
        );
        Ok(MutationAck { template_id })
    }

    /// Lists the target category's options still legal under the current
    /// partial selections, in catalog order.
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` when the template id or category id is
    ///   missing/empty, or `currentSelections` is absent (an empty map is
    ///   fine: nothing selected yet)
    /// - `NOT_FOUND` when the template was never touched by a mutation
    ///   (deliberately distinct from an unknown *category*, which is an
    ///   empty list)
    pub async fn get_available_options(
        &self,
        request: AvailableOptionsRequest,
    ) -> Result<Vec<AvailableOptionDto>, ApiError> {
        let template_id = validate_identifier("templateId", request.template_id.as_deref())?;
        let category_id =
            validate_identifier("targetCategoryId", request.target_category_id.as_deref())?;
        let selections = validate_present("currentSelections", request.current_selections)?;

        let template = self.store.get_template(&template_id).await?;
        let context = SelectionContext::from_map(&selections);

        let options = available_options(&template, &category_id, &context);
        debug!(
            template_id = %template_id,
            category_id = %category_id,
            count = options.len(),
            "Filtered available options"
        );

        Ok(options.into_iter().map(AvailableOptionDto::from).collect())
    }

    /// Validates a complete selection set against every rule and, only if
    /// none is violated, prices the configuration.
    ///
    /// A rule violation is a successful response with `is_valid: false`,
    /// never an error.
    ///
    /// ## Errors
    /// - `VALIDATION_ERROR` when the template id is missing/empty or
    ///   `selections` is absent
    /// - `NOT_FOUND` when the template was never touched by a mutation
    pub async fn validate_configuration(
        &self,
        request: ValidateConfigurationRequest,
    ) -> Result<ValidationResponse, ApiError> {
        let template_id = validate_identifier("templateId", request.template_id.as_deref())?;
        let selections = validate_present("selections", request.selections)?;

        let template = self.store.get_template(&template_id).await?;
        let context = SelectionContext::from_map(&selections);

        let verdict = validate_configuration(&template, &context);
        debug!(
            template_id = %template_id,
            is_valid = verdict.is_valid(),
            "Validated configuration"
        );

        Ok(match verdict {
            ConfigurationVerdict::Valid { total_price_cents } => {
                ValidationResponse::valid(total_price_cents, selections)
            }
            ConfigurationVerdict::Invalid { .. } => {
                ValidationResponse::invalid(verdict.error_messages())
            }
        })
    }
}
