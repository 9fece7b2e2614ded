//! # Data Transfer Objects
//!
//! Request and response shapes for the boundary operations.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract
//! - `Option<_>` request fields make "missing" representable, so the
//!   service can answer with a precise validation error instead of a
//!   deserialization failure
//! - serde rename to camelCase for JS consumption; ts-rs exports keep the
//!   frontend types in sync without manual work

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use forma_core::{ChoiceOption, OptionSummary};

// =============================================================================
// Requests
// =============================================================================

/// Request to append a compatibility rule to a template.
///
/// All four fields are required; the rule type is a free-form string so
/// unrecognized types can be stored (they never block, by contract).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddRuleRequest {
    pub template_id: Option<String>,
    pub rule_type: Option<String>,
    pub primary_choice_id: Option<String>,
    pub secondary_choice_id: Option<String>,
}

/// Request to overwrite a template's base price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SetBasePriceRequest {
    pub template_id: Option<String>,
    pub base_price_cents: Option<i64>,
}

/// One option entry in an [`AddOptionsRequest`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OptionPayload {
    pub name: String,
    pub price_delta_cents: i64,
}

impl From<OptionPayload> for ChoiceOption {
    fn from(payload: OptionPayload) -> Self {
        ChoiceOption::new(payload.name, payload.price_delta_cents)
    }
}

/// Request to replace one category's entire option catalog.
///
/// The map's insertion order becomes the catalog order, which in turn is
/// the order available-option listings come back in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddOptionsRequest {
    pub template_id: Option<String>,
    pub category_id: Option<String>,
    pub options: Option<IndexMap<String, OptionPayload>>,
}

/// Request for the options of one category still legal under the current
/// partial selections.
///
/// `current_selections` uses the self-mapping encoding: an entry whose
/// value echoes its key means that choice is selected. An absent map is a
/// validation error; an *empty* map is a legal "nothing selected yet".
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AvailableOptionsRequest {
    pub template_id: Option<String>,
    pub target_category_id: Option<String>,
    pub current_selections: Option<HashMap<String, String>>,
}

/// Request to validate a complete selection set and price it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidateConfigurationRequest {
    pub template_id: Option<String>,
    pub selections: Option<HashMap<String, String>>,
}

// =============================================================================
// Responses
// =============================================================================

/// Acknowledgement of a successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MutationAck {
    /// The (possibly auto-created) template the mutation landed on.
    pub template_id: String,
}

/// One still-available option, as listed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AvailableOptionDto {
    pub choice_id: String,
    pub name: String,
    pub price_delta_cents: i64,
}

impl From<OptionSummary> for AvailableOptionDto {
    fn from(summary: OptionSummary) -> Self {
        AvailableOptionDto {
            choice_id: summary.choice_id,
            name: summary.name,
            price_delta_cents: summary.price_delta_cents,
        }
    }
}

/// The structured outcome of `validate_configuration`.
///
/// A failing configuration is a *successful* response with
/// `is_valid: false`; only malformed requests and unknown templates are
/// errors.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub is_valid: bool,

    /// Total price in cents; present only when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_cents: Option<i64>,

    /// The selections as submitted; echoed back only when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selections: Option<HashMap<String, String>>,

    /// Violation messages in stored rule order; present only when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ValidationResponse {
    /// A passing verdict with its price.
    pub fn valid(total_price_cents: i64, selections: HashMap<String, String>) -> Self {
        ValidationResponse {
            is_valid: true,
            total_price_cents: Some(total_price_cents),
            selections: Some(selections),
            errors: None,
        }
    }

    /// A failing verdict with its ordered violation messages.
    pub fn invalid(errors: Vec<String>) -> Self {
        ValidationResponse {
            is_valid: false,
            total_price_cents: None,
            selections: None,
            errors: Some(errors),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_shape() {
        let request: AddRuleRequest = serde_json::from_str(
            r#"{
                "templateId": "chair",
                "ruleType": "REQUIRES",
                "primaryChoiceId": "legs_wood",
                "secondaryChoiceId": "finish_oak"
            }"#,
        )
        .unwrap();

        assert_eq!(request.template_id.as_deref(), Some("chair"));
        assert_eq!(request.rule_type.as_deref(), Some("REQUIRES"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let request: AddRuleRequest = serde_json::from_str(r#"{"templateId": "chair"}"#).unwrap();
        assert!(request.rule_type.is_none());
        assert!(request.primary_choice_id.is_none());
    }

    #[test]
    fn test_invalid_response_omits_price() {
        let response = ValidationResponse::invalid(vec!["\"a\" requires \"b\"".to_string()]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isValid"], false);
        assert!(json.get("totalPriceCents").is_none());
        assert_eq!(json["errors"][0], "\"a\" requires \"b\"");
    }

    #[test]
    fn test_valid_response_omits_errors() {
        let response = ValidationResponse::valid(130, HashMap::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isValid"], true);
        assert_eq!(json["totalPriceCents"], 130);
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn test_option_payload_order_preserved() {
        let request: AddOptionsRequest = serde_json::from_str(
            r#"{
                "templateId": "chair",
                "categoryId": "legs",
                "options": {
                    "z": {"name": "Z", "priceDeltaCents": 1},
                    "a": {"name": "A", "priceDeltaCents": 2}
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<&String> = request.options.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
