//! # Configurator Demo
//!
//! Seeds the classic chair template and walks it through the boundary
//! operations against the in-memory store.
//!
//! ## Usage
//! ```bash
//! cargo run -p forma-service --bin demo
//!
//! # With debug logging from the store and service
//! RUST_LOG=forma=debug cargo run -p forma-service --bin demo
//! ```
//!
//! ## Seeded Template
//! - Base price: 100 cents
//! - Categories: legs (wood +10, metal +15), finish (oak +20, matte +5)
//! - Rules: wooden legs REQUIRE oak finish,
//!          metal legs are INCOMPATIBLE_WITH oak finish

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing_subscriber::EnvFilter;

use forma_service::{
    AddOptionsRequest, AddRuleRequest, AvailableOptionsRequest, ConfiguratorService,
    OptionPayload, SetBasePriceRequest, ValidateConfigurationRequest,
};
use forma_store::MemoryTemplateStore;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=forma=trace` - Show trace for forma crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,forma=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn self_mapped(choices: &[&str]) -> HashMap<String, String> {
    choices
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    println!("🪑 Forma Configurator Demo");
    println!("==========================");

    let service = ConfiguratorService::new(Arc::new(MemoryTemplateStore::new()));

    // Seed the chair template
    service
        .set_base_price(SetBasePriceRequest {
            template_id: Some("chair".to_string()),
            base_price_cents: Some(100),
        })
        .await?;

    let mut legs = IndexMap::new();
    legs.insert(
        "legs_wood".to_string(),
        OptionPayload {
            name: "Wooden legs".to_string(),
            price_delta_cents: 10,
        },
    );
    legs.insert(
        "legs_metal".to_string(),
        OptionPayload {
            name: "Metal legs".to_string(),
            price_delta_cents: 15,
        },
    );
    service
        .add_options(AddOptionsRequest {
            template_id: Some("chair".to_string()),
            category_id: Some("legs".to_string()),
            options: Some(legs),
        })
        .await?;

    let mut finish = IndexMap::new();
    finish.insert(
        "finish_oak".to_string(),
        OptionPayload {
            name: "Oak finish".to_string(),
            price_delta_cents: 20,
        },
    );
    finish.insert(
        "finish_matte".to_string(),
        OptionPayload {
            name: "Matte finish".to_string(),
            price_delta_cents: 5,
        },
    );
    service
        .add_options(AddOptionsRequest {
            template_id: Some("chair".to_string()),
            category_id: Some("finish".to_string()),
            options: Some(finish),
        })
        .await?;

    for (rule_type, primary, secondary) in [
        ("REQUIRES", "legs_wood", "finish_oak"),
        ("INCOMPATIBLE_WITH", "legs_metal", "finish_oak"),
    ] {
        service
            .add_compatibility_rule(AddRuleRequest {
                template_id: Some("chair".to_string()),
                rule_type: Some(rule_type.to_string()),
                primary_choice_id: Some(primary.to_string()),
                secondary_choice_id: Some(secondary.to_string()),
            })
            .await?;
    }

    println!("✓ Seeded template \"chair\" (base 100, 2 categories, 2 rules)");
    println!();

    // Rules are checked against the submitted selections themselves:
    // {legs_metal} violates nothing yet, so the full finish catalog lists
    let options = service
        .get_available_options(AvailableOptionsRequest {
            template_id: Some("chair".to_string()),
            target_category_id: Some("finish".to_string()),
            current_selections: Some(self_mapped(&["legs_metal"])),
        })
        .await?;

    println!("Finish options with {{legs_metal}} selected:");
    for option in &options {
        println!(
            "  {} ({}) +{} cents",
            option.name, option.choice_id, option.price_delta_cents
        );
    }
    println!();

    // A selection set that already conflicts empties every listing
    let options = service
        .get_available_options(AvailableOptionsRequest {
            template_id: Some("chair".to_string()),
            target_category_id: Some("finish".to_string()),
            current_selections: Some(self_mapped(&["legs_metal", "finish_oak"])),
        })
        .await?;
    println!(
        "Finish options with the conflicting {{legs_metal, finish_oak}}: {} entries",
        options.len()
    );
    println!();

    // An incomplete configuration: wooden legs without the required oak
    let verdict = service
        .validate_configuration(ValidateConfigurationRequest {
            template_id: Some("chair".to_string()),
            selections: Some(self_mapped(&["legs_wood"])),
        })
        .await?;

    println!("Validate {{legs_wood}}: valid = {}", verdict.is_valid);
    for error in verdict.errors.iter().flatten() {
        println!("  ✗ {}", error);
    }
    println!();

    // The complete one
    let verdict = service
        .validate_configuration(ValidateConfigurationRequest {
            template_id: Some("chair".to_string()),
            selections: Some(self_mapped(&["legs_wood", "finish_oak"])),
        })
        .await?;

    println!(
        "Validate {{legs_wood, finish_oak}}: valid = {}, total = {} cents",
        verdict.is_valid,
        verdict.total_price_cents.unwrap_or_default()
    );

    println!();
    println!("✓ Demo complete!");

    Ok(())
}
