//! # In-Memory Template Store
//!
//! The reference [`TemplateStore`] implementation: transient, process-local
//! template state behind a `tokio::sync::RwLock`.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  MemoryTemplateStore Locking                            │
//! │                                                                         │
//! │  Caller Action               Lock Taken          Effect                 │
//! │  ─────────────               ──────────          ──────                 │
//! │                                                                         │
//! │  add_rule / set_base_price                                              │
//! │  set_options / ensure ─────► write (exclusive) ► mutate one Template    │
//! │                                                                         │
//! │  get_template ─────────────► read (shared) ────► clone a snapshot       │
//! │                                                                         │
//! │  The write lock serializes mutations, so a concurrent set_options       │
//! │  can never interleave with a validate's read of the same category.      │
//! │  Reads clone the Template while holding the read lock, so every         │
//! │  evaluation runs against a consistent snapshot with the lock released.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use async_trait::async_trait;
use forma_core::{CategoryOptions, Rule, Template};

use crate::error::{StoreError, StoreResult};
use crate::TemplateStore;

/// Transient in-memory template store.
///
/// ## Usage
/// ```rust,ignore
/// let store: Arc<dyn TemplateStore> = Arc::new(MemoryTemplateStore::new());
///
/// store.set_base_price("chair", 100).await?;
/// let template = store.get_template("chair").await?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: RwLock<HashMap<String, Template>>,
}

impl MemoryTemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryTemplateStore {
            templates: RwLock::new(HashMap::new()),
        }
    }

    /// Number of templates currently held (for diagnostics).
    pub async fn template_count(&self) -> usize {
        self.templates.read().await.len()
    }
}

/// Fetches or creates the template shell for a mutation, stamping
/// `updated_at`. Must be called with the write lock held.
fn shell<'a>(templates: &'a mut HashMap<String, Template>, template_id: &str) -> &'a mut Template {
    let template = templates
        .entry(template_id.to_string())
        .or_insert_with(|| Template::new(template_id));
    template.updated_at = Utc::now();
    template
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn ensure_template(&self, template_id: &str) -> StoreResult<()> {
        let mut templates = self.templates.write().await;
        templates
            .entry(template_id.to_string())
            .or_insert_with(|| Template::new(template_id));
        Ok(())
    }

    async fn add_rule(&self, template_id: &str, rule: Rule) -> StoreResult<()> {
        debug!(template_id = %template_id, ?rule, "Adding rule");

        let mut templates = self.templates.write().await;
        shell(&mut templates, template_id).rules.push(rule);
        Ok(())
    }

    async fn set_base_price(&self, template_id: &str, base_price_cents: i64) -> StoreResult<()> {
        debug!(template_id = %template_id, base_price_cents, "Setting base price");

        let mut templates = self.templates.write().await;
        shell(&mut templates, template_id).base_price_cents = base_price_cents;
        Ok(())
    }

    async fn set_options(
        &self,
        template_id: &str,
        category_id: &str,
        options: CategoryOptions,
    ) -> StoreResult<()> {
        debug!(
            template_id = %template_id,
            category_id = %category_id,
            count = options.len(),
            "Replacing category options"
        );

        let mut templates = self.templates.write().await;
        // Whole-category overwrite, never a merge
        shell(&mut templates, template_id)
            .options
            .insert(category_id.to_string(), options);
        Ok(())
    }

    async fn get_template(&self, template_id: &str) -> StoreResult<Template> {
        let templates = self.templates.read().await;
        templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(template_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use forma_core::{ChoiceOption, RuleType};
    use std::sync::Arc;

    fn oak_options() -> CategoryOptions {
        let mut options = CategoryOptions::new();
        options.insert("finish_oak".to_string(), ChoiceOption::new("Oak", 20));
        options
    }

    #[tokio::test]
    async fn test_get_unknown_template_is_not_found() {
        let store = MemoryTemplateStore::new();
        let err = store.get_template("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::TemplateNotFound { .. }));
    }

    #[tokio::test]
    async fn test_mutations_auto_create_the_shell() {
        let store = MemoryTemplateStore::new();

        store
            .add_rule("chair", Rule::new(RuleType::Requires, "a", "b"))
            .await
            .unwrap();

        let template = store.get_template("chair").await.unwrap();
        assert_eq!(template.id, "chair");
        assert_eq!(template.base_price_cents, 0);
        assert_eq!(template.rules.len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_template_is_idempotent() {
        let store = MemoryTemplateStore::new();

        store.ensure_template("chair").await.unwrap();
        store.set_base_price("chair", 100).await.unwrap();
        // A second ensure must not reset existing state
        store.ensure_template("chair").await.unwrap();

        let template = store.get_template("chair").await.unwrap();
        assert_eq!(template.base_price_cents, 100);
        assert_eq!(store.template_count().await, 1);
    }

    #[tokio::test]
    async fn test_set_options_overwrites_whole_category() {
        let store = MemoryTemplateStore::new();

        store
            .set_options("chair", "finish", oak_options())
            .await
            .unwrap();

        let mut replacement = CategoryOptions::new();
        replacement.insert("finish_matte".to_string(), ChoiceOption::new("Matte", 5));
        store
            .set_options("chair", "finish", replacement)
            .await
            .unwrap();

        let template = store.get_template("chair").await.unwrap();
        let finish = template.category_options("finish").unwrap();
        assert_eq!(finish.len(), 1);
        assert!(finish.contains_key("finish_matte"));
        assert!(!finish.contains_key("finish_oak"));
    }

    #[tokio::test]
    async fn test_option_insertion_order_survives_storage() {
        let store = MemoryTemplateStore::new();

        let mut options = CategoryOptions::new();
        options.insert("z_choice".to_string(), ChoiceOption::new("Z", 1));
        options.insert("a_choice".to_string(), ChoiceOption::new("A", 2));
        options.insert("m_choice".to_string(), ChoiceOption::new("M", 3));
        store.set_options("chair", "legs", options).await.unwrap();

        let template = store.get_template("chair").await.unwrap();
        let ids: Vec<&String> = template.category_options("legs").unwrap().keys().collect();
        assert_eq!(ids, vec!["z_choice", "a_choice", "m_choice"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_isolated_from_later_mutations() {
        let store = MemoryTemplateStore::new();
        store.set_base_price("chair", 100).await.unwrap();

        let snapshot = store.get_template("chair").await.unwrap();
        store.set_base_price("chair", 999).await.unwrap();

        // The earlier snapshot is a clone, not a live view
        assert_eq!(snapshot.base_price_cents, 100);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_mutations_all_land() {
        let store = Arc::new(MemoryTemplateStore::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .add_rule(
                        "chair",
                        Rule::new(RuleType::Requires, format!("p{i}"), format!("s{i}")),
                    )
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let template = store.get_template("chair").await.unwrap();
        assert_eq!(template.rules.len(), 16);
    }
}
