//! In-memory template storage

use std::path::Path;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::types::{Template, TemplateError, TemplateResult};
use crate::error::Result;

/// Source of already-materialized templates
pub trait TemplateProvider: Send + Sync {
    /// Look up a template by ID
    fn template(&self, id: &str) -> Option<Arc<Template>>;
}

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, Arc<Template>>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Build a store from a JSON array of templates
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: Vec<Template> = serde_json::from_str(json)?;
        let store = Self::new();
        for template in templates {
            store.insert(template)?;
        }
        Ok(store)
    }

    /// Load a JSON template catalog from disk
    pub fn load_catalog(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            templates = store.count(),
            "Template catalog loaded"
        );

        Ok(store)
    }

    /// Add a new template
    pub fn insert(&self, template: Template) -> TemplateResult<Arc<Template>> {
        template.validate()?;

        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => Err(TemplateError::AlreadyExists(template.id)),
            Entry::Vacant(entry) => {
                let template = Arc::new(template);
                entry.insert(Arc::clone(&template));
                Ok(template)
            }
        }
    }

    /// Replace an existing template, returning the previous version
    pub fn replace(&self, template: Template) -> TemplateResult<Arc<Template>> {
        template.validate()?;

        match self.templates.get_mut(&template.id) {
            Some(mut entry) => Ok(std::mem::replace(entry.value_mut(), Arc::new(template))),
            None => Err(TemplateError::NotFound(template.id)),
        }
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<Arc<Template>> {
        self.template(id).ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates, sorted by ID
    pub fn list(&self) -> Vec<Arc<Template>> {
        let mut templates: Vec<_> = self
            .templates
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Remove a template by ID
    pub fn remove(&self, id: &str) -> TemplateResult<Arc<Template>> {
        self.templates
            .remove(id)
            .map(|(_, template)| template)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }
}

impl TemplateProvider for TemplateStore {
    fn template(&self, id: &str) -> Option<Arc<Template>> {
        self.templates.get(id).map(|entry| Arc::clone(entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::template::TranslationRecord;

    fn welcome() -> Template {
        Template::new("welcome")
            .with_name("Welcome")
            .with_translation("en", TranslationRecord::new("Welcome $$name$$"))
    }

    #[test]
    fn test_store_insert_and_get() {
        let store = TemplateStore::new();

        let created = store.insert(welcome()).unwrap();
        assert_eq!(created.id, "welcome");

        let retrieved = store.get("welcome").unwrap();
        assert_eq!(retrieved.name.as_deref(), Some("Welcome"));
        assert!(Arc::ptr_eq(&created, &retrieved));
    }

    #[test]
    fn test_store_insert_duplicate() {
        let store = TemplateStore::new();

        store.insert(welcome()).unwrap();
        assert!(matches!(
            store.insert(welcome()),
            Err(TemplateError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_store_concurrent_insert_same_id() {
        let store = Arc::new(TemplateStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store
                        .insert(welcome().with_name(format!("Welcome {}", i)))
                        .is_ok()
                })
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(inserted, 1);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_store_insert_invalid_id() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.insert(Template::new("bad id")),
            Err(TemplateError::InvalidId(_))
        ));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_store_replace() {
        let store = TemplateStore::new();
        store.insert(welcome()).unwrap();

        let previous = store
            .replace(welcome().with_translation("es", TranslationRecord::new("Hola")))
            .unwrap();
        assert_eq!(previous.translations.len(), 1);
        assert_eq!(store.get("welcome").unwrap().translations.len(), 2);

        assert!(matches!(
            store.replace(Template::new("unknown")),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_remove() {
        let store = TemplateStore::new();

        store.insert(welcome()).unwrap();
        assert!(store.exists("welcome"));

        store.remove("welcome").unwrap();
        assert!(!store.exists("welcome"));
        assert!(matches!(
            store.remove("welcome"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_list_sorted() {
        let store = TemplateStore::new();

        for id in ["c", "a", "b"] {
            store.insert(Template::new(id)).unwrap();
        }

        let ids: Vec<_> = store.list().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_json_str() {
        let store = TemplateStore::from_json_str(
            r#"[
                { "id": "a", "translations": { "en": { "subject": "A" } } },
                { "id": "b" }
            ]"#,
        )
        .unwrap();

        assert_eq!(store.count(), 2);
        assert!(store.template("a").is_some());
        assert!(store.template("missing").is_none());
    }

    #[test]
    fn test_from_json_str_rejects_duplicates() {
        let result = TemplateStore::from_json_str(r#"[{ "id": "a" }, { "id": "a" }]"#);
        assert!(matches!(
            result,
            Err(AppError::Template(TemplateError::AlreadyExists(_)))
        ));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let result = TemplateStore::from_json_str("{ not json");
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
