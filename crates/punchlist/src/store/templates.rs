//! The template catalog — built-in defaults plus the user's saved
//! templates.

use std::sync::Arc;

use crate::error::StoreError;
use crate::model::JobTemplate;
use crate::persist::Persistence;

/// Manages the user's template catalog. The built-in defaults are
/// immutable and never persisted; only custom templates go through the
/// persistence collaborator, with the same save-then-commit discipline
/// as the job store.
pub struct TemplateCatalog {
    custom: Vec<JobTemplate>,
    persistence: Arc<dyn Persistence>,
}

impl TemplateCatalog {
    pub fn new(persistence: Arc<dyn Persistence>) -> Self {
        Self {
            custom: Vec::new(),
            persistence,
        }
    }

    /// Loads the saved custom templates; an absent file means an empty
    /// catalog, not an error.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        self.custom = self.persistence.load_templates()?.unwrap_or_default();
        log::info!("Loaded {} custom templates", self.custom.len());
        Ok(())
    }

    /// The immutable built-in defaults.
    pub fn builtins(&self) -> Vec<JobTemplate> {
        JobTemplate::builtin_catalog()
    }

    /// The user's saved templates, in creation order.
    pub fn custom(&self) -> Vec<JobTemplate> {
        self.custom.clone()
    }

    /// Built-ins followed by custom templates, the order pickers show.
    pub fn all(&self) -> Vec<JobTemplate> {
        let mut all = self.builtins();
        all.extend(self.custom.iter().cloned());
        all
    }

    /// Looks up a template by id across built-ins and custom entries.
    pub fn template(&self, id: &str) -> Option<JobTemplate> {
        self.all().into_iter().find(|t| t.id == id)
    }

    /// Saves a new custom template.
    pub fn add_template(&mut self, template: JobTemplate) -> Result<(), StoreError> {
        let mut next = self.custom.clone();
        next.push(template);
        self.persistence.save_templates(&next)?;
        self.custom = next;
        Ok(())
    }

    /// Removes a custom template. Built-ins cannot be removed; their
    /// ids report not-found like any other unknown id.
    pub fn remove_template(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .custom
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::TemplateNotFound { id: id.to_string() })?;

        let mut next = self.custom.clone();
        next.remove(index);
        self.persistence.save_templates(&next)?;
        self.custom = next;
        Ok(())
    }
}
