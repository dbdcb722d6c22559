//! Typed property bag attached to the document root and captured by each link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Weight assumed for a page that never declared one.
pub const DEFAULT_WEIGHT: f32 = 0.5;

/// Priority assumed for a page that never declared one.
pub const DEFAULT_PRIORITY: f32 = 0.0;

/// An ordered bag of typed properties.
///
/// Every field is optional: a property that was never set is absent rather
/// than defaulted. The schema defaults for weight and priority are only
/// applied by [`Page::weight_or_default`] and [`Page::priority_or_default`].
///
/// Pages are plain values. Cloning one yields an independent snapshot, which
/// is how each parsed link captures the document properties in effect when
/// it was created.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight: Option<f32>,
}

impl Page {
    /// Creates a page with no properties set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alias (an alternate address for the topic), if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the creation timestamp, if any.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    /// Returns the priority, if any.
    pub fn priority(&self) -> Option<f32> {
        self.priority
    }

    /// Returns the keyboard shortcut, if any.
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    /// Returns the name of the data source, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the free text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the weight, if any.
    pub fn weight(&self) -> Option<f32> {
        self.weight
    }

    pub fn weight_or_default(&self) -> f32 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn priority_or_default(&self) -> f32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn set_alias(&mut self, alias: Option<String>) {
        self.alias = alias;
    }

    pub fn set_created(&mut self, created: Option<DateTime<Utc>>) {
        self.created = created;
    }

    pub fn set_priority(&mut self, priority: Option<f32>) {
        self.priority = priority;
    }

    pub fn set_shortcut(&mut self, shortcut: Option<String>) {
        self.shortcut = shortcut;
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn set_weight(&mut self, weight: Option<f32>) {
        self.weight = weight;
    }

    /// Returns true if no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_page_is_empty() {
        let page = Page::new();
        assert!(page.is_empty());
        assert_eq!(page.alias(), None);
        assert_eq!(page.weight(), None);
    }

    #[test]
    fn defaults_apply_only_through_accessors() {
        let page = Page::new();
        assert_eq!(page.weight(), None);
        assert_eq!(page.weight_or_default(), DEFAULT_WEIGHT);
        assert_eq!(page.priority_or_default(), DEFAULT_PRIORITY);
    }

    #[test]
    fn clone_is_independent_snapshot() {
        let mut ambient = Page::new();
        ambient.set_source(Some("private".to_string()));

        let snapshot = ambient.clone();
        ambient.set_source(Some("public".to_string()));

        assert_eq!(snapshot.source(), Some("private"));
        assert_eq!(ambient.source(), Some("public"));
    }

    #[test]
    fn setting_none_clears() {
        let mut page = Page::new();
        page.set_alias(Some("http://example.org".to_string()));
        assert!(!page.is_empty());
        page.set_alias(None);
        assert!(page.is_empty());
    }

    #[test]
    fn serializes_only_set_fields() {
        let mut page = Page::new();
        page.set_weight(Some(0.75));
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"weight":0.75}"#);
    }
}
