// SPDX-License-Identifier: MPL-2.0
//! Minimal document model holding the elements the theme is written to.
//!
//! Elements are looked up by fixed identifiers. The model only knows about
//! string attributes; rendering reads them back through the accessors.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Identifier of the root element carrying the theme class.
pub const ROOT_ELEMENT_ID: &str = "html-root";
/// Identifier of the element carrying the window icon.
pub const FAVICON_ELEMENT_ID: &str = "favicon";

const CLASS_ATTRIBUTE: &str = "class";
const HREF_ATTRIBUTE: &str = "href";

/// Loading progress of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    /// Structure not available yet; theme evaluation must wait.
    #[default]
    Loading,
    /// Structure available.
    Interactive,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    #[must_use]
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn attribute_mut(&mut self, name: &str) -> &mut String {
        self.attributes.entry(name.to_string()).or_default()
    }
}

/// Mutable handles on the two attributes the theme controller owns.
pub struct ThemeTargets<'a> {
    pub root_class: &'a mut String,
    pub favicon_href: &'a mut String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
    ready_state: ReadyState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// The application shell: a root element and an icon link, still loading.
    #[must_use]
    pub fn new() -> Self {
        Self::with_elements(vec![
            Element::new(ROOT_ELEMENT_ID, "html").with_attribute("lang", "en"),
            Element::new(FAVICON_ELEMENT_ID, "link")
                .with_attribute("rel", "icon")
                .with_attribute("type", "image/png"),
        ])
    }

    #[must_use]
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ready_state: ReadyState::Loading,
        }
    }

    #[must_use]
    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, ready_state: ReadyState) {
        self.ready_state = ready_state;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.ready_state == ReadyState::Loading
    }

    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Current class of the root element, empty when unset or absent.
    #[must_use]
    pub fn root_class(&self) -> &str {
        self.element_by_id(ROOT_ELEMENT_ID)
            .and_then(|element| element.attribute(CLASS_ATTRIBUTE))
            .unwrap_or_default()
    }

    /// Current icon reference, `None` when unset or absent.
    #[must_use]
    pub fn favicon_href(&self) -> Option<&str> {
        self.element_by_id(FAVICON_ELEMENT_ID)
            .and_then(|element| element.attribute(HREF_ATTRIBUTE))
    }

    fn position(&self, id: &'static str) -> Result<usize> {
        self.elements
            .iter()
            .position(|element| element.id == id)
            .ok_or(Error::MissingElement(id))
    }

    /// Looks up both theme targets.
    ///
    /// Fails before handing out anything if either element is absent, so a
    /// failed lookup never leaves the document half-themed.
    pub fn theme_targets(&mut self) -> Result<ThemeTargets<'_>> {
        let root = self.position(ROOT_ELEMENT_ID)?;
        let favicon = self.position(FAVICON_ELEMENT_ID)?;

        let (root_element, favicon_element) = if root < favicon {
            let (head, tail) = self.elements.split_at_mut(favicon);
            (&mut head[root], &mut tail[0])
        } else {
            let (head, tail) = self.elements.split_at_mut(root);
            (&mut tail[0], &mut head[favicon])
        };

        Ok(ThemeTargets {
            root_class: root_element.attribute_mut(CLASS_ATTRIBUTE),
            favicon_href: favicon_element.attribute_mut(HREF_ATTRIBUTE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_is_loading_and_unthemed() {
        let document = Document::new();
        assert!(document.is_loading());
        assert_eq!(document.root_class(), "");
        assert_eq!(document.favicon_href(), None);
    }

    #[test]
    fn theme_targets_write_through_to_elements() {
        let mut document = Document::new();
        {
            let targets = document.theme_targets().expect("both elements exist");
            targets.root_class.push_str("theme-dark");
            targets.favicon_href.push_str("/camera_white.png");
        }

        assert_eq!(document.root_class(), "theme-dark");
        assert_eq!(document.favicon_href(), Some("/camera_white.png"));
    }

    #[test]
    fn theme_targets_work_regardless_of_element_order() {
        let mut document = Document::with_elements(vec![
            Element::new(FAVICON_ELEMENT_ID, "link"),
            Element::new(ROOT_ELEMENT_ID, "html"),
        ]);
        {
            let targets = document.theme_targets().expect("both elements exist");
            targets.root_class.push_str("theme-light");
        }

        assert_eq!(document.root_class(), "theme-light");
    }

    #[test]
    fn missing_root_is_reported() {
        let mut document =
            Document::with_elements(vec![Element::new(FAVICON_ELEMENT_ID, "link")]);
        let err = document.theme_targets().err();
        assert_eq!(err, Some(Error::MissingElement(ROOT_ELEMENT_ID)));
    }

    #[test]
    fn missing_favicon_is_reported() {
        let mut document = Document::with_elements(vec![Element::new(ROOT_ELEMENT_ID, "html")]);
        let err = document.theme_targets().err();
        assert_eq!(err, Some(Error::MissingElement(FAVICON_ELEMENT_ID)));
    }
}
