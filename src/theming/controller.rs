// SPDX-License-Identifier: MPL-2.0
//! Theme controller lifecycle.
//!
//! The controller is `Uninitialized` until its first evaluation is attempted.
//! That happens on [`Trigger::Startup`] when the document is already
//! structured, otherwise on the first [`Trigger::DocumentReady`]. Once
//! initialized, only [`Trigger::PreferenceChanged`] re-evaluates, and only if
//! a change-event source exists.

use super::{apply_theme, AppliedTheme, Document, PreferenceSource};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Initialized,
}

/// What woke the controller up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The host has just booted.
    Startup,
    /// The document finished loading its structure.
    DocumentReady,
    /// The OS preference changed.
    PreferenceChanged,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeController {
    lifecycle: Lifecycle,
    listening: bool,
}

impl ThemeController {
    /// Creates a controller. `listening` is `false` when there is no source of
    /// change events; the theme is then evaluated once and never again.
    #[must_use]
    pub fn new(listening: bool) -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            listening,
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Single transition function of the lifecycle.
    ///
    /// Returns the theme written to the document, or `None` when the trigger
    /// caused no evaluation. A failed evaluation still counts as the
    /// initializing one; the next change event evaluates from scratch.
    pub fn handle<S>(
        &mut self,
        trigger: Trigger,
        source: &S,
        document: &mut Document,
    ) -> Result<Option<AppliedTheme>>
    where
        S: PreferenceSource + ?Sized,
    {
        match (self.lifecycle, trigger) {
            (Lifecycle::Uninitialized, Trigger::Startup) if document.is_loading() => {
                tracing::debug!("document still loading, deferring theme evaluation");
                Ok(None)
            }
            (Lifecycle::Uninitialized, Trigger::Startup | Trigger::DocumentReady) => {
                self.lifecycle = Lifecycle::Initialized;
                evaluate(source, document).map(Some)
            }
            (Lifecycle::Uninitialized, Trigger::PreferenceChanged) => Ok(None),
            (Lifecycle::Initialized, Trigger::Startup | Trigger::DocumentReady) => Ok(None),
            (Lifecycle::Initialized, Trigger::PreferenceChanged) => {
                if self.listening {
                    evaluate(source, document).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

fn evaluate<S>(source: &S, document: &mut Document) -> Result<AppliedTheme>
where
    S: PreferenceSource + ?Sized,
{
    let preference = source.current();
    let targets = document.theme_targets()?;
    let applied = apply_theme(preference, targets);
    tracing::info!(
        class = applied.root_class,
        icon = applied.icon_path,
        "applied theme"
    );
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::theming::document::{Element, FAVICON_ELEMENT_ID};
    use crate::theming::{ReadyState, ThemePreference, DARK_CLASS, LIGHT_CLASS};
    use std::cell::Cell;

    struct FakeOs {
        preference: Cell<ThemePreference>,
        reads: Cell<usize>,
    }

    impl FakeOs {
        fn new(preference: ThemePreference) -> Self {
            Self {
                preference: Cell::new(preference),
                reads: Cell::new(0),
            }
        }

        fn set(&self, preference: ThemePreference) {
            self.preference.set(preference);
        }
    }

    impl PreferenceSource for FakeOs {
        fn current(&self) -> ThemePreference {
            self.reads.set(self.reads.get() + 1);
            self.preference.get()
        }
    }

    fn ready_document() -> Document {
        let mut document = Document::new();
        document.set_ready_state(ReadyState::Interactive);
        document
    }

    #[test]
    fn startup_on_ready_document_evaluates_immediately() {
        let os = FakeOs::new(ThemePreference::Light);
        let mut document = ready_document();
        let mut controller = ThemeController::new(true);

        let applied = controller
            .handle(Trigger::Startup, &os, &mut document)
            .expect("evaluation succeeds");

        assert_eq!(applied.map(|a| a.root_class), Some(LIGHT_CLASS));
        assert_eq!(controller.lifecycle(), Lifecycle::Initialized);
        assert_eq!(document.root_class(), LIGHT_CLASS);
    }

    #[test]
    fn startup_on_loading_document_defers_until_ready() {
        let os = FakeOs::new(ThemePreference::Dark);
        let mut document = Document::new();
        let mut controller = ThemeController::new(true);

        let applied = controller
            .handle(Trigger::Startup, &os, &mut document)
            .expect("no evaluation");
        assert_eq!(applied, None);
        assert_eq!(os.reads.get(), 0);
        assert_eq!(controller.lifecycle(), Lifecycle::Uninitialized);

        document.set_ready_state(ReadyState::Interactive);
        let applied = controller
            .handle(Trigger::DocumentReady, &os, &mut document)
            .expect("evaluation succeeds");

        assert_eq!(applied.map(|a| a.root_class), Some(DARK_CLASS));
        assert_eq!(controller.lifecycle(), Lifecycle::Initialized);
    }

    #[test]
    fn document_ready_after_initialization_is_ignored() {
        let os = FakeOs::new(ThemePreference::Light);
        let mut document = ready_document();
        let mut controller = ThemeController::new(true);
        controller
            .handle(Trigger::Startup, &os, &mut document)
            .expect("evaluation succeeds");

        let applied = controller
            .handle(Trigger::DocumentReady, &os, &mut document)
            .expect("no evaluation");

        assert_eq!(applied, None);
        assert_eq!(os.reads.get(), 1);
    }

    #[test]
    fn change_before_initialization_is_left_to_the_ready_evaluation() {
        let os = FakeOs::new(ThemePreference::Light);
        let mut document = Document::new();
        let mut controller = ThemeController::new(true);

        os.set(ThemePreference::Dark);
        let applied = controller
            .handle(Trigger::PreferenceChanged, &os, &mut document)
            .expect("no evaluation");
        assert_eq!(applied, None);

        document.set_ready_state(ReadyState::Interactive);
        controller
            .handle(Trigger::DocumentReady, &os, &mut document)
            .expect("evaluation succeeds");
        assert_eq!(document.root_class(), DARK_CLASS);
    }

    #[test]
    fn preference_change_reapplies_theme() {
        let os = FakeOs::new(ThemePreference::Light);
        let mut document = ready_document();
        let mut controller = ThemeController::new(true);
        controller
            .handle(Trigger::Startup, &os, &mut document)
            .expect("evaluation succeeds");

        os.set(ThemePreference::Dark);
        controller
            .handle(Trigger::PreferenceChanged, &os, &mut document)
            .expect("evaluation succeeds");

        assert_eq!(document.root_class(), DARK_CLASS);
        assert_eq!(document.favicon_href(), Some("/camera_white.png"));
    }

    #[test]
    fn without_change_source_theme_is_evaluated_once() {
        let os = FakeOs::new(ThemePreference::Light);
        let mut document = ready_document();
        let mut controller = ThemeController::new(false);
        controller
            .handle(Trigger::Startup, &os, &mut document)
            .expect("evaluation succeeds");

        os.set(ThemePreference::Dark);
        let applied = controller
            .handle(Trigger::PreferenceChanged, &os, &mut document)
            .expect("no evaluation");

        assert_eq!(applied, None);
        assert_eq!(document.root_class(), LIGHT_CLASS);
    }

    #[test]
    fn missing_element_aborts_without_mutation() {
        let os = FakeOs::new(ThemePreference::Dark);
        let mut document = Document::with_elements(vec![Element::new(FAVICON_ELEMENT_ID, "link")
            .with_attribute("href", "/camera_black.png")]);
        document.set_ready_state(ReadyState::Complete);
        let before = document.clone();
        let mut controller = ThemeController::new(true);

        let result = controller.handle(Trigger::Startup, &os, &mut document);

        assert_eq!(result, Err(Error::MissingElement("html-root")));
        assert_eq!(document, before);
        assert_eq!(controller.lifecycle(), Lifecycle::Initialized);
    }
}
