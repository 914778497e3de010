//! Document lifecycle and the single commit path.

use chrono::Utc;

use bagkit_core::{BagType, DesignError};

use super::DesignerState;
use crate::model::{Design, DesignPatch};
use crate::pricing::calc_price;

impl DesignerState {
    /// Replaces the current document and clears history and selection.
    ///
    /// The document is validated against the configured limits and repriced;
    /// loading is never itself an undo step.
    pub fn set_document(&mut self, mut design: Design) -> Result<(), DesignError> {
        design.validate(self.limits())?;
        design.set_price_jpy(calc_price(&design, self.rates()));
        tracing::info!(
            "Loaded design {} ({} elements, {} JPY)",
            design.id,
            design.elements.len(),
            design.price_jpy()
        );
        self.document = Some(design);
        self.history.clear();
        self.selected_id = None;
        Ok(())
    }

    /// Starts a fresh design of the given archetype.
    pub fn new_design(&mut self, bag_type: BagType) -> Result<(), DesignError> {
        let design = Design::for_bag_type(bag_type, self.config.editor.default_seam_mm);
        self.set_document(design)
    }

    /// Unloads the document.
    pub fn close_document(&mut self) -> Option<Design> {
        self.history.clear();
        self.selected_id = None;
        self.document.take()
    }

    /// Patches the document-level fields.
    pub fn update_document(&mut self, patch: &DesignPatch) -> Result<(), DesignError> {
        let mut next = self.require_document()?.clone();
        patch.apply(&mut next);
        self.commit(next)
    }

    pub(crate) fn require_document(&self) -> Result<&Design, DesignError> {
        self.document.as_ref().ok_or_else(|| {
            tracing::debug!("Ignoring edit: no document loaded");
            DesignError::NoDocument
        })
    }

    /// Validates `next`, records the current document, stamps and reprices
    /// `next`, then makes it current. Nothing changes on `Err`.
    pub(crate) fn commit(&mut self, mut next: Design) -> Result<(), DesignError> {
        next.validate(self.limits())?;
        let Some(current) = self.document.as_mut() else {
            return Err(DesignError::NoDocument);
        };

        next.updated_at = Utc::now();
        next.set_price_jpy(calc_price(&next, &self.config.pricing));
        let previous = std::mem::replace(current, next);
        self.history.record(previous);

        tracing::debug!(
            "Committed edit: {} elements, {} JPY, {} undo steps",
            current.elements.len(),
            current.price_jpy(),
            self.history.undo_count()
        );
        Ok(())
    }
}
