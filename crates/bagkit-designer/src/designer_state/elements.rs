//! Element operations (add, update, remove, duplicate, select) for designer state.

use bagkit_core::{DesignError, LibraryItem};

use super::DesignerState;
use crate::factory::{ElementFactory, ElementTemplate};
use crate::model::{DesignElement, ElementPatch};

/// Offset applied to a duplicated element (mm, both axes)
pub const DUPLICATE_OFFSET_MM: f64 = 20.0;

impl DesignerState {
    /// Adds `element` and selects it.
    pub fn add_element(&mut self, element: DesignElement) -> Result<(), DesignError> {
        let design = self.require_document()?;
        if design.contains_element(&element.id) {
            return Err(DesignError::DuplicateElementId { id: element.id });
        }
        let id = element.id.clone();
        let mut next = design.clone();
        next.elements.push(element);
        self.commit(next)?;
        tracing::debug!("Added element {}", id);
        self.selected_id = Some(id);
        Ok(())
    }

    /// Builds an element from `template` at the default placement and adds it.
    /// Returns the new element's id.
    pub fn create_element(&mut self, template: ElementTemplate) -> Result<String, DesignError> {
        let element = ElementFactory::create(self.require_document()?, template);
        let id = element.id.clone();
        self.add_element(element)?;
        Ok(id)
    }

    /// Places a reference shape for a library item.
    pub fn add_library_item(&mut self, item: &LibraryItem) -> Result<String, DesignError> {
        let template = ElementTemplate::shadow_item(item).ok_or_else(|| {
            DesignError::invalid_element(&item.id, "library item has no usable footprint")
        })?;
        self.create_element(template)
    }

    /// Applies `patch` to the element with `id`.
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) -> Result<(), DesignError> {
        let mut next = self.require_document()?.clone();
        let element = next.element_mut(id).ok_or_else(|| not_found(id))?;
        patch.apply(element)?;
        self.commit(next)
    }

    /// Deletes the element with `id`, clearing the selection if it pointed there.
    pub fn remove_element(&mut self, id: &str) -> Result<(), DesignError> {
        let design = self.require_document()?;
        if !design.contains_element(id) {
            return Err(not_found(id));
        }
        let mut next = design.clone();
        next.elements.retain(|e| e.id != id);
        self.commit(next)?;
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        tracing::debug!("Removed element {}", id);
        Ok(())
    }

    /// Clones the element with `id` under a fresh id, offset and stacked on top.
    /// Returns the clone's id.
    pub fn duplicate_element(&mut self, id: &str) -> Result<String, DesignError> {
        let design = self.require_document()?;
        let source = design.element(id).ok_or_else(|| not_found(id))?;

        let mut clone = source.clone();
        clone.id = ElementFactory::generate_id(design, source.kind());
        clone.position = source
            .position
            .offset(DUPLICATE_OFFSET_MM, DUPLICATE_OFFSET_MM);
        clone.z_index = design.max_z_index().unwrap_or(0).max(0).saturating_add(1);

        let new_id = clone.id.clone();
        self.add_element(clone)?;
        Ok(new_id)
    }

    /// Moves UI focus. `None` clears it. Not historied, not priced.
    pub fn select_element(&mut self, id: Option<&str>) -> Result<(), DesignError> {
        match id {
            None => {
                self.selected_id = None;
                Ok(())
            }
            Some(id) => {
                if !self.require_document()?.contains_element(id) {
                    return Err(not_found(id));
                }
                self.selected_id = Some(id.to_string());
                Ok(())
            }
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        let id = self.selected_id.as_deref()?;
        self.document.as_ref()?.element(id)
    }

    /// Drop a selection that no longer points at an element.
    pub(crate) fn prune_selection(&mut self) {
        let still_there = match (&self.document, &self.selected_id) {
            (Some(design), Some(id)) => design.contains_element(id),
            _ => false,
        };
        if !still_there {
            self.selected_id = None;
        }
    }
}

fn not_found(id: &str) -> DesignError {
    tracing::debug!("Ignoring edit: element {} not found", id);
    DesignError::ElementNotFound { id: id.to_string() }
}
