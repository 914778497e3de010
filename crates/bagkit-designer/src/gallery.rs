//! In-memory gallery of saved designs.
//!
//! Holds full design snapshots, newest first. Persisting the JSON it renders
//! is left to the host. Social updates never touch element data or price.

use bagkit_core::{Error, Result};

use crate::model::{Comment, Design, SocialPatch};

/// Saved designs, most recently added first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    designs: Vec<Design>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with designs parsed from a JSON array.
    ///
    /// On malformed input the gallery is left empty and the error returned.
    /// Individually invalid designs are skipped with a warning.
    pub fn load_json(&mut self, text: &str) -> Result<usize> {
        self.designs.clear();
        let designs: Vec<Design> = serde_json::from_str(text).map_err(|e| {
            tracing::warn!("Failed to load gallery: {}", e);
            Error::other(format!("Malformed gallery JSON: {e}"))
        })?;

        for design in designs {
            match design.validate_structure() {
                Ok(()) => self.designs.push(design),
                Err(e) => tracing::warn!("Skipping gallery design {}: {}", design.id, e),
            }
        }
        Ok(self.designs.len())
    }

    /// Render every design as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.designs)
            .map_err(|e| Error::other(format!("Failed to serialize gallery: {e}")))
    }

    /// Store a snapshot. An existing design with the same id is replaced in
    /// place; otherwise the design goes to the front.
    pub fn save_design(&mut self, design: Design) {
        match self.designs.iter_mut().find(|d| d.id == design.id) {
            Some(existing) => *existing = design,
            None => self.designs.insert(0, design),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Design> {
        self.designs.iter().find(|d| d.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Design> {
        self.designs.iter_mut().find(|d| d.id == id)
    }

    /// Apply a social metadata patch. Returns false if `id` is unknown.
    pub fn update_social(&mut self, id: &str, patch: &SocialPatch) -> bool {
        match self.find_mut(id) {
            Some(design) => {
                patch.apply(&mut design.social);
                true
            }
            None => false,
        }
    }

    pub fn like(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(design) => {
                design.social.likes = design.social.likes.saturating_add(1);
                true
            }
            None => false,
        }
    }

    pub fn record_view(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(design) => {
                design.social.views = design.social.views.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Append a comment. Returns the new comment's id.
    pub fn add_comment(&mut self, id: &str, author_name: &str, text: &str) -> Option<String> {
        let design = self.find_mut(id)?;
        let comment = Comment::new(author_name, text);
        let comment_id = comment.id.clone();
        design.social.comments.push(comment);
        Some(comment_id)
    }

    pub fn delete_design(&mut self, id: &str) -> bool {
        let before = self.designs.len();
        self.designs.retain(|d| d.id != id);
        self.designs.len() != before
    }

    /// Designs flagged public, in gallery order.
    pub fn public_designs(&self) -> Vec<&Design> {
        self.designs.iter().filter(|d| d.social.is_public).collect()
    }

    pub fn designs(&self) -> &[Design] {
        &self.designs
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}
