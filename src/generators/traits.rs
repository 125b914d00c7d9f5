//! Traits at the seams of the generator system.

use super::canvas::Canvas;
use super::CanvasError;
use crate::form::{validate, ErrorMap, FieldRecord};

/// Trait for validating request objects.
pub trait Validator {
    /// Validate the state of the object, returning every failing field.
    fn validate(&self) -> Result<(), ErrorMap>;
}

impl Validator for FieldRecord {
    fn validate(&self) -> Result<(), ErrorMap> {
        validate(self).into_result()
    }
}

/// Source of fresh canvases, one per rendered document.
pub trait CanvasProvider: Send + Sync {
    fn create(&self) -> Result<Box<dyn Canvas>, CanvasError>;
}
