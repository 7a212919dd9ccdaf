//! Create/edit form contract.

use crate::error::ValidationError;
use crate::models::Entity;

/// A create/edit form for one entity type.
///
/// Forms hold raw user input (strings as typed); conversion to wire values
/// happens in [`EntityForm::to_draft`], which is only called after
/// [`EntityForm::validate`] returned no errors. Error visibility follows
/// the touched flag: a fresh form shows no errors until the user interacts
/// with it or a submission attempt marks everything touched.
pub trait EntityForm: Default + Send {
    type Entity: Entity;

    /// Pre-populate from an existing entity (edit mode).
    fn load(&mut self, entity: &Self::Entity);

    /// Field-level validation of the current input.
    fn validate(&self) -> Vec<ValidationError>;

    /// Mark every field touched so all errors surface at once.
    fn mark_all_touched(&mut self);

    /// Whether errors should currently be displayed.
    fn is_touched(&self) -> bool;

    /// Convert the input to a draft. Call only after `validate` passes;
    /// unparseable fields fall back to defaults rather than panicking.
    fn to_draft(&self) -> <Self::Entity as Entity>::Draft;

    /// Errors to display right now: empty until the form is touched.
    fn visible_errors(&self) -> Vec<ValidationError> {
        if self.is_touched() {
            self.validate()
        } else {
            Vec::new()
        }
    }
}
