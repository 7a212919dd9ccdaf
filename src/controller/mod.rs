//! UI-facing controllers.
//!
//! [`collection`] holds the generic CRUD-table-with-form state machine;
//! [`product_form`] and [`employee_form`] instantiate it with type-specific
//! fields and validators; [`login`] drives the login screen against the
//! session manager.

pub mod collection;
pub mod employee_form;
pub mod form;
pub mod login;
pub mod product_form;

pub use collection::{EntityCollectionController, FormMode, Phase};
pub use employee_form::EmployeeForm;
pub use form::EntityForm;
pub use login::{LoginController, LoginForm};
pub use product_form::ProductForm;
