//! Account creation: field validation, the form state, the submission state
//! machine and the page that ties them together.

pub mod controller;
pub mod form;
mod page;
pub mod validation;

pub use page::{get_sign_up_page, submit_sign_up_form, validate_sign_up_form};
