//! Division update form
//!
//! MVVM split: view.rs renders, view_model.rs owns form state and commands.

mod view;
mod view_model;

pub use view::DivisionUpdate;
pub use view_model::DivisionUpdateViewModel;
