//! Post update form
//!
//! MVVM split: view.rs renders, view_model.rs owns form state and commands.

mod view;
mod view_model;

pub use view::PostUpdate;
pub use view_model::PostUpdateViewModel;
