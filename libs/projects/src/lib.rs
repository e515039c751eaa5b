//! Project domain: the Project record and its validator

pub mod models;
pub mod validation;

pub use models::{NewProject, Project, ProjectInput};
pub use validation::validate_project;
