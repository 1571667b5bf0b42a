//! Use cases

pub mod invoke_specialist;
pub mod validate_idea;

pub use invoke_specialist::invoke_specialist;
pub use validate_idea::{ValidateIdeaInput, ValidateIdeaUseCase};
