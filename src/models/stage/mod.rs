mod transitions;
mod types;


pub use types::{ParseStageError, Stage};
