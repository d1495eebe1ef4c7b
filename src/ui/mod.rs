pub mod prompt;
pub mod tables;

pub use prompt::{ConsolePrompter, Prompter};
pub use tables::Table;
