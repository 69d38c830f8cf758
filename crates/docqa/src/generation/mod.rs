//! Answer generation: prompt assembly for the generation stage

pub mod prompt;

pub use prompt::PromptBuilder;
