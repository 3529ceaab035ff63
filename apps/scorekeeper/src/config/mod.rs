pub mod demo;
pub mod rules;

pub use rules::GameRules;
