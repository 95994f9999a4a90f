pub mod emit;

// Re-export main functions
pub use emit::{emit_rule, emit_stylesheet, escape_class};
