pub mod candidates;
pub mod generate;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use candidates::{extract_candidates, normalize_classes};
pub use generate::generate;
pub use provider::{ProviderError, UtilityProvider};
pub use types::{Declaration, Diagnostic, DiagnosticLevel, GenerateResult, UtilityRule};
