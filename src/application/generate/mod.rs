//! Generate Use Case
//!
//! Walks every `(layer, type, name)` leaf of the expanded structures,
//! resolves its output path and hands it to the generator registered for
//! its type. Targets that already exist are skipped, which makes re-running
//! against a populated output directory a no-op.

mod options;
mod result;
mod use_case;


pub use options::GenerateOptions;
pub use result::{GenerateResult, SkipReason, SkippedArtifact};
pub use use_case::{target_path, GenerateUseCase};
