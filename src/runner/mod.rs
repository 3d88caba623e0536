//! Setup orchestration.

pub mod summary;
pub mod workflow;

pub use summary::RunSummary;
pub use workflow::SetupWorkflow;
