//! Label use cases.

mod plan;
mod plan_labels;
mod sync_labels;

pub use plan::{build_sync_plan, SyncAction};
pub use plan_labels::PlanLabelsUseCase;
pub use sync_labels::{SyncLabelsUseCase, SyncReport};
