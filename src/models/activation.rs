//! Device activation record.

use serde::{Deserialize, Serialize};

use crate::models::plan::{Plan, PlanId};

/// One activated device per caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRecord {
    pub plan: PlanId,
    /// Never negative; a session may only start while this is > 0
    pub sessions_remaining: u32,
}

impl ActivationRecord {
    /// Fresh activation with the plan's full monthly quota.
    pub fn for_plan(plan: PlanId) -> Self {
        Self {
            plan,
            sessions_remaining: Plan::by_id(plan).monthly_sessions,
        }
    }
}
