// SPDX-License-Identifier: MIT

//! Subscription plan catalog and activation-code table.

use serde::{Deserialize, Serialize};

/// Plan identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Basic,
    Pro,
    Premium,
}

/// A subscription plan as shown to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: PlanId,
    /// Price in whole currency units
    pub price: u32,
    /// Monthly session quota
    pub monthly_sessions: u32,
    /// Display name
    pub name: String,
}

impl Plan {
    /// The fixed catalog, in display order.
    pub fn catalog() -> Vec<Plan> {
        vec![
            Plan {
                id: PlanId::Basic,
                price: 49,
                monthly_sessions: 20,
                name: "Básico".to_string(),
            },
            Plan {
                id: PlanId::Pro,
                price: 99,
                monthly_sessions: 50,
                name: "Pro".to_string(),
            },
            Plan {
                id: PlanId::Premium,
                price: 139,
                monthly_sessions: 100,
                name: "Premium".to_string(),
            },
        ]
    }

    /// Look up a plan by id. Total over `PlanId`, so the session quota is
    /// always derived from the catalog itself rather than a parallel table.
    pub fn by_id(id: PlanId) -> Plan {
        Plan::catalog()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| unreachable!("catalog covers every PlanId"))
    }
}

/// Resolve an activation code to a plan. Codes are matched case-insensitively.
pub fn resolve_activation_code(code: &str) -> Option<PlanId> {
    match code.trim().to_uppercase().as_str() {
        "TOKEN123" => Some(PlanId::Basic),
        "TOKEN456" => Some(PlanId::Pro),
        "TOKEN789" => Some(PlanId::Premium),
        _ => None,
    }
}
