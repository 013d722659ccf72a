// SPDX-License-Identifier: MIT

//! Domain types shared by stores and handlers.

pub mod activation;
pub mod identity;
pub mod plan;
pub mod session;

pub use activation::ActivationRecord;
pub use identity::CallerIdentity;
pub use plan::{Plan, PlanId};
pub use session::SessionRecord;
