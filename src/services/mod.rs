// SPDX-License-Identifier: MIT

//! External service clients.

pub mod google;

pub use google::GoogleAuthService;
