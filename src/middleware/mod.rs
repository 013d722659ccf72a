// SPDX-License-Identifier: MIT

//! Request middleware.

pub mod identity;
