// SPDX-License-Identifier: MIT

//! Success envelope shared by all handlers.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform success envelope: `{"ok":true,"data":<payload>}`.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(Envelope::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body["ok"], true);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }
}
