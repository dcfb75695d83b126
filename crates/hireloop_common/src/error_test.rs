#[cfg(test)]
mod tests {
    use crate::error::{rejected, Context, HireloopError, HttpStatusCode};
    use crate::models::{Listing, ListingCategory, UserSession};
    use axum::response::IntoResponse;

    #[test]
    fn test_status_codes() {
        assert_eq!(HireloopError::AuthError("x".into()).status_code(), 401);
        assert_eq!(HireloopError::ValidationError("x".into()).status_code(), 400);
        assert_eq!(rejected("missing_slot", "x").status_code(), 422);
        assert_eq!(HireloopError::ConflictError("x".into()).status_code(), 409);
        assert_eq!(HireloopError::NotFoundError("x".into()).status_code(), 404);
        assert_eq!(HireloopError::InternalError("x".into()).status_code(), 500);
    }

    #[test]
    fn test_rejected_keeps_its_kind_and_message() {
        let err = rejected("policy_not_accepted", "Policy must be accepted");
        assert_eq!(err.kind(), "policy_not_accepted");
        assert_eq!(err.to_string(), "Policy must be accepted");
    }

    #[test]
    fn test_context_wraps_foreign_errors() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        let err = result.context("binding listener").unwrap_err();
        assert!(matches!(err, HireloopError::InternalError(_)));
        assert_eq!(err.to_string(), "Internal error: binding listener: address in use");
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = rejected("missing_date", "Please select a date").into_response();
        assert_eq!(response.status().as_u16(), 422);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["kind"], "missing_date");
        assert_eq!(body["error"]["code"], 422);
        assert_eq!(body["error"]["message"], "Please select a date");
    }

    #[test]
    fn test_policy_acceptance_requires_non_blank_text() {
        let mut listing = Listing {
            id: "svc-1".into(),
            title: "Deep Cleaning".into(),
            rate: 9000,
            currency: "USD".into(),
            category: ListingCategory::Service,
            location: "Downtown".into(),
            slots: vec![],
            policy: None,
        };
        assert!(!listing.requires_policy_acceptance());
        listing.policy = Some("   ".into());
        assert!(!listing.requires_policy_acceptance());
        listing.policy = Some("Cancel 24h ahead".into());
        assert!(listing.requires_policy_acceptance());
    }

    #[test]
    fn test_session_acting_user() {
        assert_eq!(UserSession::anonymous().acting_user(), None);
        assert_eq!(UserSession::authenticated("u-1").acting_user(), Some("u-1"));
        let stale = UserSession {
            authenticated: false,
            user_ref: Some("u-2".into()),
        };
        assert_eq!(stale.acting_user(), None);
    }
}
