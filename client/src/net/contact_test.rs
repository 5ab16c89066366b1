use super::*;

// =============================================================
// classify_response
// =============================================================

#[test]
fn any_2xx_is_success() {
    assert_eq!(classify_response(200, r#"{"message":"ok"}"#), Ok(()));
    assert_eq!(classify_response(201, ""), Ok(()));
    assert_eq!(classify_response(204, "not json"), Ok(()));
}

#[test]
fn string_detail_is_server_rejected() {
    let err = classify_response(400, r#"{"detail":"email invalid"}"#).unwrap_err();
    assert_eq!(err, SubmitError::ServerRejected("email invalid".to_owned()));
    assert_eq!(err.to_string(), "Error: email invalid");
}

#[test]
fn detail_on_server_error_status_is_still_server_rejected() {
    let err = classify_response(503, r#"{"detail":"maintenance"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Error: maintenance");
}

#[test]
fn validation_list_detail_is_unknown() {
    let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required","type":"missing"}]}"#;
    assert_eq!(classify_response(422, body), Err(SubmitError::Unknown));
}

#[test]
fn non_json_error_body_is_unknown() {
    assert_eq!(classify_response(500, "Internal Server Error"), Err(SubmitError::Unknown));
    assert_eq!(classify_response(404, ""), Err(SubmitError::Unknown));
}

#[test]
fn unreadable_error_body_is_unknown() {
    // A body that failed to read reaches classification as "".
    assert_eq!(classify_response(502, ""), Err(SubmitError::Unknown));
    assert_eq!(classify_response(200, ""), Ok(()));
}

// =============================================================
// classify_transport_failure
// =============================================================

#[test]
fn rejected_fetch_is_network_unavailable() {
    let err = classify_transport_failure(TransportFailure::NoResponse);
    assert_eq!(err, SubmitError::NetworkUnavailable);
    assert_eq!(err.to_string(), "Network error: please check if the backend server is running");
}

#[test]
fn serde_and_client_failures_are_unknown() {
    assert_eq!(classify_transport_failure(TransportFailure::Serde), SubmitError::Unknown);
    assert_eq!(classify_transport_failure(TransportFailure::Client), SubmitError::Unknown);
}

#[cfg(feature = "hydrate")]
#[test]
fn gloo_serde_and_client_errors_map_to_unknown() {
    let serde = gloo_net::Error::SerdeError(serde_json::from_str::<u8>("x").unwrap_err());
    assert_eq!(TransportFailure::from(&serde), TransportFailure::Serde);

    let client = gloo_net::Error::GlooError("body already used".to_owned());
    assert_eq!(TransportFailure::from(&client), TransportFailure::Client);
    assert_eq!(classify_transport_failure(TransportFailure::from(&client)), SubmitError::Unknown);
}

// =============================================================
// SubmitError messages
// =============================================================

#[test]
fn network_message_matches_template() {
    assert_eq!(
        SubmitError::NetworkUnavailable.to_string(),
        "Network error: please check if the backend server is running"
    );
}

#[test]
fn unknown_message_names_fallback_address() {
    assert_eq!(
        SubmitError::Unknown.to_string(),
        format!("Error sending message. Please try again or email me directly at {FALLBACK_EMAIL}")
    );
}

// =============================================================
// HttpContactTransport
// =============================================================

#[test]
fn default_transport_targets_contact_endpoint() {
    let transport = HttpContactTransport::default();
    assert_eq!(transport.endpoint(), api::contact_endpoint());
    assert!(transport.endpoint().ends_with("/contact"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn transport_outside_browser_reports_unknown() {
    let payload = ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hi".to_owned(),
    };
    let outcome = futures::executor::block_on(HttpContactTransport::default().send_contact(&payload));
    assert_eq!(outcome, Err(SubmitError::Unknown));
}
