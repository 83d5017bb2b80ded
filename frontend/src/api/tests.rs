#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::{signed_token, MemorySessionStore, SessionStore};
use serde_json::json;
use std::{cell::Cell, rc::Rc};

fn record_json(reference: &str, name: &str, status: &str) -> serde_json::Value {
    json!({
        "reference_number": reference,
        "patient_name": name,
        "passport_no": format!("P-{}", reference),
        "status": status,
        "phone_number": "+970 555 0100",
        "primary_doctor": "Dr. Haddad",
        "email_address": "patient@example.test",
        "country": "Jordan",
        "rejectReason": null,
        "authorization_letter": "https://files.example.test/auth.pdf",
        "medical_doc": null
    })
}

fn client_with_session(server: &MockServer, token: Option<&str>) -> (ApiClient, Rc<MemorySessionStore>) {
    let session = Rc::new(MemorySessionStore::new());
    if let Some(token) = token {
        session.save(token).unwrap();
    }
    let client = ApiClient::new_with_base_url(server.base_url()).with_session(session.clone());
    (client, session)
}

fn future_token() -> String {
    signed_token(chrono::Utc::now().timestamp() + 3600)
}

#[tokio::test]
async fn login_stores_token_and_list_is_returned_unfiltered() {
    let server = MockServer::start_async().await;
    let token = future_token();
    server.mock(|when, then| {
        when.method(POST).path("/signin");
        then.status(200).json_body(json!({ "token": token }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.status(200).json_body(json!([
            record_json("REF-001", "Amina", "pending"),
            record_json("REF-002", "Omar", "approved"),
        ]));
    });

    let (client, session) = client_with_session(&server, None);
    let response = client
        .login(&LoginRequest {
            email: "admin@moh.gov".into(),
            password: "secret".into(),
        })
        .await
        .expect("login succeeds");
    assert_eq!(response.token, token);
    assert!(session.is_valid());
    assert_eq!(session.token().as_deref(), Some(token.as_str()));

    let users = client.get_all_users().await.expect("list loads");
    assert_eq!(users.len(), 2);

    let list_request = server
        .requests()
        .into_iter()
        .find(|r| r.path == "/getAllUsersData")
        .unwrap();
    assert_eq!(
        list_request.authorization.as_deref(),
        Some(format!("Bearer {}", token).as_str())
    );
    let signin = server.requests().into_iter().find(|r| r.path == "/signin").unwrap();
    assert_eq!(
        signin.json,
        Some(json!({ "email": "admin@moh.gov", "password": "secret" }))
    );
    assert!(signin.authorization.is_none());
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/signin");
        then.status(401).json_body(json!({ "message": "Wrong password" }));
    });
    let (client, session) = client_with_session(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "admin@moh.gov".into(),
            password: "nope".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Wrong password");
    assert!(session.token().is_none());
    assert!(!client.auth_failure().is_triggered());
}

#[tokio::test]
async fn login_failure_defaults_when_body_is_not_json() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/signin");
        then.status(500).text_body("upstream down");
    });
    let (client, _session) = client_with_session(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "a@b.c".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Invalid credentials or server error");
}

#[tokio::test]
async fn login_failure_without_message_reads_login_failed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/signin");
        then.status(400).json_body(json!({}));
    });
    let (client, _session) = client_with_session(&server, None);
    let err = client
        .login(&LoginRequest {
            email: "a@b.c".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Login failed");
}

#[tokio::test]
async fn nested_users_payload_is_accepted() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.status(200).json_body(json!({
            "users": [record_json("REF-010", "Sara", "rejected")]
        }));
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let users = client.get_all_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].status, RecordStatus::Rejected);
}

#[tokio::test]
async fn concurrent_forbidden_responses_signal_once() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.status(403).json_body(json!({ "message": "expired" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/update/REF-001");
        then.status(403).json_body(json!({}));
    });

    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let signals = Rc::new(Cell::new(0u32));
    let counter = signals.clone();
    client
        .auth_failure()
        .on_failure(move |_status| counter.set(counter.get() + 1));

    let payload = StatusUpdateRequest::new(RecordStatus::Approved, None);
    let (a, b, c) = futures::join!(
        client.get_all_users(),
        client.get_all_users(),
        client.update_status("REF-001", &payload),
    );
    for err in [a.unwrap_err(), b.unwrap_err(), c.unwrap_err()] {
        assert!(err.is_auth_failure());
    }
    assert_eq!(signals.get(), 1);
    assert!(client.auth_failure().is_triggered());
}

#[tokio::test]
async fn every_auth_status_triggers_and_login_rearms_guard() {
    for status in [401u16, 402, 403] {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/getAllUsersData");
            then.status(status).json_body(json!({}));
        });
        server.mock(|when, then| {
            when.method(POST).path("/signin");
            then.status(200).json_body(json!({ "token": "opaque" }));
        });
        let (client, _session) = client_with_session(&server, Some("opaque"));
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        client.auth_failure().on_failure(move |s| sink.set(Some(s)));

        let err = client.get_all_users().await.unwrap_err();
        assert_eq!(err.code, AUTH_EXPIRED_CODE);
        assert_eq!(seen.get(), Some(status));

        client
            .login(&LoginRequest {
                email: "a@b.c".into(),
                password: "x".into(),
            })
            .await
            .unwrap();
        assert!(!client.auth_failure().is_triggered());
    }
}

#[tokio::test]
async fn network_failure_does_not_signal_auth_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.network_error();
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let err = client.get_all_users().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(!client.auth_failure().is_triggered());
}

#[tokio::test]
async fn missing_token_sends_no_authorization_header() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.status(200).json_body(json!([]));
    });
    let (client, _session) = client_with_session(&server, None);
    assert!(client.get_all_users().await.unwrap().is_empty());
    assert!(server.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn non_success_list_is_an_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/getAllUsersData");
        then.status(500).json_body(json!({ "message": "boom" }));
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let err = client.get_all_users().await.unwrap_err();
    assert!(err.error.contains("500"));
}

#[tokio::test]
async fn fetch_with_auth_reports_status_and_success_flag() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/update/REF-001");
        then.status(422).json_body(json!({ "success": false }));
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let response = client
        .update_status(
            "REF-001",
            &StatusUpdateRequest::new(RecordStatus::Rejected, Some("incomplete paperwork")),
        )
        .await
        .unwrap();
    assert!(!response.ok);
    assert_eq!(response.status, 422);
    assert_eq!(response.data, json!({ "success": false }));
    assert_eq!(
        server.requests()[0].json,
        Some(json!({ "status": "rejected", "rejectReason": "incomplete paperwork" }))
    );
}

#[tokio::test]
async fn non_json_success_body_is_an_invalid_response() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/update/REF-001");
        then.status(200).text_body("OK");
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let err = client
        .update_status("REF-001", &StatusUpdateRequest::new(RecordStatus::Pending, None))
        .await
        .unwrap_err();
    assert_eq!(err.code, "INVALID_RESPONSE");
}

#[tokio::test]
async fn update_details_sends_multipart_put_with_files() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/updateData/REF%2F7");
        then.status(200).json_body(json!({ "success": true }));
    });
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let mut record = UserRecord::new("REF/7", RecordStatus::Pending);
    record.patient_name = Some("Nadia".into());
    let form = DetailsForm::from_record(&record);
    let upload = FileUpload {
        file_name: "letter.pdf".into(),
        content_type: Some("application/pdf".into()),
        bytes: b"%PDF-1.4".to_vec(),
    };

    let response = client
        .update_details(&record.reference_number, &form, Some(upload), None)
        .await
        .unwrap();
    assert!(response.ok);

    let requests = server.requests();
    let sent = &requests[0];
    assert_eq!(sent.method, PUT);
    assert!(sent
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
    assert!(sent.authorization.is_some());
}

#[tokio::test]
async fn update_details_rejects_bad_mime_before_sending() {
    let server = MockServer::start_async().await;
    let (client, _session) = client_with_session(&server, Some(&future_token()));
    let upload = FileUpload {
        file_name: "x".into(),
        content_type: Some("not a mime".into()),
        bytes: vec![],
    };
    let err = client
        .update_details("REF-1", &DetailsForm::default(), None, Some(upload))
        .await
        .unwrap_err();
    assert_eq!(err.code, "VALIDATION_ERROR");
    assert!(server.requests().is_empty());
}

#[test]
fn logout_clears_session() {
    let session = Rc::new(MemorySessionStore::with_token(&future_token()));
    let client = ApiClient::new_with_base_url("http://unused").with_session(session.clone());
    client.logout();
    assert!(!session.is_valid());
}

#[test]
fn auth_failure_guard_latches_until_reset() {
    let guard = AuthFailureGuard::new();
    assert!(guard.trigger(401));
    assert!(!guard.trigger(403));
    guard.reset();
    assert!(guard.trigger(403));
}
