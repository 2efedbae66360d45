use super::action::Action;
use super::response::ApiResponse;
use super::transport::Transport;
use crate::errors::GatewayError;
use crate::session::CredentialStore;
use serde_json::{Map, Value};

/// Single entry point for calls to the remote order endpoint.
///
/// Credentials are read from the store at the start of every call, so a
/// login or logout between two calls is picked up. No retries and no
/// deduplication: one `invoke` is one POST.
pub struct ApiGateway<'a> {
    store: &'a CredentialStore,
    transport: Box<dyn Transport>,
}

impl<'a> ApiGateway<'a> {
    pub fn new(store: &'a CredentialStore, transport: Box<dyn Transport>) -> Self {
        Self { store, transport }
    }

    /// POST `{action, token, ...payload}` and return the parsed JSON body.
    pub fn invoke(&self, action: &str, payload: Map<String, Value>) -> Result<Value, GatewayError> {
        let creds = self.store.load().ok_or(GatewayError::Unauthenticated)?;

        let envelope = build_envelope(action, &creds.token, payload);
        let body = serde_json::to_string(&envelope)
            .map_err(|e| GatewayError::Protocol(format!("cannot encode request: {e}")))?;

        log::debug!("POST {} action={}", creds.endpoint_url, action);

        let resp = self.transport.post(&creds.endpoint_url, body).inspect_err(|e| {
            log::error!("API error on {action}: {e}");
        })?;

        if !resp.is_success() {
            log::error!("API error on {action}: HTTP {}", resp.status);
            return Err(GatewayError::RequestFailed {
                status: resp.status,
            });
        }

        log::trace!("response body for {action}: {}", resp.body);

        serde_json::from_str(&resp.body).map_err(|e| GatewayError::Protocol(e.to_string()))
    }

    /// Invoke a known action and interpret the `success` flag.
    pub fn call(&self, action: &Action) -> Result<ApiResponse<Value>, GatewayError> {
        let raw = self.invoke(action.name(), action.payload())?;
        ApiResponse::from_value(raw)
    }
}

/// `{action, token}` followed by the payload keys (which win on clashes).
pub fn build_envelope(action: &str, token: &str, payload: Map<String, Value>) -> Value {
    let mut envelope = Map::new();
    envelope.insert("action".to_string(), Value::String(action.to_string()));
    envelope.insert("token".to_string(), Value::String(token.to_string()));
    envelope.extend(payload);
    Value::Object(envelope)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::api::transport::HttpResponse;
    use crate::session::Credentials;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Records requests and replays canned responses.
    #[derive(Clone, Default)]
    pub(crate) struct FakeTransport {
        pub sent: Rc<RefCell<Vec<(String, Value)>>>,
        replies: Rc<RefCell<VecDeque<Result<HttpResponse, GatewayError>>>>,
    }

    impl FakeTransport {
        pub fn replying(replies: Vec<Result<HttpResponse, GatewayError>>) -> Self {
            Self {
                sent: Rc::default(),
                replies: Rc::new(RefCell::new(replies.into())),
            }
        }

        pub fn ok_json(body: Value) -> Self {
            Self::replying(vec![Ok(HttpResponse {
                status: 200,
                body: body.to_string(),
            })])
        }

        pub fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        fn post(&self, url: &str, body: String) -> Result<HttpResponse, GatewayError> {
            let parsed: Value = serde_json::from_str(&body).unwrap();
            self.sent.borrow_mut().push((url.to_string(), parsed));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(GatewayError::Network("no canned reply".into())))
        }
    }

    pub(crate) fn logged_in_store() -> CredentialStore {
        let store = CredentialStore::memory();
        store
            .save(&Credentials::new("https://script.test/exec", "secret-token"))
            .unwrap();
        store
    }

    #[test]
    fn no_credentials_means_no_io() {
        let store = CredentialStore::memory();
        let fake = FakeTransport::ok_json(json!({"success": true}));
        let gw = ApiGateway::new(&store, Box::new(fake.clone()));

        let err = gw.invoke("getOrders", Map::new()).unwrap_err();
        assert_eq!(err, GatewayError::Unauthenticated);
        assert_eq!(fake.calls(), 0);
    }

    #[test]
    fn envelope_carries_action_token_and_payload() {
        let store = logged_in_store();
        let fake = FakeTransport::ok_json(json!({"success": true, "data": 1}));
        let gw = ApiGateway::new(&store, Box::new(fake.clone()));

        let payload = json!({"orderNumber": "ORD-1", "status": "Active"});
        let Value::Object(payload) = payload else { unreachable!() };
        let out = gw.invoke("updateOrderStatus", payload).unwrap();
        assert_eq!(out, json!({"success": true, "data": 1}));

        let sent = fake.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://script.test/exec");
        assert_eq!(
            sent[0].1,
            json!({
                "action": "updateOrderStatus",
                "token": "secret-token",
                "orderNumber": "ORD-1",
                "status": "Active"
            })
        );
    }

    #[test]
    fn non_2xx_is_request_failed() {
        let store = logged_in_store();
        let fake = FakeTransport::replying(vec![Ok(HttpResponse {
            status: 403,
            body: String::new(),
        })]);
        let gw = ApiGateway::new(&store, Box::new(fake));

        let err = gw.invoke("getOrders", Map::new()).unwrap_err();
        assert_eq!(err, GatewayError::RequestFailed { status: 403 });
        assert_eq!(err.to_string(), "API request failed: 403");
    }

    #[test]
    fn malformed_body_is_protocol_error() {
        let store = logged_in_store();
        let fake = FakeTransport::replying(vec![Ok(HttpResponse {
            status: 200,
            body: "<html>Sign in</html>".into(),
        })]);
        let gw = ApiGateway::new(&store, Box::new(fake));

        assert!(matches!(
            gw.invoke("getOrders", Map::new()),
            Err(GatewayError::Protocol(_))
        ));
    }

    #[test]
    fn network_failure_passes_through_once() {
        let store = logged_in_store();
        let fake = FakeTransport::replying(vec![Err(GatewayError::Network("refused".into()))]);
        let gw = ApiGateway::new(&store, Box::new(fake.clone()));

        let err = gw.call(&Action::GetOrders).unwrap_err();
        assert_eq!(err, GatewayError::Network("refused".into()));
        assert_eq!(fake.calls(), 1);
    }

    #[test]
    fn credentials_are_read_on_every_call() {
        let store = logged_in_store();
        let fake = FakeTransport::replying(vec![Ok(HttpResponse {
            status: 200,
            body: r#"{"success":true}"#.into(),
        })]);
        let gw = ApiGateway::new(&store, Box::new(fake.clone()));

        assert!(gw.call(&Action::GetOrders).unwrap().is_success());
        store.clear().unwrap();
        assert_eq!(
            gw.call(&Action::GetOrders).unwrap_err(),
            GatewayError::Unauthenticated
        );
        assert_eq!(fake.calls(), 1);
    }
}
