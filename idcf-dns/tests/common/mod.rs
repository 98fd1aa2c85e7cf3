//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use idcf_dns::{Client, DnsError, HttpRequest, HttpTransport, Result};

pub const API_KEY: &str = "test_api_key";
pub const SECRET_KEY: &str = "test_secret_key";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Transport that records every request and answers from a queue of canned bodies.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Vec<u8>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response body.
    pub fn respond(&self, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(body.as_bytes().to_vec()));
    }

    /// Queue a transport failure.
    pub fn fail(&self, error: DnsError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Requests sent so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request sent so far.
    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(DnsError::NetworkError {
                    detail: "no response queued".to_string(),
                })
            })
    }
}

/// Client wired to a fresh mock transport.
pub fn mock_client() -> (Client, Arc<MockTransport>) {
    let mock = MockTransport::new();
    let client = Client::builder(API_KEY, SECRET_KEY)
        .transport(mock.clone())
        .build()
        .expect("client");
    (client, mock)
}

pub fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers.get(name).and_then(|v| v.to_str().ok())
}

/// Request body parsed as JSON.
pub fn body_json(req: &HttpRequest) -> serde_json::Value {
    let body = req.body.as_deref().expect("request has a body");
    serde_json::from_slice(body).expect("body is JSON")
}

/// Assert the request carries a valid signature for its own method and path,
/// and that it expires 600s after a moment between `before` and now.
pub fn assert_signed(req: &HttpRequest, before: i64) {
    assert_eq!(header(req, idcf_dns::HEADER_API_KEY), Some(API_KEY));

    let expires: i64 = header(req, idcf_dns::HEADER_EXPIRES)
        .expect("expires header")
        .parse()
        .expect("expires is decimal");
    let now = chrono::Utc::now().timestamp();
    assert!(
        (before + 600..=now + 600).contains(&expires),
        "expires {expires} outside [{}, {}]",
        before + 600,
        now + 600
    );

    let expected = idcf_dns::sign::sign(
        SECRET_KEY,
        req.method.as_str(),
        req.url.path(),
        API_KEY,
        expires,
    );
    assert_eq!(header(req, idcf_dns::HEADER_SIGNATURE), Some(expected.as_str()));
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn zone_json(uuid: &str, default_ttl: u32) -> String {
    format!(
        r#"{{"uuid":"{uuid}","name":"example.com","description":"test zone","default_ttl":{default_ttl},"authenticated":true,"created_at":"2024-01-15T17:00:00+09:00","updated_at":"2024-01-16T17:00:00+09:00"}}"#
    )
}

pub fn record_json(uuid: &str, ttl: u32) -> String {
    format!(
        r#"{{"uuid":"{uuid}","name":"www.example.com","type":"A","ttl":{ttl},"content":"192.0.2.1","created_at":"2024-01-15T17:00:00+09:00"}}"#
    )
}

/// Live client from environment, if credentials are set.
pub fn live_client() -> Option<Client> {
    env::var(idcf_dns::ENV_API_KEY).ok()?;
    env::var(idcf_dns::ENV_SECRET_KEY).ok()?;
    Client::from_env().ok()
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name(zone: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{zone}", &uuid.to_string()[..8])
}
