// Runtime configuration handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub events_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
