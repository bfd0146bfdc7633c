#[derive(Clone)]
pub struct AppConfig {
    pub nps_api_key: String,
    pub nps_api_base_url: String,
    pub log_level: String,
    pub page_size: u32,
    pub max_photos_per_site: usize,
    pub excluded_designations: Vec<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("nps_api_key", &"[redacted]")
            .field("nps_api_base_url", &self.nps_api_base_url)
            .field("log_level", &self.log_level)
            .field("page_size", &self.page_size)
            .field("max_photos_per_site", &self.max_photos_per_site)
            .field("excluded_designations", &self.excluded_designations)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .finish()
    }
}
