use std::time::Duration;

use reqwest::{Client, redirect::Policy};

use crate::config::HttpConfig;
use crate::error::AppError;

pub fn build_client(config: &HttpConfig) -> Result<Client, AppError> {
    let mut builder = Client::builder()
        .use_rustls_tls()
        .user_agent(config.user_agent.as_str());
    if config.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.timeout_secs));
    }
    if !config.follow_redirects {
        builder = builder.redirect(Policy::none());
    }
    Ok(builder.build()?)
}
