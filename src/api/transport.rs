// HTTP传输层
// 开发心理：抓取动作收敛到一个trait后面，客户端逻辑可以用内存桩测试
// 设计原则：构造注入、无全局状态、404在这里就分类完毕

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::core::config::ApiConfig;
use crate::core::error::{PokedexError, Result};

// 抓取接口，返回响应正文
#[async_trait]
pub trait FetchTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String>;
}

// 基于reqwest的真实传输
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|e| PokedexError::Config(format!("HTTP客户端构建失败: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}
