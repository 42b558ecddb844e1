/*
* 开发心理过程：
* 1. 创建图鉴客户端配置管理，支持默认值、环境变量、TOML文件三种来源
* 2. 提供类型安全的配置访问接口
* 3. 配置在客户端构造时注入，杜绝全局单例
* 4. 加载后统一校验，尽早暴露配置错误
*/

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, time::Duration};

use log::{debug, warn};
use url::Url;

use crate::constants::{API_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_TIMEOUT_SECS};
use crate::core::error::{PokedexError, Result};

// 远程数据源配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub page_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ApiConfig {
    // 从环境变量覆盖默认配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = env::var("POKEDEX_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout) = env::var("POKEDEX_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!("POKEDEX_TIMEOUT_SECS 无法解析: {}", timeout),
            }
        }

        if let Ok(limit) = env::var("POKEDEX_PAGE_LIMIT") {
            match limit.parse() {
                Ok(value) => config.page_limit = value,
                Err(_) => warn!("POKEDEX_PAGE_LIMIT 无法解析: {}", limit),
            }
        }

        config
    }

    // 从TOML文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| PokedexError::Config(format!("读取配置文件失败 {:?}: {}", path, e)))?;

        let config: ApiConfig = toml::from_str(&content)?;
        config.validate()?;

        debug!("配置文件加载完成: {:?}", path);
        Ok(config)
    }

    // 校验配置有效性
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| PokedexError::Config(format!("base_url 非法 {}: {}", self.base_url, e)))?;

        if self.timeout_secs == 0 {
            return Err(PokedexError::Config("timeout_secs 必须大于0".to_string()));
        }

        if self.page_limit == 0 {
            return Err(PokedexError::Config("page_limit 必须大于0".to_string()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    // 去掉尾部斜杠，方便拼接端点路径
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
