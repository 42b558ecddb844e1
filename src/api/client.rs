// 图鉴远程数据客户端
// 开发心理：客户端负责与PokéAPI通信，按请求解析并转换为领域类型
// 设计原则：异步通信、构造注入配置与传输、错误分类后向上传播、不做内部重试

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::models::{EvolutionChainResponse, PokemonDetail, PokemonListPage, SpeciesDetail};
use crate::api::transport::{FetchTransport, HttpTransport};
use crate::core::config::ApiConfig;
use crate::core::error::{PokedexError, Result};
use crate::pokedex::entry::{PokedexEntry, PokedexSummary};
use crate::pokedex::evolution::{flatten, EvolutionNode, TransitionRecord};

// 远程数据客户端
pub struct PokedexClient {
    config: ApiConfig,
    transport: Arc<dyn FetchTransport>,

    // 统计信息
    requests_issued: AtomicU64,
}

impl PokedexClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Self::with_transport(config, transport)
    }

    // 注入自定义传输，测试时用内存桩替换真实HTTP
    pub fn with_transport(config: ApiConfig, transport: Arc<dyn FetchTransport>) -> Result<Self> {
        config.validate()?;

        info!("初始化图鉴客户端: {}", config.base_url_trimmed());
        Ok(Self {
            config,
            transport,
            requests_issued: AtomicU64::new(0),
        })
    }

    // 获取实体详情
    pub async fn get_pokemon(&self, id: u32) -> Result<PokemonDetail> {
        let url = self.endpoint(&format!("pokemon/{}", self.checked_id(id)?))?;
        self.fetch_json(url).await
    }

    // 获取物种元数据
    pub async fn get_species(&self, id: u32) -> Result<SpeciesDetail> {
        let url = self.endpoint(&format!("pokemon-species/{}", self.checked_id(id)?))?;
        self.fetch_json(url).await
    }

    // 获取完整图鉴条目，实体详情和物种元数据相互独立，并发抓取后合流
    pub async fn get_entry(&self, id: u32) -> Result<PokedexEntry> {
        let (detail, species) = tokio::try_join!(self.get_pokemon(id), self.get_species(id))?;
        Ok(PokedexEntry::from_detail(&detail, &species))
    }

    // 获取一页列表并补齐每个条目的基础数据
    pub async fn list_entries(&self, offset: u32, limit: u32) -> Result<Vec<PokedexSummary>> {
        if limit == 0 {
            return Err(PokedexError::InvalidInput("limit 必须大于0".to_string()));
        }

        let url = self.endpoint(&format!("pokemon?offset={}&limit={}", offset, limit))?;
        let page: PokemonListPage = self.fetch_json(url).await?;

        debug!("列表页返回 {} 个条目，开始补齐详情", page.results.len());

        // 逐项抓取详情，并发执行并保持页面顺序
        let hydrations = page.results.iter().map(|resource| {
            let url = Url::parse(&resource.url).map_err(|e| {
                PokedexError::MalformedData(format!("条目URL非法 {}: {}", resource.url, e))
            });
            async move {
                let detail: PokemonDetail = self.fetch_json(url?).await?;
                Ok::<_, PokedexError>(PokedexSummary::from_detail(&detail))
            }
        });

        let results = futures::future::join_all(hydrations).await;
        results.into_iter().collect()
    }

    // 解析实体对应的进化链：物种元数据 -> 进化链引用 -> 原始进化树
    pub async fn resolve_evolution_chain(&self, id: u32) -> Result<EvolutionNode> {
        let species = self.get_species(id).await?;

        let chain_ref = species.evolution_chain.as_ref().ok_or_else(|| {
            PokedexError::MalformedData(format!("物种 {} 缺少进化链引用", species.name))
        })?;

        let url = Url::parse(&chain_ref.url).map_err(|e| {
            PokedexError::MalformedData(format!("进化链引用非法 {}: {}", chain_ref.url, e))
        })?;

        let response: EvolutionChainResponse = self.fetch_json(url).await?;
        Ok(EvolutionNode::from_chain(&response.chain))
    }

    // 解析并展开进化链，返回可直接渲染的边序列
    pub async fn get_evolution_records(&self, id: u32) -> Result<Vec<TransitionRecord>> {
        let root = self.resolve_evolution_chain(id).await?;
        flatten(&root)
    }

    // 已发出的请求数
    pub fn request_count(&self) -> u64 {
        self.requests_issued.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    // 私有方法
    fn checked_id(&self, id: u32) -> Result<u32> {
        if id == 0 {
            return Err(PokedexError::InvalidInput("图鉴编号从1开始".to_string()));
        }
        Ok(id)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.config.base_url_trimmed(), path);
        Url::parse(&raw)
            .map_err(|e| PokedexError::Config(format!("端点URL非法 {}: {}", raw, e)))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.requests_issued.fetch_add(1, Ordering::Relaxed);

        let body = self.transport.get(&url).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("响应解析失败 {}: {}", url, e);
            PokedexError::MalformedData(format!("响应解析失败 {}: {}", url, e))
        })
    }
}
