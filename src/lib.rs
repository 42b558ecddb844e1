// 宝可梦图鉴核心库入口
// 开发心理：图鉴的非平凡部分是进化链展开，其余是远程数据编排和展示整形
// 架构：模块化设计，配置构造注入，便于测试和部署

// 核心模块 - 始终可用
pub mod core;
pub mod utils;

// 数据接入与领域模型
pub mod api;
pub mod pokedex;

// 重新导出核心类型
pub use crate::api::{FetchTransport, HttpTransport, PokedexClient};
pub use crate::core::{ApiConfig, PokedexError, Result};
pub use crate::pokedex::{
    flatten, EvolutionNode, GenderRatio, PokedexEntry, PokedexSummary, TransitionRecord,
};

// 版本信息
pub const VERSION: &str = "0.1.0";
pub const NAME: &str = "pokedex";

// 图鉴常量
pub mod constants {
    pub const API_BASE_URL: &str = "https://pokeapi.co/api/v2";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_PAGE_LIMIT: u32 = 20;
}

// 便利函数
pub fn init() {
    // 初始化日志系统，重复调用保持幂等
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "pokedex=info");
    }

    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();

    log::info!("图鉴核心库初始化完成 v{}", VERSION);
}
