// 远程数据接入模块
// 开发心理：PokéAPI是唯一数据源，线格式、传输和客户端编排都集中在这里
// 设计原则：trait作为传输接缝、DTO不外泄、错误在边界处分类

pub mod client;
pub mod models;
pub mod transport;

// 重新导出主要类型
pub use client::PokedexClient;
pub use transport::{FetchTransport, HttpTransport};
