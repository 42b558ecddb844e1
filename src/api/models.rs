// PokéAPI响应数据模型
// 开发心理：线格式只在这一层出现，鸭子类型的杂项字段不往领域层扩散
// 设计原则：宽松反序列化，缺字段用默认值兜底，结构性缺失交给上层判定

use serde::{Deserialize, Serialize};

// 带名字的资源引用，PokéAPI最常见的形状
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// 纯URL资源引用
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

// 分页列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokemonListPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// 属性槽位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

// 特性槽位
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

// 立绘集合，只保留实际用到的两张
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
    #[serde(default)]
    pub dream_world: ArtworkSprite,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

// 实体详情，GET pokemon/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    // PokéAPI的身高体重单位是分米和百克
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

// 种族名（带语言标记）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}

// 物种元数据，GET pokemon-species/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub name: String,
    // -1 表示无性别，0..=8 为雌性八分比
    #[serde(default)]
    pub gender_rate: i8,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
    // 进化链引用在野生数据里可能缺失
    #[serde(default)]
    pub evolution_chain: Option<ResourceRef>,
}

// 进化链响应，GET evolution-chain/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

// 递归的原始进化树节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<RawEvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

// 异构的进化条件记录，字段都是可选的
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvolutionDetail {
    #[serde(default)]
    pub trigger: Option<NamedResource>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub held_item: Option<NamedResource>,
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub min_happiness: Option<u32>,
}
