// 图鉴条目领域模型
// 开发心理：把两个远程记录合成一个展示友好的条目，单位换算和文案整形都在这一层完成
// 设计原则：领域类型不暴露线格式，展示层拿到即可渲染

use serde::{Deserialize, Serialize};

use crate::api::models::{PokemonDetail, SpeciesDetail};
use crate::utils::text::capitalize_first;

// 性别比例，来自 gender_rate：-1 无性别，0..=8 为雌性八分比
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderRatio {
    rate: i8,
}

impl GenderRatio {
    pub fn from_rate(rate: i8) -> Self {
        // 超出范围的值按边界收拢
        Self {
            rate: rate.clamp(-1, 8),
        }
    }

    pub fn is_genderless(&self) -> bool {
        self.rate < 0
    }

    pub fn female_percent(&self) -> Option<f64> {
        if self.is_genderless() {
            None
        } else {
            Some(f64::from(self.rate) * 12.5)
        }
    }

    pub fn male_percent(&self) -> Option<f64> {
        self.female_percent().map(|female| 100.0 - female)
    }

    // 展示文案，"♂ 87.5% / ♀ 12.5%" 或 "Genderless"
    pub fn display(&self) -> String {
        match (self.male_percent(), self.female_percent()) {
            (Some(male), Some(female)) => format!("♂ {:.1}% / ♀ {:.1}%", male, female),
            _ => "Genderless".to_string(),
        }
    }
}

// 单个图鉴条目的全部展示数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub number: u32,
    pub name: String,
    pub types: Vec<String>,
    pub artwork: Option<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: String,
    pub genus: String,
    pub gender: GenderRatio,
    pub egg_groups: String,
    pub egg_cycle: String,
}

impl PokedexEntry {
    // 合成实体详情和物种元数据
    pub fn from_detail(detail: &PokemonDetail, species: &SpeciesDetail) -> Self {
        let types = detail
            .types
            .iter()
            .map(|slot| slot.kind.name.clone())
            .collect();

        // 官方立绘优先，梦境世界立绘兜底
        let artwork = detail
            .sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .or_else(|| detail.sprites.other.dream_world.front_default.clone());

        let abilities = detail
            .abilities
            .iter()
            .map(|slot| capitalize_first(&slot.ability.name))
            .collect::<Vec<_>>()
            .join(", ");

        let genus = species
            .genera
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.genus.replace(" Pokémon", ""))
            .unwrap_or_else(|| "Unknown".to_string());

        let egg_group_names: Vec<String> = species
            .egg_groups
            .iter()
            .map(|group| capitalize_first(&group.name))
            .collect();
        let egg_cycle = egg_group_names
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            number: detail.id,
            name: detail.name.clone(),
            types,
            artwork,
            // PokéAPI的单位是分米和百克
            height_m: f64::from(detail.height) * 0.1,
            weight_kg: f64::from(detail.weight) * 0.1,
            abilities,
            genus,
            gender: GenderRatio::from_rate(species.gender_rate),
            egg_groups: egg_group_names.join(", "),
            egg_cycle,
        }
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn display_name(&self) -> String {
        capitalize_first(&self.name)
    }
}

// 列表页的轻量条目，只用实体详情即可构造
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexSummary {
    pub number: u32,
    pub name: String,
    pub types: Vec<String>,
    pub sprite: Option<String>,
}

impl PokedexSummary {
    pub fn from_detail(detail: &PokemonDetail) -> Self {
        Self {
            number: detail.id,
            name: detail.name.clone(),
            types: detail
                .types
                .iter()
                .map(|slot| slot.kind.name.clone())
                .collect(),
            sprite: detail.sprites.other.dream_world.front_default.clone(),
        }
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}
