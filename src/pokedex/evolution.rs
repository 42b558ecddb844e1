/*
* 进化链展开系统
* 开发心理过程：
* 1. 远程进化链是一棵会分叉的递归树，展示层需要的是线性的"从A到B"序列
* 2. 原始条件记录是一堆可选字段，解析时一次性判定成带标签的联合类型
* 3. 深度优先先序遍历，父子边按子节点出现顺序展开，先走完一条分支再走兄弟
* 4. 用已访问集合防御环引用，宁可报数据异常也不能死循环
*/

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::api::models::{ChainLink, RawEvolutionDetail};
use crate::core::error::{PokedexError, Result};
use crate::utils::text::hyphens_to_spaces;

// 进化触发方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerKind {
    LevelUp,
    ItemUse,
    Trade,
    Other(String),
}

// 进化触发的具体门槛
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirement {
    None,
    Item(String),
    MinLevel(u32),
    Happiness(u32),
    HeldItem(String),
}

// 解析后的单条进化条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCondition {
    pub trigger: TriggerKind,
    pub requirement: Requirement,
}

impl Default for TransitionCondition {
    fn default() -> Self {
        Self {
            trigger: TriggerKind::LevelUp,
            requirement: Requirement::None,
        }
    }
}

impl TransitionCondition {
    // 把异构的原始记录一次性判定成标签联合
    pub fn parse(raw: &RawEvolutionDetail) -> Self {
        // 消耗道具优先于触发方式字段，分叉进化统一呈现为道具进化
        if let Some(item) = &raw.item {
            return Self {
                trigger: TriggerKind::ItemUse,
                requirement: Requirement::Item(item.name.clone()),
            };
        }

        let requirement = Self::qualifier_of(raw);
        let trigger = match raw.trigger.as_ref().map(|t| t.name.as_str()) {
            None | Some("level-up") => TriggerKind::LevelUp,
            Some("trade") => TriggerKind::Trade,
            Some(kind) => TriggerKind::Other(kind.to_string()),
        };

        Self { trigger, requirement }
    }

    // 门槛字段按优先级取第一个命中的，与触发方式判定相互独立
    fn qualifier_of(raw: &RawEvolutionDetail) -> Requirement {
        if let Some(level) = raw.min_level {
            Requirement::MinLevel(level)
        } else if let Some(value) = raw.min_happiness {
            Requirement::Happiness(value)
        } else if let Some(item) = &raw.held_item {
            Requirement::HeldItem(item.name.clone())
        } else {
            Requirement::None
        }
    }

    pub fn trigger_label(&self) -> String {
        match &self.trigger {
            TriggerKind::LevelUp => "Level Up".to_string(),
            TriggerKind::ItemUse => "Item".to_string(),
            TriggerKind::Trade => "TRADE".to_string(),
            TriggerKind::Other(kind) => hyphens_to_spaces(kind).to_uppercase(),
        }
    }

    pub fn requirement_label(&self) -> String {
        match &self.requirement {
            Requirement::None => String::new(),
            Requirement::Item(name) => hyphens_to_spaces(name),
            Requirement::MinLevel(level) => format!("Level {}", level),
            Requirement::Happiness(value) => format!("Happiness {}", value),
            Requirement::HeldItem(name) => format!("Holding {}", hyphens_to_spaces(name)),
        }
    }
}

// 进化树节点，从线格式转换后完全自持
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species_name: String,
    // 指向本节点的那条边上的条件，根节点没有
    pub condition: Option<TransitionCondition>,
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn from_chain(link: &ChainLink) -> Self {
        Self {
            species_name: link.species.name.clone(),
            // 同一条边可能带多条记录，只取第一条
            condition: link.evolution_details.first().map(TransitionCondition::parse),
            evolves_to: link.evolves_to.iter().map(Self::from_chain).collect(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.evolves_to.len() + self.evolves_to.iter().map(Self::edge_count).sum::<usize>()
    }
}

// 展开后的单条进化边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: String,
    pub to: String,
    pub trigger: String,
    pub requirement: String,
}

impl TransitionRecord {
    // 展示层高亮用：标识符是小写的，展示名是首字母大写的
    pub fn is_from(&self, species: &str) -> bool {
        self.from.eq_ignore_ascii_case(species)
    }
}

// 把进化树按深度优先先序展开成边序列
pub fn flatten(root: &EvolutionNode) -> Result<Vec<TransitionRecord>> {
    let mut records = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(root.species_name.as_str());

    walk(root, &mut visited, &mut records)?;
    Ok(records)
}

fn walk<'a>(
    parent: &'a EvolutionNode,
    visited: &mut HashSet<&'a str>,
    records: &mut Vec<TransitionRecord>,
) -> Result<()> {
    for child in &parent.evolves_to {
        // 合法的链是有限的有根树，物种重复出现说明有回边
        if !visited.insert(child.species_name.as_str()) {
            return Err(PokedexError::MalformedData(format!(
                "进化链中物种重复出现: {}",
                child.species_name
            )));
        }

        let condition = child.condition.clone().unwrap_or_default();
        records.push(TransitionRecord {
            from: parent.species_name.clone(),
            to: child.species_name.clone(),
            trigger: condition.trigger_label(),
            requirement: condition.requirement_label(),
        });

        walk(child, visited, records)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::NamedResource;

    fn node(
        name: &str,
        condition: Option<TransitionCondition>,
        children: Vec<EvolutionNode>,
    ) -> EvolutionNode {
        EvolutionNode {
            species_name: name.to_string(),
            condition,
            evolves_to: children,
        }
    }

    fn item_use(item: &str) -> Option<TransitionCondition> {
        Some(TransitionCondition {
            trigger: TriggerKind::ItemUse,
            requirement: Requirement::Item(item.to_string()),
        })
    }

    fn min_level(level: u32) -> Option<TransitionCondition> {
        Some(TransitionCondition {
            trigger: TriggerKind::LevelUp,
            requirement: Requirement::MinLevel(level),
        })
    }

    #[test]
    fn test_root_without_children_yields_empty_sequence() {
        let root = node("tauros", None, Vec::new());
        assert_eq!(flatten(&root).unwrap(), Vec::new());
    }

    #[test]
    fn test_level_chain_flattens_in_order() {
        let root = node(
            "caterpie",
            None,
            vec![node(
                "metapod",
                min_level(7),
                vec![node("butterfree", min_level(10), Vec::new())],
            )],
        );

        let records = flatten(&root).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.len(), root.edge_count());

        assert_eq!(records[0].from, "caterpie");
        assert_eq!(records[0].to, "metapod");
        assert_eq!(records[0].trigger, "Level Up");
        assert_eq!(records[0].requirement, "Level 7");

        assert_eq!(records[1].from, "metapod");
        assert_eq!(records[1].to, "butterfree");
        assert_eq!(records[1].requirement, "Level 10");
    }

    #[test]
    fn test_branching_chain_uses_item_labels() {
        let root = node(
            "eevee",
            None,
            vec![
                node("vaporeon", item_use("water-stone"), Vec::new()),
                node("jolteon", item_use("thunder-stone"), Vec::new()),
                node("flareon", item_use("fire-stone"), Vec::new()),
            ],
        );

        let records = flatten(&root).unwrap();
        assert_eq!(records.len(), 3);

        let requirements: Vec<&str> = records.iter().map(|r| r.requirement.as_str()).collect();
        assert_eq!(requirements, vec!["water stone", "thunder stone", "fire stone"]);
        assert!(records.iter().all(|r| r.trigger == "Item"));
        assert!(records.iter().all(|r| r.from == "eevee"));
    }

    #[test]
    fn test_branch_subtree_completes_before_sibling() {
        let root = node(
            "base",
            None,
            vec![
                node("left", min_level(10), vec![node("left-two", min_level(20), Vec::new())]),
                node("right", min_level(10), Vec::new()),
            ],
        );

        let records = flatten(&root).unwrap();
        let order: Vec<&str> = records.iter().map(|r| r.to.as_str()).collect();
        assert_eq!(order, vec!["left", "left-two", "right"]);

        // 祖先在前，后代在后
        for record in &records {
            let from_first = records.iter().position(|r| r.to == record.from);
            let own = records.iter().position(|r| r.to == record.to).unwrap();
            if let Some(from_first) = from_first {
                assert!(from_first < own);
            }
        }
    }

    #[test]
    fn test_happiness_condition() {
        let raw = RawEvolutionDetail {
            trigger: Some(NamedResource {
                name: "level-up".to_string(),
                url: String::new(),
            }),
            min_happiness: Some(220),
            ..RawEvolutionDetail::default()
        };

        let condition = TransitionCondition::parse(&raw);
        assert_eq!(condition.trigger_label(), "Level Up");
        assert_eq!(condition.requirement_label(), "Happiness 220");
    }

    #[test]
    fn test_consumed_item_wins_over_trigger_kind() {
        let raw = RawEvolutionDetail {
            trigger: Some(NamedResource {
                name: "use-item".to_string(),
                url: String::new(),
            }),
            item: Some(NamedResource {
                name: "water-stone".to_string(),
                url: String::new(),
            }),
            ..RawEvolutionDetail::default()
        };

        let condition = TransitionCondition::parse(&raw);
        assert_eq!(condition.trigger_label(), "Item");
        assert_eq!(condition.requirement_label(), "water stone");
    }

    #[test]
    fn test_trade_with_held_item_keeps_qualifier() {
        let raw = RawEvolutionDetail {
            trigger: Some(NamedResource {
                name: "trade".to_string(),
                url: String::new(),
            }),
            held_item: Some(NamedResource {
                name: "metal-coat".to_string(),
                url: String::new(),
            }),
            ..RawEvolutionDetail::default()
        };

        let condition = TransitionCondition::parse(&raw);
        assert_eq!(condition.trigger_label(), "TRADE");
        assert_eq!(condition.requirement_label(), "Holding metal coat");
    }

    #[test]
    fn test_unrecognized_detail_falls_back_to_level_up() {
        let condition = TransitionCondition::parse(&RawEvolutionDetail::default());
        assert_eq!(condition.trigger_label(), "Level Up");
        assert_eq!(condition.requirement_label(), "");
    }

    #[test]
    fn test_other_trigger_kind_is_spaced_and_uppercased() {
        let raw = RawEvolutionDetail {
            trigger: Some(NamedResource {
                name: "tower-of-darkness".to_string(),
                url: String::new(),
            }),
            ..RawEvolutionDetail::default()
        };

        let condition = TransitionCondition::parse(&raw);
        assert_eq!(condition.trigger_label(), "TOWER OF DARKNESS");
    }

    #[test]
    fn test_back_edge_is_rejected() {
        // caterpie -> metapod -> caterpie，人为构造的回边
        let root = node(
            "caterpie",
            None,
            vec![node(
                "metapod",
                min_level(7),
                vec![node("caterpie", min_level(1), Vec::new())],
            )],
        );

        match flatten(&root) {
            Err(PokedexError::MalformedData(_)) => {}
            other => panic!("Expected MalformedData, got {:?}", other),
        }
    }

    #[test]
    fn test_is_from_is_case_insensitive() {
        let record = TransitionRecord {
            from: "eevee".to_string(),
            to: "vaporeon".to_string(),
            trigger: "Item".to_string(),
            requirement: "water stone".to_string(),
        };

        assert!(record.is_from("Eevee"));
        assert!(record.is_from("EEVEE"));
        assert!(!record.is_from("Vaporeon"));
    }

    #[test]
    fn test_from_chain_takes_first_detail_only() {
        let link = ChainLink {
            species: NamedResource {
                name: "slowpoke".to_string(),
                url: String::new(),
            },
            evolution_details: Vec::new(),
            evolves_to: vec![ChainLink {
                species: NamedResource {
                    name: "slowbro".to_string(),
                    url: String::new(),
                },
                evolution_details: vec![
                    RawEvolutionDetail {
                        min_level: Some(37),
                        ..RawEvolutionDetail::default()
                    },
                    RawEvolutionDetail {
                        trigger: Some(NamedResource {
                            name: "trade".to_string(),
                            url: String::new(),
                        }),
                        ..RawEvolutionDetail::default()
                    },
                ],
                evolves_to: Vec::new(),
            }],
        };

        let root = EvolutionNode::from_chain(&link);
        let records = flatten(&root).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].trigger, "Level Up");
        assert_eq!(records[0].requirement, "Level 37");
    }
}
