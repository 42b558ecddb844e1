// 图鉴领域模块 - 条目与进化链
// 开发心理：领域模型与线格式解耦，展开算法是这里的核心
// 设计原则：纯函数、不可变数据、确定性输出

pub mod entry;
pub mod evolution;

// 重新导出主要类型
pub use entry::{GenderRatio, PokedexEntry, PokedexSummary};
pub use evolution::{
    flatten, EvolutionNode, Requirement, TransitionCondition, TransitionRecord, TriggerKind,
};
