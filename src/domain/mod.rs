// ==========================================
// 原神素材规划系统 - 领域模型层
// ==========================================
// 职责: 定义目录实体、进度实体、类型、库存查询接口
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod character;
pub mod error;
pub mod inventory;
pub mod material;
pub mod progress;
pub mod types;

// 重导出核心类型
pub use character::CharacterDefinition;
pub use error::ProgressError;
pub use inventory::{EmptyInventory, InventoryLookup};
pub use material::{
    BossMaterial, Material, MobMaterial, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};
pub use progress::{CharacterProgress, TALENT_SLOTS};
pub use types::{Element, MaterialKind, Region, TalentKind, TalentWeekday};
