// ==========================================
// 原神素材规划系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 养成材料需求计算与聚合核心
// 边界: 认证/存储/渲染/路由由外围应用负责,
//       核心只接收内存记录与静态目录,返回计算结构
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Element, MaterialKind, Region, TalentKind, TalentWeekday};

// 领域实体
pub use domain::{
    BossMaterial, CharacterDefinition, CharacterProgress, EmptyInventory, InventoryLookup,
    Material, MobMaterial, ProgressError, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};

// 引擎
pub use engine::{
    ascensions, AggregatedMaterials, MaterialsAggregator, MaterialsCalculator, RequiredMaterials,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "原神素材规划系统";
