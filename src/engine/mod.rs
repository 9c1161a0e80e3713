// ==========================================
// 原神素材规划系统 - 引擎层
// ==========================================
// 职责: 实现需求计算与聚合排序的业务规则
// 红线: 引擎纯函数化,不触达存储,不写库存
// ==========================================

pub mod aggregator;
pub mod calculator;
pub mod tables;

// 重导出核心引擎
pub use aggregator::{
    AggregatedMaterials, BossMaterialAggregated, MaterialsAggregator, MobMaterialAggregated,
    SpecialtyAggregated, StoneAggregated, TalentMaterialAggregated, TalentRegionAggregated,
    WeeklyMaterialAggregated,
};
pub use calculator::{ascensions, MaterialsCalculator, RequiredMaterials};
