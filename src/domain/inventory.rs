// ==========================================
// 原神素材规划系统 - 库存查询接口
// ==========================================
// 职责: 聚合引擎的拥有数量查询能力
// 红线: 纯查询,核心层不写库存;未知材料视为 0
// ==========================================

use crate::domain::material::Material;
use std::collections::HashMap;

// ==========================================
// Trait: InventoryLookup
// ==========================================
// 由调用方提供 (完整应用中由按用户+材料建键的库存表支撑)
pub trait InventoryLookup {
    /// 查询某材料的拥有数量,无记录即为 0
    fn owned_count(&self, material: &Material) -> u32;
}

/// 内存库存表实现,缺键返回 0
impl InventoryLookup for HashMap<Material, u32> {
    fn owned_count(&self, material: &Material) -> u32 {
        self.get(material).copied().unwrap_or(0)
    }
}

// ==========================================
// EmptyInventory - 空库存
// ==========================================
// 未提供库存数据时的默认实现 (全部为 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyInventory;

impl InventoryLookup for EmptyInventory {
    fn owned_count(&self, _material: &Material) -> u32 {
        0
    }
}
