// ==========================================
// 原神素材规划系统 - 材料领域模型
// ==========================================
// 依据: 游戏静态目录数据 (材料六大类)
// 红线: 材料为只读目录数据,核心层不修改
// 用途: 计算引擎的查表键 + 聚合引擎的分组键
// ==========================================

use crate::domain::types::{Element, MaterialKind, Region, TalentWeekday};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// MobMaterial - 小怪掉落材料
// ==========================================
// 同一怪物掉落 3 个品质档 (1/2/3),mob_name 为分组键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MobMaterial {
    pub name: String,     // 材料名称
    pub mob_name: String, // 掉落怪物 (分组键)
    pub rarity: u8,       // 品质档 (1..=3)
}

// ==========================================
// BossMaterial - 世界 Boss 材料
// ==========================================
// 每个角色固定一种,无品质档、无分组
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BossMaterial {
    pub name: String, // 材料名称
}

// ==========================================
// WeeklyMaterial - 周本材料
// ==========================================
// 每个周本 Boss 掉落至多 3 种,boss_name 为分组键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyMaterial {
    pub name: String,      // 材料名称
    pub boss_name: String, // 周本 Boss (分组键)
}

// ==========================================
// TalentMaterial - 天赋书
// ==========================================
// 按 (地区, 星期) 分组,3 个品质档 (2/3/4)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TalentMaterial {
    pub name: String,           // 材料名称
    pub region: Region,         // 所属地区 (分组键)
    pub weekday: TalentWeekday, // 开放星期 (分桶键)
    pub rarity: u8,             // 品质档 (2..=4)
}

// ==========================================
// Stone - 元素突破石
// ==========================================
// 按元素分组,4 个品质档 (2/3/4/5)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub name: String,     // 材料名称
    pub element: Element, // 所属元素 (分组键)
    pub rarity: u8,       // 品质档 (2..=5)
}

// ==========================================
// Specialty - 地区特产
// ==========================================
// 每个角色固定一种,无品质档、无分组
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String, // 材料名称
}

// ==========================================
// Material - 材料和类型 (Sum Type)
// ==========================================
// 库存查询的统一键: 六类材料收敛为一个带标签的联合类型,
// 下游按标签穷尽匹配,不做字段探测
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    Mob(MobMaterial),
    Boss(BossMaterial),
    Weekly(WeeklyMaterial),
    Talent(TalentMaterial),
    Stone(Stone),
    Specialty(Specialty),
}

impl Material {
    /// 材料大类标签
    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::Mob(_) => MaterialKind::Mob,
            Material::Boss(_) => MaterialKind::Boss,
            Material::Weekly(_) => MaterialKind::Weekly,
            Material::Talent(_) => MaterialKind::Talent,
            Material::Stone(_) => MaterialKind::Stone,
            Material::Specialty(_) => MaterialKind::Specialty,
        }
    }

    /// 材料名称
    pub fn name(&self) -> &str {
        match self {
            Material::Mob(m) => &m.name,
            Material::Boss(m) => &m.name,
            Material::Weekly(m) => &m.name,
            Material::Talent(m) => &m.name,
            Material::Stone(m) => &m.name,
            Material::Specialty(m) => &m.name,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind(), self.name())
    }
}

impl From<MobMaterial> for Material {
    fn from(m: MobMaterial) -> Self {
        Material::Mob(m)
    }
}

impl From<BossMaterial> for Material {
    fn from(m: BossMaterial) -> Self {
        Material::Boss(m)
    }
}

impl From<WeeklyMaterial> for Material {
    fn from(m: WeeklyMaterial) -> Self {
        Material::Weekly(m)
    }
}

impl From<TalentMaterial> for Material {
    fn from(m: TalentMaterial) -> Self {
        Material::Talent(m)
    }
}

impl From<Stone> for Material {
    fn from(m: Stone) -> Self {
        Material::Stone(m)
    }
}

impl From<Specialty> for Material {
    fn from(m: Specialty) -> Self {
        Material::Specialty(m)
    }
}
