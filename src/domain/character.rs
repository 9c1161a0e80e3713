// ==========================================
// 原神素材规划系统 - 角色目录模型
// ==========================================
// 依据: 游戏静态目录数据 (角色养成关联)
// 红线: 目录数据只读,由外部应用装配后传入核心
// 用途: 计算引擎按品质档映射具体材料的查找表
// ==========================================

use crate::domain::material::{
    BossMaterial, MobMaterial, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};
use crate::domain::types::{Element, Region, TalentWeekday};
use serde::{Deserialize, Serialize};

// ==========================================
// CharacterDefinition - 角色静态定义
// ==========================================
// 一个角色在目录中的养成关联: 所属地区/元素、周本材料、
// Boss 材料、特产、天赋书开放日、关联怪物及其掉落。
// 材料列表在构造时按品质升序排好,缺档查询返回 None 而非报错。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    // ===== 基础信息 =====
    pub name: String,     // 角色名
    pub region: Region,   // 所属地区
    pub element: Element, // 元素属性

    // ===== 单一材料关联 (目录缺失时为 None, 对应项计 0) =====
    pub weekly_material: Option<WeeklyMaterial>, // 周本材料
    pub boss_material: Option<BossMaterial>,     // 世界 Boss 材料
    pub specialty: Option<Specialty>,            // 地区特产

    // ===== 天赋书 =====
    pub talent_weekday: TalentWeekday, // 天赋书开放星期
    pub talent_books: Vec<TalentMaterial>, // 本套天赋书 (品质 2/3/4, 升序)

    // ===== 突破石 =====
    pub stones: Vec<Stone>, // 本元素突破石 (品质 2/3/4/5, 升序)

    // ===== 关联怪物掉落 =====
    pub mob_name: Option<String>,       // 关联怪物 (目录缺失时为 None)
    pub mob_drops: Vec<MobMaterial>,    // 怪物掉落 (品质 1/2/3, 升序)
}

impl CharacterDefinition {
    /// 构造角色定义,材料列表统一按品质升序排序
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        region: Region,
        element: Element,
        talent_weekday: TalentWeekday,
        weekly_material: Option<WeeklyMaterial>,
        boss_material: Option<BossMaterial>,
        specialty: Option<Specialty>,
        mut talent_books: Vec<TalentMaterial>,
        mut stones: Vec<Stone>,
        mob_name: Option<String>,
        mut mob_drops: Vec<MobMaterial>,
    ) -> Self {
        talent_books.sort_by_key(|m| m.rarity);
        stones.sort_by_key(|m| m.rarity);
        mob_drops.sort_by_key(|m| m.rarity);
        Self {
            name: name.into(),
            region,
            element,
            weekly_material,
            boss_material,
            specialty,
            talent_weekday,
            talent_books,
            stones,
            mob_name,
            mob_drops,
        }
    }

    // ==========================================
    // 派生查找 (品质档 → 具体材料)
    // ==========================================

    /// 按品质档查天赋书 (2..=4),缺档返回 None
    pub fn talent_book_by_rarity(&self, rarity: u8) -> Option<&TalentMaterial> {
        self.talent_books.iter().find(|m| m.rarity == rarity)
    }

    /// 按品质档查突破石 (2..=5),缺档返回 None
    pub fn stone_by_rarity(&self, rarity: u8) -> Option<&Stone> {
        self.stones.iter().find(|m| m.rarity == rarity)
    }

    /// 按品质档查怪物掉落 (1..=3),缺档返回 None
    pub fn mob_drop_by_rarity(&self, rarity: u8) -> Option<&MobMaterial> {
        self.mob_drops.iter().find(|m| m.rarity == rarity)
    }
}
