// ==========================================
// 原神素材规划系统 - 需求计算引擎
// ==========================================
// 职责: 将角色进度折算为各类材料的需求数量
// 输入: 角色进度 + 角色静态定义
// 输出: RequiredMaterials (六类材料 → 需求数量)
// 红线: 纯函数,无副作用,查找表为进程级常量
// ==========================================

use crate::domain::character::CharacterDefinition;
use crate::domain::material::{
    BossMaterial, MobMaterial, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};
use crate::domain::progress::{CharacterProgress, TALENT_SLOTS};
use crate::engine::tables::{
    ASCENSION_BOUNDARIES, ASCENSION_STAGES, BOSS_COUNT_PER_STAGE, MOB_STEP_PER_STAGE,
    SPECIALTY_COUNT_PER_STAGE, STONE_STEP_PER_STAGE, TALENT_BOOK_COST_PER_LEVEL,
    TALENT_MOB_COST_PER_LEVEL, WEEKLY_UNITS_PER_LEVEL,
};
use std::collections::HashMap;

// ==========================================
// 突破次数推导
// ==========================================

/// 计算已完成的突破次数 (0..=6)
///
/// 规则: 等级恰在突破边界且尚未突破时,有效等级按低一级计
/// (边界未真正跨过);突破次数 = 不超过有效等级的边界数,上限 6。
///
/// # 参数
/// - `level`: 当前等级 (1..=90)
/// - `is_ascended`: 当前等级上限处是否已完成突破
///
/// # 返回
/// 已完成的突破次数
pub fn ascensions(level: u8, is_ascended: bool) -> u8 {
    let effective_level = if !is_ascended && ASCENSION_BOUNDARIES.contains(&level) {
        level - 1
    } else {
        level
    };
    let count = ASCENSION_BOUNDARIES
        .iter()
        .filter(|&&boundary| boundary <= effective_level)
        .count();
    count.min(ASCENSION_STAGES) as u8
}

// ==========================================
// RequiredMaterials - 材料需求汇总
// ==========================================
// 六张独立映射 (材料 → 需求数量),支持逐项相加合并
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredMaterials {
    pub mob_materials: HashMap<MobMaterial, u32>,
    pub boss_materials: HashMap<BossMaterial, u32>,
    pub weekly_materials: HashMap<WeeklyMaterial, u32>,
    pub talent_materials: HashMap<TalentMaterial, u32>,
    pub stones: HashMap<Stone, u32>,
    pub specialties: HashMap<Specialty, u32>,
}

impl RequiredMaterials {
    pub fn new() -> Self {
        Self::default()
    }

    /// 是否无任何需求
    pub fn is_empty(&self) -> bool {
        self.mob_materials.is_empty()
            && self.boss_materials.is_empty()
            && self.weekly_materials.is_empty()
            && self.talent_materials.is_empty()
            && self.stones.is_empty()
            && self.specialties.is_empty()
    }

    /// 合并另一份需求 (逐类、逐材料求和,缺键视为 0)
    ///
    /// 对数量而言满足交换律与结合律
    pub fn merge_with(&mut self, other: RequiredMaterials) {
        for (material, count) in other.mob_materials {
            *self.mob_materials.entry(material).or_insert(0) += count;
        }
        for (material, count) in other.boss_materials {
            *self.boss_materials.entry(material).or_insert(0) += count;
        }
        for (material, count) in other.weekly_materials {
            *self.weekly_materials.entry(material).or_insert(0) += count;
        }
        for (material, count) in other.talent_materials {
            *self.talent_materials.entry(material).or_insert(0) += count;
        }
        for (material, count) in other.stones {
            *self.stones.entry(material).or_insert(0) += count;
        }
        for (material, count) in other.specialties {
            *self.specialties.entry(material).or_insert(0) += count;
        }
    }
}

// ==========================================
// MaterialsCalculator - 需求计算引擎
// ==========================================
pub struct MaterialsCalculator {
    // 无状态引擎,不需要注入依赖
}

impl Default for MaterialsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialsCalculator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算整个阵容的材料需求 (逐角色计算后合并)
    ///
    /// # 参数
    /// - `roster`: (进度, 角色定义) 列表
    ///
    /// # 返回
    /// 合并后的材料需求
    pub fn calculate_all(
        &self,
        roster: &[(CharacterProgress, CharacterDefinition)],
    ) -> RequiredMaterials {
        let mut total = RequiredMaterials::new();
        for (progress, definition) in roster {
            total.merge_with(self.calculate(progress, definition));
        }
        total
    }

    /// 计算单个角色的材料需求
    ///
    /// # 参数
    /// - `progress`: 角色进度 (当前/目标)
    /// - `definition`: 角色静态定义 (材料关联)
    ///
    /// # 返回
    /// 该角色从当前状态到目标状态的全部材料需求
    pub fn calculate(
        &self,
        progress: &CharacterProgress,
        definition: &CharacterDefinition,
    ) -> RequiredMaterials {
        let mut required = RequiredMaterials::new();
        let stage = ascensions(progress.level(), progress.is_ascended()) as usize;

        tracing::debug!(
            character = %definition.name,
            level = progress.level(),
            ascension_stage = stage,
            "计算角色材料需求"
        );

        self.add_ascension_costs(&mut required, definition, stage);
        self.add_talent_costs(&mut required, progress, definition);
        self.add_weekly_costs(&mut required, progress, definition);

        required
    }

    // ==========================================
    // 突破消耗 (阶段 stage..=5 求和)
    // ==========================================

    fn add_ascension_costs(
        &self,
        required: &mut RequiredMaterials,
        definition: &CharacterDefinition,
        stage: usize,
    ) {
        if stage >= ASCENSION_STAGES {
            return; // 已满突破
        }

        // Boss 材料: 单一材料,直接求和
        if let Some(boss) = &definition.boss_material {
            let total: u32 = BOSS_COUNT_PER_STAGE[stage..].iter().sum();
            if total > 0 {
                *required.boss_materials.entry(boss.clone()).or_insert(0) += total;
            }
        }

        // 地区特产: 单一材料,直接求和
        if let Some(specialty) = &definition.specialty {
            let total: u32 = SPECIALTY_COUNT_PER_STAGE[stage..].iter().sum();
            if total > 0 {
                *required.specialties.entry(specialty.clone()).or_insert(0) += total;
            }
        }

        // 突破石: 按品质档累计 (同一角色可同时需要多档)
        let mut stone_by_rarity: HashMap<u8, u32> = HashMap::new();
        for &(rarity, count) in &STONE_STEP_PER_STAGE[stage..] {
            *stone_by_rarity.entry(rarity).or_insert(0) += count;
        }
        for (rarity, count) in stone_by_rarity {
            // 目录缺档时该档计 0
            if let Some(stone) = definition.stone_by_rarity(rarity) {
                *required.stones.entry(stone.clone()).or_insert(0) += count;
            }
        }

        // 怪物掉落 (突破部分): 按品质档累计
        let mut mob_by_rarity: HashMap<u8, u32> = HashMap::new();
        for &(rarity, count) in &MOB_STEP_PER_STAGE[stage..] {
            *mob_by_rarity.entry(rarity).or_insert(0) += count;
        }
        self.add_mob_drops(required, definition, mob_by_rarity);
    }

    // ==========================================
    // 天赋消耗 (逐天赋, 等级区间 [当前, 目标) 求和)
    // ==========================================

    fn add_talent_costs(
        &self,
        required: &mut RequiredMaterials,
        progress: &CharacterProgress,
        definition: &CharacterDefinition,
    ) {
        let mut book_by_rarity: HashMap<u8, u32> = HashMap::new();
        let mut mob_by_rarity: HashMap<u8, u32> = HashMap::new();

        for slot in 0..TALENT_SLOTS {
            let current = progress.talent_levels()[slot];
            let target = progress.target_talent_levels()[slot];
            // 目标低于当前 → 空区间 → 零消耗
            for level in current..target {
                let index = (level - 1) as usize;
                let (rarity, count) = TALENT_BOOK_COST_PER_LEVEL[index];
                *book_by_rarity.entry(rarity).or_insert(0) += count;
                let (rarity, count) = TALENT_MOB_COST_PER_LEVEL[index];
                *mob_by_rarity.entry(rarity).or_insert(0) += count;
            }
        }

        for (rarity, count) in book_by_rarity {
            if let Some(book) = definition.talent_book_by_rarity(rarity) {
                *required.talent_materials.entry(book.clone()).or_insert(0) += count;
            }
        }
        self.add_mob_drops(required, definition, mob_by_rarity);
    }

    // ==========================================
    // 周本消耗 (逐天赋, 等级区间 [当前, 目标] 闭区间求和)
    // ==========================================
    // 注意: 与天赋书的半开区间不同,此处沿用观测到的闭区间口径
    // (待与游戏实际成本表核对,勿擅自"修正")

    fn add_weekly_costs(
        &self,
        required: &mut RequiredMaterials,
        progress: &CharacterProgress,
        definition: &CharacterDefinition,
    ) {
        let Some(weekly) = &definition.weekly_material else {
            return;
        };

        let mut total = 0u32;
        for slot in 0..TALENT_SLOTS {
            let current = progress.talent_levels()[slot];
            let target = progress.target_talent_levels()[slot];
            for level in current..=target {
                // 等级 10 超出表长,按 0 计
                total += WEEKLY_UNITS_PER_LEVEL
                    .get(level as usize)
                    .copied()
                    .unwrap_or(0);
            }
        }

        if total > 0 {
            *required.weekly_materials.entry(weekly.clone()).or_insert(0) += total;
        }
    }

    /// 将按品质档累计的怪物掉落需求映射到角色的具体掉落材料
    fn add_mob_drops(
        &self,
        required: &mut RequiredMaterials,
        definition: &CharacterDefinition,
        by_rarity: HashMap<u8, u32>,
    ) {
        for (rarity, count) in by_rarity {
            // 无关联怪物或缺档时该档计 0
            if let Some(drop) = definition.mob_drop_by_rarity(rarity) {
                *required.mob_materials.entry(drop.clone()).or_insert(0) += count;
            }
        }
    }
}
