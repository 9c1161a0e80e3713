// ==========================================
// 原神素材规划系统 - 聚合排序引擎
// ==========================================
// 职责: 将材料需求按自然分组聚合,对照库存净额并排序
// 输入: RequiredMaterials + 库存查询能力
// 输出: AggregatedMaterials (六类分组结构,按缺口降序)
// 红线: 不写库存;缺档查询计 0,不失败
// ==========================================
// 等价值换算: 低三档可合成高一档 (3 小 = 1 中, 3 中 = 1 大),
// 故同组内按 9/3/1 折算为最低档单位;突破石多一档,为 27/9/3/1
// ==========================================

use crate::domain::inventory::InventoryLookup;
use crate::domain::material::{
    BossMaterial, Material, MobMaterial, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};
use crate::domain::types::{Element, Region, TalentWeekday};
use crate::engine::calculator::RequiredMaterials;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

// ==========================================
// 聚合输出结构 (展示层契约)
// ==========================================

/// 怪物掉落聚合组 (按怪物分组, 品质档 1/2/3)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobMaterialAggregated {
    pub mob_name: String,
    pub material_1: Option<MobMaterial>,
    pub material_2: Option<MobMaterial>,
    pub material_3: Option<MobMaterial>,
    pub required_1: u32,
    pub required_2: u32,
    pub required_3: u32,
    pub owned_1: u32,
    pub owned_2: u32,
    pub owned_3: u32,
    pub equivalent: i64,        // 9·需求₃ + 3·需求₂ + 需求₁
    pub equivalent_remain: i64, // 同权重作用于 (需求 - 拥有), 可为负
}

/// 周本材料聚合组 (按周本 Boss 分组, 至多 3 槽, 等权)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMaterialAggregated {
    pub boss_name: String,
    pub material_1: Option<WeeklyMaterial>,
    pub material_2: Option<WeeklyMaterial>,
    pub material_3: Option<WeeklyMaterial>,
    pub required_1: u32,
    pub required_2: u32,
    pub required_3: u32,
    pub owned_1: u32,
    pub owned_2: u32,
    pub owned_3: u32,
    pub equivalent: i64,        // 需求简单求和 (周本掉落难度等价)
    pub equivalent_remain: i64,
}

/// 天赋书星期桶 (品质档 2/3/4)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentMaterialAggregated {
    pub material_2: Option<TalentMaterial>,
    pub material_3: Option<TalentMaterial>,
    pub material_4: Option<TalentMaterial>,
    pub required_2: u32,
    pub required_3: u32,
    pub required_4: u32,
    pub owned_2: u32,
    pub owned_3: u32,
    pub owned_4: u32,
    pub equivalent: i64, // 9·需求₄ + 3·需求₃ + 需求₂
    pub equivalent_remain: i64,
}

/// 天赋书地区聚合组 (周一/周二/周三三桶)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TalentRegionAggregated {
    pub region: Region,
    pub monday: TalentMaterialAggregated,
    pub tuesday: TalentMaterialAggregated,
    pub wednesday: TalentMaterialAggregated,
    pub equivalent: i64, // 三桶之和
    pub equivalent_remain: i64,
}

/// 突破石聚合组 (按元素分组, 品质档 2/3/4/5)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoneAggregated {
    pub element: Element,
    pub material_2: Option<Stone>,
    pub material_3: Option<Stone>,
    pub material_4: Option<Stone>,
    pub material_5: Option<Stone>,
    pub required_2: u32,
    pub required_3: u32,
    pub required_4: u32,
    pub required_5: u32,
    pub owned_2: u32,
    pub owned_3: u32,
    pub owned_4: u32,
    pub owned_5: u32,
    pub equivalent: i64, // 27·需求₅ + 9·需求₄ + 3·需求₃ + 需求₂
    pub equivalent_remain: i64,
}

/// Boss 材料条目 (无分组、无品质档)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BossMaterialAggregated {
    pub material: BossMaterial,
    pub required: u32,
    pub owned: u32,
    pub remain: i64, // 需求 - 拥有, 可为负
}

/// 地区特产条目 (无分组、无品质档)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialtyAggregated {
    pub material: Specialty,
    pub required: u32,
    pub owned: u32,
    pub remain: i64,
}

// ==========================================
// AggregatedMaterials - 聚合总输出
// ==========================================
// 六类各自独立排序: 缺口 (equivalent_remain / remain) 降序,
// 最缺的组排最前;超储为负,排在正缺口之后
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedMaterials {
    pub mob_materials: Vec<MobMaterialAggregated>,
    pub weekly_materials: Vec<WeeklyMaterialAggregated>,
    pub talent_materials: Vec<TalentRegionAggregated>,
    pub stones: Vec<StoneAggregated>,
    pub specialties: Vec<SpecialtyAggregated>,
    pub boss_materials: Vec<BossMaterialAggregated>,
}

// ==========================================
// MaterialsAggregator - 聚合排序引擎
// ==========================================
pub struct MaterialsAggregator {
    // 无状态引擎,不需要注入依赖
}

impl Default for MaterialsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialsAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 聚合材料需求
    ///
    /// # 参数
    /// - `required`: 计算引擎输出的材料需求
    /// - `inventory`: 库存查询能力 (由调用方提供, 只读)
    ///
    /// # 返回
    /// 六类分组聚合结果, 各自按缺口降序排序
    pub fn aggregate(
        &self,
        required: &RequiredMaterials,
        inventory: &impl InventoryLookup,
    ) -> AggregatedMaterials {
        AggregatedMaterials {
            mob_materials: self.aggregate_mobs(&required.mob_materials, inventory),
            weekly_materials: self.aggregate_weeklies(&required.weekly_materials, inventory),
            talent_materials: self.aggregate_talents(&required.talent_materials, inventory),
            stones: self.aggregate_stones(&required.stones, inventory),
            specialties: self.aggregate_specialties(&required.specialties, inventory),
            boss_materials: self.aggregate_bosses(&required.boss_materials, inventory),
        }
    }

    // ==========================================
    // 怪物掉落: 按怪物分组
    // ==========================================

    fn aggregate_mobs(
        &self,
        mob_materials: &HashMap<MobMaterial, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<MobMaterialAggregated> {
        let mut by_mob: HashMap<&str, HashMap<u8, &MobMaterial>> = HashMap::new();
        for material in mob_materials.keys() {
            by_mob
                .entry(material.mob_name.as_str())
                .or_default()
                .insert(material.rarity, material);
        }

        let mut result: Vec<MobMaterialAggregated> = Vec::with_capacity(by_mob.len());
        for (mob_name, by_rarity) in by_mob {
            let tier = |rarity: u8| -> (Option<MobMaterial>, u32, u32) {
                match by_rarity.get(&rarity) {
                    Some(&material) => {
                        let required = mob_materials.get(material).copied().unwrap_or(0);
                        let owned = inventory.owned_count(&Material::Mob(material.clone()));
                        (Some(material.clone()), required, owned)
                    }
                    None => (None, 0, 0),
                }
            };
            let (material_1, required_1, owned_1) = tier(1);
            let (material_2, required_2, owned_2) = tier(2);
            let (material_3, required_3, owned_3) = tier(3);

            result.push(MobMaterialAggregated {
                mob_name: mob_name.to_string(),
                material_1,
                material_2,
                material_3,
                required_1,
                required_2,
                required_3,
                owned_1,
                owned_2,
                owned_3,
                equivalent: weighted3(required_1, required_2, required_3),
                equivalent_remain: weighted3(required_1, required_2, required_3)
                    - weighted3(owned_1, owned_2, owned_3),
            });
        }

        result.sort_by(|a, b| b.equivalent_remain.cmp(&a.equivalent_remain));
        result
    }

    // ==========================================
    // 周本材料: 按周本 Boss 分组
    // ==========================================

    fn aggregate_weeklies(
        &self,
        weekly_materials: &HashMap<WeeklyMaterial, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<WeeklyMaterialAggregated> {
        let mut by_boss: HashMap<&str, Vec<&WeeklyMaterial>> = HashMap::new();
        for material in weekly_materials.keys() {
            by_boss
                .entry(material.boss_name.as_str())
                .or_default()
                .push(material);
        }

        let mut result: Vec<WeeklyMaterialAggregated> = Vec::with_capacity(by_boss.len());
        for (boss_name, mut materials) in by_boss {
            // 槽位无品质含义,按名称定序保证输出稳定
            materials.sort_by(|a, b| a.name.cmp(&b.name));

            let slot = |index: usize| -> (Option<WeeklyMaterial>, u32, u32) {
                match materials.get(index) {
                    Some(&material) => {
                        let required = weekly_materials.get(material).copied().unwrap_or(0);
                        let owned = inventory.owned_count(&Material::Weekly(material.clone()));
                        (Some(material.clone()), required, owned)
                    }
                    None => (None, 0, 0),
                }
            };
            let (material_1, required_1, owned_1) = slot(0);
            let (material_2, required_2, owned_2) = slot(1);
            let (material_3, required_3, owned_3) = slot(2);

            let required_total = (required_1 + required_2 + required_3) as i64;
            let owned_total = (owned_1 + owned_2 + owned_3) as i64;
            result.push(WeeklyMaterialAggregated {
                boss_name: boss_name.to_string(),
                material_1,
                material_2,
                material_3,
                required_1,
                required_2,
                required_3,
                owned_1,
                owned_2,
                owned_3,
                equivalent: required_total,
                equivalent_remain: required_total - owned_total,
            });
        }

        result.sort_by(|a, b| b.equivalent_remain.cmp(&a.equivalent_remain));
        result
    }

    // ==========================================
    // 天赋书: 按地区分组, 地区内按星期分桶
    // ==========================================

    fn aggregate_talents(
        &self,
        talent_materials: &HashMap<TalentMaterial, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<TalentRegionAggregated> {
        let mut by_region_week: HashMap<(Region, u8), HashMap<u8, &TalentMaterial>> =
            HashMap::new();
        for material in talent_materials.keys() {
            by_region_week
                .entry((material.region, material.weekday.index()))
                .or_default()
                .insert(material.rarity, material);
        }

        let regions: HashSet<Region> = by_region_week.keys().map(|&(region, _)| region).collect();

        let mut result: Vec<TalentRegionAggregated> = Vec::new();
        for region in regions {
            let bucket = |weekday: u8| -> TalentMaterialAggregated {
                self.build_talent_bucket(
                    by_region_week.get(&(region, weekday)),
                    talent_materials,
                    inventory,
                )
            };
            let monday = bucket(TalentWeekday::Monday.index());
            let tuesday = bucket(TalentWeekday::Tuesday.index());
            let wednesday = bucket(TalentWeekday::Wednesday.index());

            result.push(TalentRegionAggregated {
                region,
                equivalent: monday.equivalent + tuesday.equivalent + wednesday.equivalent,
                equivalent_remain: monday.equivalent_remain
                    + tuesday.equivalent_remain
                    + wednesday.equivalent_remain,
                monday,
                tuesday,
                wednesday,
            });
        }

        result.sort_by(|a, b| b.equivalent_remain.cmp(&a.equivalent_remain));
        result
    }

    fn build_talent_bucket(
        &self,
        by_rarity: Option<&HashMap<u8, &TalentMaterial>>,
        talent_materials: &HashMap<TalentMaterial, u32>,
        inventory: &impl InventoryLookup,
    ) -> TalentMaterialAggregated {
        let tier = |rarity: u8| -> (Option<TalentMaterial>, u32, u32) {
            match by_rarity.and_then(|m| m.get(&rarity)) {
                Some(&material) => {
                    let required = talent_materials.get(material).copied().unwrap_or(0);
                    let owned = inventory.owned_count(&Material::Talent(material.clone()));
                    (Some(material.clone()), required, owned)
                }
                None => (None, 0, 0),
            }
        };
        let (material_2, required_2, owned_2) = tier(2);
        let (material_3, required_3, owned_3) = tier(3);
        let (material_4, required_4, owned_4) = tier(4);

        TalentMaterialAggregated {
            material_2,
            material_3,
            material_4,
            required_2,
            required_3,
            required_4,
            owned_2,
            owned_3,
            owned_4,
            equivalent: weighted3(required_2, required_3, required_4),
            equivalent_remain: weighted3(required_2, required_3, required_4)
                - weighted3(owned_2, owned_3, owned_4),
        }
    }

    // ==========================================
    // 突破石: 按元素分组
    // ==========================================

    fn aggregate_stones(
        &self,
        stones: &HashMap<Stone, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<StoneAggregated> {
        let mut by_element: HashMap<Element, HashMap<u8, &Stone>> = HashMap::new();
        for stone in stones.keys() {
            by_element
                .entry(stone.element)
                .or_default()
                .insert(stone.rarity, stone);
        }

        let mut result: Vec<StoneAggregated> = Vec::with_capacity(by_element.len());
        for (element, by_rarity) in by_element {
            let tier = |rarity: u8| -> (Option<Stone>, u32, u32) {
                match by_rarity.get(&rarity) {
                    Some(&stone) => {
                        let required = stones.get(stone).copied().unwrap_or(0);
                        let owned = inventory.owned_count(&Material::Stone(stone.clone()));
                        (Some(stone.clone()), required, owned)
                    }
                    None => (None, 0, 0),
                }
            };
            let (material_2, required_2, owned_2) = tier(2);
            let (material_3, required_3, owned_3) = tier(3);
            let (material_4, required_4, owned_4) = tier(4);
            let (material_5, required_5, owned_5) = tier(5);

            result.push(StoneAggregated {
                element,
                material_2,
                material_3,
                material_4,
                material_5,
                required_2,
                required_3,
                required_4,
                required_5,
                owned_2,
                owned_3,
                owned_4,
                owned_5,
                equivalent: weighted4(required_2, required_3, required_4, required_5),
                equivalent_remain: weighted4(required_2, required_3, required_4, required_5)
                    - weighted4(owned_2, owned_3, owned_4, owned_5),
            });
        }

        result.sort_by(|a, b| b.equivalent_remain.cmp(&a.equivalent_remain));
        result
    }

    // ==========================================
    // 地区特产 / Boss 材料: 无分组, 逐材料净额
    // ==========================================

    fn aggregate_specialties(
        &self,
        specialties: &HashMap<Specialty, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<SpecialtyAggregated> {
        let mut result: Vec<SpecialtyAggregated> = specialties
            .iter()
            .map(|(material, &required)| {
                let owned = inventory.owned_count(&Material::Specialty(material.clone()));
                SpecialtyAggregated {
                    material: material.clone(),
                    required,
                    owned,
                    remain: required as i64 - owned as i64,
                }
            })
            .collect();
        result.sort_by(|a, b| b.remain.cmp(&a.remain));
        result
    }

    fn aggregate_bosses(
        &self,
        boss_materials: &HashMap<BossMaterial, u32>,
        inventory: &impl InventoryLookup,
    ) -> Vec<BossMaterialAggregated> {
        let mut result: Vec<BossMaterialAggregated> = boss_materials
            .iter()
            .map(|(material, &required)| {
                let owned = inventory.owned_count(&Material::Boss(material.clone()));
                BossMaterialAggregated {
                    material: material.clone(),
                    required,
                    owned,
                    remain: required as i64 - owned as i64,
                }
            })
            .collect();
        result.sort_by(|a, b| b.remain.cmp(&a.remain));
        result
    }
}

/// 三档折算: 9·高 + 3·中 + 低
fn weighted3(low: u32, mid: u32, high: u32) -> i64 {
    9 * high as i64 + 3 * mid as i64 + low as i64
}

/// 四档折算 (突破石): 27·最高 + 9·高 + 3·中 + 低
fn weighted4(low: u32, mid: u32, high: u32, highest: u32) -> i64 {
    27 * highest as i64 + 9 * high as i64 + 3 * mid as i64 + low as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn mob(name: &str, mob_name: &str, rarity: u8) -> MobMaterial {
        MobMaterial {
            name: name.into(),
            mob_name: mob_name.into(),
            rarity,
        }
    }

    fn weekly(name: &str, boss_name: &str) -> WeeklyMaterial {
        WeeklyMaterial {
            name: name.into(),
            boss_name: boss_name.into(),
        }
    }

    fn talent(name: &str, region: Region, weekday: TalentWeekday, rarity: u8) -> TalentMaterial {
        TalentMaterial {
            name: name.into(),
            region,
            weekday,
            rarity,
        }
    }

    fn stone(name: &str, element: Element, rarity: u8) -> Stone {
        Stone {
            name: name.into(),
            element,
            rarity,
        }
    }

    fn empty_inventory() -> HashMap<Material, u32> {
        HashMap::new()
    }

    // ==========================================
    // 怪物掉落聚合
    // ==========================================

    #[test]
    fn test_mob_grouping_and_equivalent_weights() {
        let mut required = RequiredMaterials::new();
        required.mob_materials.insert(mob("破损的面具", "丘丘人", 1), 18);
        required.mob_materials.insert(mob("污秽的面具", "丘丘人", 2), 30);
        required.mob_materials.insert(mob("不祥的面具", "丘丘人", 3), 36);

        let aggregated =
            MaterialsAggregator::new().aggregate(&required, &empty_inventory());

        assert_eq!(aggregated.mob_materials.len(), 1);
        let group = &aggregated.mob_materials[0];
        assert_eq!(group.mob_name, "丘丘人");
        assert_eq!(group.required_1, 18);
        assert_eq!(group.required_2, 30);
        assert_eq!(group.required_3, 36);
        // 9×36 + 3×30 + 18
        assert_eq!(group.equivalent, 432);
        // 空库存: 缺口等于需求折算
        assert_eq!(group.equivalent_remain, 432);
    }

    #[test]
    fn test_mob_ranking_descending_by_remain() {
        let slime_1 = mob("史莱姆凝液", "史莱姆", 1);
        let hilichurl_1 = mob("破损的面具", "丘丘人", 1);

        let mut required = RequiredMaterials::new();
        required.mob_materials.insert(slime_1.clone(), 10);
        required.mob_materials.insert(hilichurl_1.clone(), 25);

        let aggregated =
            MaterialsAggregator::new().aggregate(&required, &empty_inventory());

        // 缺口 25 的组排在缺口 10 的组之前
        assert_eq!(aggregated.mob_materials[0].mob_name, "丘丘人");
        assert_eq!(aggregated.mob_materials[1].mob_name, "史莱姆");
    }

    #[test]
    fn test_overstocked_group_sorts_after_positive_remain() {
        let slime_1 = mob("史莱姆凝液", "史莱姆", 1);
        let hilichurl_1 = mob("破损的面具", "丘丘人", 1);

        let mut required = RequiredMaterials::new();
        required.mob_materials.insert(slime_1.clone(), 5);
        required.mob_materials.insert(hilichurl_1.clone(), 100);

        // 史莱姆超储 → 负缺口
        let mut inventory = HashMap::new();
        inventory.insert(Material::Mob(slime_1), 50u32);

        let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

        assert_eq!(aggregated.mob_materials[0].mob_name, "丘丘人");
        assert_eq!(aggregated.mob_materials[0].equivalent_remain, 100);
        assert_eq!(aggregated.mob_materials[1].mob_name, "史莱姆");
        // 5 - 50 = -45, 不截断为 0
        assert_eq!(aggregated.mob_materials[1].equivalent_remain, -45);
    }

    #[test]
    fn test_mob_absent_tier_resolves_to_zero() {
        // 只有 2 档有需求: 1/3 档材料缺位但不失败
        let mut required = RequiredMaterials::new();
        required.mob_materials.insert(mob("污秽的面具", "丘丘人", 2), 12);

        let aggregated =
            MaterialsAggregator::new().aggregate(&required, &empty_inventory());

        let group = &aggregated.mob_materials[0];
        assert!(group.material_1.is_none());
        assert!(group.material_3.is_none());
        assert_eq!(group.required_1, 0);
        assert_eq!(group.required_3, 0);
        assert_eq!(group.equivalent, 36); // 3×12
    }

    // ==========================================
    // 周本材料聚合
    // ==========================================

    #[test]
    fn test_weekly_grouping_equal_weights_and_padding() {
        let mut required = RequiredMaterials::new();
        required.weekly_materials.insert(weekly("东风的吐息", "风魔龙"), 6);
        required.weekly_materials.insert(weekly("东风之翎", "风魔龙"), 3);

        let mut inventory = HashMap::new();
        inventory.insert(Material::Weekly(weekly("东风的吐息", "风魔龙")), 2u32);

        let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

        assert_eq!(aggregated.weekly_materials.len(), 1);
        let group = &aggregated.weekly_materials[0];
        assert_eq!(group.boss_name, "风魔龙");
        assert!(group.material_1.is_some());
        assert!(group.material_2.is_some());
        assert!(group.material_3.is_none());
        // 等权: equivalent = 6 + 3, 无品质乘数
        assert_eq!(group.equivalent, 9);
        assert_eq!(group.equivalent_remain, 7); // 9 - 2
    }

    // ==========================================
    // 天赋书聚合
    // ==========================================

    #[test]
    fn test_talent_region_buckets_and_weights() {
        let teaching = talent("「抗争」的教导", Region::Mondstadt, TalentWeekday::Tuesday, 2);
        let guide = talent("「抗争」的指引", Region::Mondstadt, TalentWeekday::Tuesday, 3);
        let philosophy = talent("「抗争」的哲学", Region::Mondstadt, TalentWeekday::Tuesday, 4);
        let liyue_guide = talent("「黄金」的指引", Region::Liyue, TalentWeekday::Wednesday, 3);

        let mut required = RequiredMaterials::new();
        required.talent_materials.insert(teaching, 9);
        required.talent_materials.insert(guide, 63);
        required.talent_materials.insert(philosophy.clone(), 66);
        required.talent_materials.insert(liyue_guide, 10);

        let mut inventory = HashMap::new();
        inventory.insert(Material::Talent(philosophy), 6u32);

        let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

        assert_eq!(aggregated.talent_materials.len(), 2);

        // 蒙德: 周二桶 9×66 + 3×63 + 9 = 792, 其余桶为 0
        let mondstadt = aggregated
            .talent_materials
            .iter()
            .find(|r| r.region == Region::Mondstadt)
            .unwrap();
        assert_eq!(mondstadt.monday.equivalent, 0);
        assert_eq!(mondstadt.tuesday.equivalent, 792);
        assert_eq!(mondstadt.wednesday.equivalent, 0);
        assert_eq!(mondstadt.equivalent, 792);
        // 库存 6 本哲学 → 缺口 792 - 9×6
        assert_eq!(mondstadt.equivalent_remain, 738);

        // 璃月: 周三桶 3×10
        let liyue = aggregated
            .talent_materials
            .iter()
            .find(|r| r.region == Region::Liyue)
            .unwrap();
        assert_eq!(liyue.wednesday.equivalent, 30);
        assert_eq!(liyue.equivalent, 30);

        // 地区排序: 蒙德缺口大,排前
        assert_eq!(aggregated.talent_materials[0].region, Region::Mondstadt);
    }

    // ==========================================
    // 突破石聚合
    // ==========================================

    #[test]
    fn test_stone_grouping_four_tier_weights() {
        let mut required = RequiredMaterials::new();
        required.stones.insert(stone("自由的青金", Element::Anemo, 2), 1);
        required.stones.insert(stone("自由的青金断片", Element::Anemo, 3), 9);
        required.stones.insert(stone("自由的青金块", Element::Anemo, 4), 9);
        required.stones.insert(stone("自由的青金石", Element::Anemo, 5), 6);

        let aggregated =
            MaterialsAggregator::new().aggregate(&required, &empty_inventory());

        assert_eq!(aggregated.stones.len(), 1);
        let group = &aggregated.stones[0];
        assert_eq!(group.element, Element::Anemo);
        // 27×6 + 9×9 + 3×9 + 1
        assert_eq!(group.equivalent, 271);
        assert_eq!(group.equivalent_remain, 271);
    }

    #[test]
    fn test_stone_groups_ranked_across_elements() {
        let mut required = RequiredMaterials::new();
        required.stones.insert(stone("自由的青金石", Element::Anemo, 5), 1);
        required.stones.insert(stone("最胜紫晶石", Element::Electro, 5), 6);

        let aggregated =
            MaterialsAggregator::new().aggregate(&required, &empty_inventory());

        assert_eq!(aggregated.stones[0].element, Element::Electro);
        assert_eq!(aggregated.stones[1].element, Element::Anemo);
    }

    // ==========================================
    // 特产 / Boss 材料聚合
    // ==========================================

    #[test]
    fn test_specialty_and_boss_remain_netting() {
        let dandelion = Specialty {
            name: "蒲公英籽".into(),
        };
        let cecilia = Specialty {
            name: "塞西莉亚花".into(),
        };
        let hurricane_seed = BossMaterial {
            name: "飓风之种".into(),
        };

        let mut required = RequiredMaterials::new();
        required.specialties.insert(dandelion.clone(), 168);
        required.specialties.insert(cecilia.clone(), 30);
        required.boss_materials.insert(hurricane_seed.clone(), 46);

        let mut inventory = HashMap::new();
        inventory.insert(Material::Specialty(cecilia.clone()), 100u32);
        inventory.insert(Material::Boss(hurricane_seed), 50u32);

        let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

        // 蒲公英缺 168, 塞西莉亚超储 -70 → 蒲公英排前
        assert_eq!(aggregated.specialties[0].material, dandelion);
        assert_eq!(aggregated.specialties[0].remain, 168);
        assert_eq!(aggregated.specialties[1].material, cecilia);
        assert_eq!(aggregated.specialties[1].remain, -70);

        // Boss 材料: 46 - 50 = -4
        assert_eq!(aggregated.boss_materials[0].remain, -4);
        assert_eq!(aggregated.boss_materials[0].owned, 50);
    }

    #[test]
    fn test_empty_required_yields_empty_aggregation() {
        let aggregated = MaterialsAggregator::new()
            .aggregate(&RequiredMaterials::new(), &empty_inventory());
        assert!(aggregated.mob_materials.is_empty());
        assert!(aggregated.weekly_materials.is_empty());
        assert!(aggregated.talent_materials.is_empty());
        assert!(aggregated.stones.is_empty());
        assert!(aggregated.specialties.is_empty());
        assert!(aggregated.boss_materials.is_empty());
    }
}
