// ==========================================
// 聚合排序引擎集成测试
// ==========================================
// 职责: 通过公开 API 验证多组、多地区、多元素的聚合与排序
// 场景: 手工构造需求映射 + 库存净额
// ==========================================

use genshin_materials::domain::types::{Element, Region, TalentWeekday};
use genshin_materials::{
    Material, MaterialsAggregator, MobMaterial, RequiredMaterials, Stone, TalentMaterial,
    WeeklyMaterial,
};
use std::collections::HashMap;

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

fn talent(name: &str, region: Region, weekday: TalentWeekday, rarity: u8) -> TalentMaterial {
    TalentMaterial {
        name: name.into(),
        region,
        weekday,
        rarity,
    }
}

// ==========================================
// 多组排序
// ==========================================

#[test]
fn test_mob_groups_ranked_with_inventory_netting() {
    let mut required = RequiredMaterials::new();
    // 丘丘人: 需求折算 9×10 = 90
    required.mob_materials.insert(mob("不祥的面具", "丘丘人", 3), 10);
    // 史莱姆: 需求折算 3×40 = 120, 但库存抵扣后 120 - 3×30 = 30
    let slime_2 = mob("史莱姆清", "史莱姆", 2);
    required.mob_materials.insert(slime_2.clone(), 40);
    // 盗宝团: 需求折算 20, 无库存
    required.mob_materials.insert(mob("寻宝鸦印", "盗宝团", 1), 20);

    let mut inventory: HashMap<Material, u32> = HashMap::new();
    inventory.insert(Material::Mob(slime_2), 30);

    let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

    // 缺口降序: 丘丘人 90 > 史莱姆 30 > 盗宝团 20
    let order: Vec<&str> = aggregated
        .mob_materials
        .iter()
        .map(|g| g.mob_name.as_str())
        .collect();
    assert_eq!(order, vec!["丘丘人", "史莱姆", "盗宝团"]);

    // equivalent 不受库存影响, equivalent_remain 受
    let slime = &aggregated.mob_materials[1];
    assert_eq!(slime.equivalent, 120);
    assert_eq!(slime.equivalent_remain, 30);
}

#[test]
fn test_talent_regions_ranked_across_weekday_buckets() {
    let mut required = RequiredMaterials::new();
    // 蒙德: 周二桶 4档×2 → 18
    required.talent_materials.insert(
        talent("「抗争」的哲学", Region::Mondstadt, TalentWeekday::Tuesday, 4),
        2,
    );
    // 璃月: 周一桶 3档×3 (9) + 周三桶 2档×4 (4) → 13
    required.talent_materials.insert(
        talent("「繁荣」的指引", Region::Liyue, TalentWeekday::Monday, 3),
        3,
    );
    required.talent_materials.insert(
        talent("「黄金」的教导", Region::Liyue, TalentWeekday::Wednesday, 2),
        4,
    );

    let aggregated =
        MaterialsAggregator::new().aggregate(&required, &HashMap::<Material, u32>::new());

    assert_eq!(aggregated.talent_materials.len(), 2);
    assert_eq!(aggregated.talent_materials[0].region, Region::Mondstadt);
    assert_eq!(aggregated.talent_materials[0].equivalent, 18);

    let liyue = &aggregated.talent_materials[1];
    assert_eq!(liyue.region, Region::Liyue);
    assert_eq!(liyue.monday.equivalent, 9);
    assert_eq!(liyue.tuesday.equivalent, 0);
    assert_eq!(liyue.wednesday.equivalent, 4);
    assert_eq!(liyue.equivalent, 13);
    // 周一桶只有 3 档: 2/4 档补位 None
    assert!(liyue.monday.material_2.is_none());
    assert!(liyue.monday.material_3.is_some());
    assert!(liyue.monday.material_4.is_none());
}

#[test]
fn test_weekly_groups_ranked_by_plain_sum() {
    let mut required = RequiredMaterials::new();
    let breath = WeeklyMaterial {
        name: "东风的吐息".into(),
        boss_name: "风魔龙".into(),
    };
    let ring = WeeklyMaterial {
        name: "北风的环".into(),
        boss_name: "北风的王狼".into(),
    };
    required.weekly_materials.insert(breath.clone(), 4);
    required.weekly_materials.insert(ring.clone(), 12);

    // 北风的王狼库存充足 → 负缺口, 排序落后
    let mut inventory: HashMap<Material, u32> = HashMap::new();
    inventory.insert(Material::Weekly(ring), 20);

    let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

    assert_eq!(aggregated.weekly_materials[0].boss_name, "风魔龙");
    assert_eq!(aggregated.weekly_materials[0].equivalent_remain, 4);
    assert_eq!(aggregated.weekly_materials[1].boss_name, "北风的王狼");
    assert_eq!(aggregated.weekly_materials[1].equivalent_remain, -8);
}

#[test]
fn test_stone_equivalent_uses_deeper_weighting() {
    let mut required = RequiredMaterials::new();
    required.stones.insert(
        Stone {
            name: "自由的青金石".into(),
            element: Element::Anemo,
            rarity: 5,
        },
        2,
    );
    required.stones.insert(
        Stone {
            name: "自由的青金".into(),
            element: Element::Anemo,
            rarity: 2,
        },
        5,
    );

    let aggregated =
        MaterialsAggregator::new().aggregate(&required, &HashMap::<Material, u32>::new());

    // 27×2 + 5 (2档权重为 1)
    assert_eq!(aggregated.stones[0].equivalent, 59);
    // 缺档 (3/4) 补位 None 且计 0
    assert!(aggregated.stones[0].material_3.is_none());
    assert!(aggregated.stones[0].material_4.is_none());
    assert_eq!(aggregated.stones[0].required_3, 0);
    assert_eq!(aggregated.stones[0].required_4, 0);
}
