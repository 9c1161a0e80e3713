// ==========================================
// 原神素材规划系统 - 演示入口
// ==========================================
// 用途: 用内置示例阵容跑一遍 计算 → 聚合 流程,
//       以 JSON 输出聚合结果 (展示层契约的最直接示例)
// ==========================================

use anyhow::Result;
use chrono::{Datelike, Local};
use genshin_materials::domain::types::{Element, Region, TalentWeekday};
use genshin_materials::{
    BossMaterial, CharacterDefinition, CharacterProgress, Material, MaterialsAggregator,
    MaterialsCalculator, MobMaterial, Specialty, Stone, TalentMaterial, WeeklyMaterial,
};
use std::collections::HashMap;

fn main() -> Result<()> {
    // 初始化日志系统
    genshin_materials::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 养成材料计算核心", genshin_materials::APP_NAME);
    tracing::info!("系统版本: {}", genshin_materials::VERSION);
    tracing::info!("==================================================");

    let today = Local::now().date_naive().weekday();
    match TalentWeekday::available_on(today) {
        Some(set) => tracing::info!("今日 ({:?}) 可刷取第 {} 套天赋书", today, set.index()),
        None => tracing::info!("今日 ({:?}) 全部天赋书开放", today),
    }

    let roster = sample_roster()?;
    let inventory = sample_inventory();

    tracing::info!("示例阵容: {} 名角色", roster.len());

    // 计算 → 聚合
    let required = MaterialsCalculator::new().calculate_all(&roster);
    let aggregated = MaterialsAggregator::new().aggregate(&required, &inventory);

    tracing::info!(
        mob_groups = aggregated.mob_materials.len(),
        talent_regions = aggregated.talent_materials.len(),
        stone_elements = aggregated.stones.len(),
        "聚合完成"
    );

    println!("{}", serde_json::to_string_pretty(&aggregated)?);
    Ok(())
}

// ==========================================
// 示例数据
// ==========================================

/// 两名示例角色: 低练度的琴 + 半成品的刻晴
fn sample_roster() -> Result<Vec<(CharacterProgress, CharacterDefinition)>> {
    let jean = CharacterDefinition::new(
        "琴",
        Region::Mondstadt,
        Element::Anemo,
        TalentWeekday::Tuesday,
        Some(WeeklyMaterial {
            name: "东风的吐息".into(),
            boss_name: "风魔龙".into(),
        }),
        Some(BossMaterial {
            name: "飓风之种".into(),
        }),
        Some(Specialty {
            name: "蒲公英籽".into(),
        }),
        vec![
            talent_book("「抗争」的教导", Region::Mondstadt, TalentWeekday::Tuesday, 2),
            talent_book("「抗争」的指引", Region::Mondstadt, TalentWeekday::Tuesday, 3),
            talent_book("「抗争」的哲学", Region::Mondstadt, TalentWeekday::Tuesday, 4),
        ],
        anemo_stones(),
        Some("丘丘人".into()),
        vec![
            mob_drop("破损的面具", "丘丘人", 1),
            mob_drop("污秽的面具", "丘丘人", 2),
            mob_drop("不祥的面具", "丘丘人", 3),
        ],
    );

    let keqing = CharacterDefinition::new(
        "刻晴",
        Region::Liyue,
        Element::Electro,
        TalentWeekday::Monday,
        Some(WeeklyMaterial {
            name: "北风的环".into(),
            boss_name: "北风的王狼".into(),
        }),
        Some(BossMaterial {
            name: "雷光棱镜".into(),
        }),
        Some(Specialty {
            name: "霓裳花".into(),
        }),
        vec![
            talent_book("「繁荣」的教导", Region::Liyue, TalentWeekday::Monday, 2),
            talent_book("「繁荣」的指引", Region::Liyue, TalentWeekday::Monday, 3),
            talent_book("「繁荣」的哲学", Region::Liyue, TalentWeekday::Monday, 4),
        ],
        electro_stones(),
        Some("盗宝团".into()),
        vec![
            mob_drop("寻宝鸦印", "盗宝团", 1),
            mob_drop("藏银鸦印", "盗宝团", 2),
            mob_drop("攫金鸦印", "盗宝团", 3),
        ],
    );

    Ok(vec![
        (CharacterProgress::new(1, false, [1, 1, 1], [6, 6, 6])?, jean),
        (CharacterProgress::new(70, true, [6, 6, 6], [9, 9, 9])?, keqing),
    ])
}

/// 示例库存: 部分材料有存货
fn sample_inventory() -> HashMap<Material, u32> {
    let mut inventory = HashMap::new();
    inventory.insert(
        Material::Mob(mob_drop("破损的面具", "丘丘人", 1)),
        40u32,
    );
    inventory.insert(
        Material::Talent(talent_book(
            "「繁荣」的指引",
            Region::Liyue,
            TalentWeekday::Monday,
            3,
        )),
        20u32,
    );
    inventory.insert(
        Material::Specialty(Specialty {
            name: "霓裳花".into(),
        }),
        100u32,
    );
    inventory
}

fn talent_book(name: &str, region: Region, weekday: TalentWeekday, rarity: u8) -> TalentMaterial {
    TalentMaterial {
        name: name.into(),
        region,
        weekday,
        rarity,
    }
}

fn mob_drop(name: &str, mob_name: &str, rarity: u8) -> MobMaterial {
    MobMaterial {
        name: name.into(),
        mob_name: mob_name.into(),
        rarity,
    }
}

fn anemo_stones() -> Vec<Stone> {
    vec![
        stone("自由的青金", Element::Anemo, 2),
        stone("自由的青金断片", Element::Anemo, 3),
        stone("自由的青金块", Element::Anemo, 4),
        stone("自由的青金石", Element::Anemo, 5),
    ]
}

fn electro_stones() -> Vec<Stone> {
    vec![
        stone("最胜紫晶", Element::Electro, 2),
        stone("最胜紫晶断片", Element::Electro, 3),
        stone("最胜紫晶块", Element::Electro, 4),
        stone("最胜紫晶石", Element::Electro, 5),
    ]
}

fn stone(name: &str, element: Element, rarity: u8) -> Stone {
    Stone {
        name: name.into(),
        element,
        rarity,
    }
}
