// ==========================================
// 原神素材规划系统 - 领域类型定义
// ==========================================
// 依据: 游戏静态目录数据 (地区/元素/天赋体系)
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 地区 (Region)
// ==========================================
// 天赋书按地区划分,每个地区三套书 (周一/周二/周三)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Mondstadt, // 蒙德
    Liyue,     // 璃月
    Inazuma,   // 稻妻
    Sumeru,    // 须弥
    Fontaine,  // 枫丹
    Natlan,    // 纳塔
    Nodkrai,   // 挪德卡莱
    Snezhnaya, // 至冬
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Mondstadt => write!(f, "MONDSTADT"),
            Region::Liyue => write!(f, "LIYUE"),
            Region::Inazuma => write!(f, "INAZUMA"),
            Region::Sumeru => write!(f, "SUMERU"),
            Region::Fontaine => write!(f, "FONTAINE"),
            Region::Natlan => write!(f, "NATLAN"),
            Region::Nodkrai => write!(f, "NODKRAI"),
            Region::Snezhnaya => write!(f, "SNEZHNAYA"),
        }
    }
}

// ==========================================
// 元素 (Element)
// ==========================================
// 突破石按元素划分,4 个品质档 (2/3/4/5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Anemo,   // 风
    Geo,     // 岩
    Electro, // 雷
    Dendro,  // 草
    Hydro,   // 水
    Pyro,    // 火
    Cryo,    // 冰
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Anemo => write!(f, "ANEMO"),
            Element::Geo => write!(f, "GEO"),
            Element::Electro => write!(f, "ELECTRO"),
            Element::Dendro => write!(f, "DENDRO"),
            Element::Hydro => write!(f, "HYDRO"),
            Element::Pyro => write!(f, "PYRO"),
            Element::Cryo => write!(f, "CRYO"),
        }
    }
}

// ==========================================
// 天赋书开放日 (Talent Weekday)
// ==========================================
// 每个地区的三套天赋书按星期轮换:
// 周一/周四 = 第 1 套, 周二/周五 = 第 2 套, 周三/周六 = 第 3 套
// 聚合层以 1/2/3 作为桶索引
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalentWeekday {
    Monday,    // 第 1 套 (周一/周四)
    Tuesday,   // 第 2 套 (周二/周五)
    Wednesday, // 第 3 套 (周三/周六)
}

impl TalentWeekday {
    /// 桶索引 (1..=3),与聚合层的星期分桶对齐
    pub fn index(&self) -> u8 {
        match self {
            TalentWeekday::Monday => 1,
            TalentWeekday::Tuesday => 2,
            TalentWeekday::Wednesday => 3,
        }
    }

    /// 从桶索引解析 (1..=3)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(TalentWeekday::Monday),
            2 => Some(TalentWeekday::Tuesday),
            3 => Some(TalentWeekday::Wednesday),
            _ => None,
        }
    }

    /// 本套天赋书在游戏内可刷取的两个星期日
    pub fn farmable_days(&self) -> [Weekday; 2] {
        match self {
            TalentWeekday::Monday => [Weekday::Mon, Weekday::Thu],
            TalentWeekday::Tuesday => [Weekday::Tue, Weekday::Fri],
            TalentWeekday::Wednesday => [Weekday::Wed, Weekday::Sat],
        }
    }

    /// 指定星期日当天可刷取的天赋书套 (周日全开放,返回 None 表示全部)
    pub fn available_on(day: Weekday) -> Option<Self> {
        match day {
            Weekday::Mon | Weekday::Thu => Some(TalentWeekday::Monday),
            Weekday::Tue | Weekday::Fri => Some(TalentWeekday::Tuesday),
            Weekday::Wed | Weekday::Sat => Some(TalentWeekday::Wednesday),
            Weekday::Sun => None,
        }
    }
}

impl fmt::Display for TalentWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalentWeekday::Monday => write!(f, "MONDAY"),
            TalentWeekday::Tuesday => write!(f, "TUESDAY"),
            TalentWeekday::Wednesday => write!(f, "WEDNESDAY"),
        }
    }
}

// ==========================================
// 天赋槽位 (Talent Kind)
// ==========================================
// 每个角色固定 3 个天赋,独立升级 (1-10 级)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalentKind {
    NormalAttack, // 普通攻击
    Skill,        // 元素战技
    Burst,        // 元素爆发
}

impl TalentKind {
    /// 三个天赋槽位,与 talent_levels 数组下标对齐
    pub const ALL: [TalentKind; 3] = [
        TalentKind::NormalAttack,
        TalentKind::Skill,
        TalentKind::Burst,
    ];
}

impl fmt::Display for TalentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TalentKind::NormalAttack => write!(f, "NORMAL_ATTACK"),
            TalentKind::Skill => write!(f, "SKILL"),
            TalentKind::Burst => write!(f, "BURST"),
        }
    }
}

// ==========================================
// 材料大类 (Material Kind)
// ==========================================
// 六类材料,各自独立分组与聚合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialKind {
    Mob,       // 小怪掉落 (按怪物分组, 品质 1-3)
    Boss,      // 周本外世界 Boss 材料 (无分组)
    Weekly,    // 周本材料 (按周本 Boss 分组)
    Talent,    // 天赋书 (按地区+星期分组, 品质 2-4)
    Stone,     // 元素突破石 (按元素分组, 品质 2-5)
    Specialty, // 地区特产 (无分组)
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialKind::Mob => write!(f, "MOB"),
            MaterialKind::Boss => write!(f, "BOSS"),
            MaterialKind::Weekly => write!(f, "WEEKLY"),
            MaterialKind::Talent => write!(f, "TALENT"),
            MaterialKind::Stone => write!(f, "STONE"),
            MaterialKind::Specialty => write!(f, "SPECIALTY"),
        }
    }
}
