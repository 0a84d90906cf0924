//! 产业分类数据模型
//! 固定的九个顶层分类，序列化为中文标签

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DirectoryError;

/// 顶层产业分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    BusinessConsulting,
    BusinessMarketing,
    InformationSystems,
    EngineeringRenovation,
    HealthBeauty,
    LeisureEducation,
    InvestmentFinance,
    FoodDining,
    Other,
}

impl Category {
    /// 全部分类（宣告顺序）
    pub const ALL: [Category; 9] = [
        Category::BusinessConsulting,
        Category::BusinessMarketing,
        Category::InformationSystems,
        Category::EngineeringRenovation,
        Category::HealthBeauty,
        Category::LeisureEducation,
        Category::InvestmentFinance,
        Category::FoodDining,
        Category::Other,
    ];

    /// 中文标签
    pub fn label(self) -> &'static str {
        match self {
            Category::BusinessConsulting => "企業顧問",
            Category::BusinessMarketing => "企業行銷",
            Category::InformationSystems => "資訊系統",
            Category::EngineeringRenovation => "工程裝修",
            Category::HealthBeauty => "健康美麗",
            Category::LeisureEducation => "休閒教育",
            Category::InvestmentFinance => "投資理財",
            Category::FoodDining => "美食餐飲",
            Category::Other => "其他",
        }
    }

    /// 是否参与分组展示与筛选按钮
    pub fn is_listed(self) -> bool {
        self != Category::Other
    }

    /// 按标签查找
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s.trim())
            .ok_or_else(|| DirectoryError::InvalidInput(format!("未知分類：{}", s)))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Category::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("未知分類：{}", label)))
    }
}
