//! 产业精确对照表
//! 分类 -> 已知产业标签，优先于关键字规则

use std::collections::HashMap;
use once_cell::sync::Lazy;

use super::model::Category;

/// 对照表原始内容（按分类顺序，重复标签以先出现者为准）
pub const EXACT_TABLE: &[(Category, &[&str])] = &[
    (Category::BusinessConsulting, &[
        "律師", "會計師", "專利商標", "AI商務顧問", "銀行融資顧問", "信託規劃顧問",
        "中小企業顧問", "地政士", "人力媒合平台", "品牌設計", "永續可分解包裝", "包租代管",
        "電子商品設計",
    ]),
    (Category::BusinessMarketing, &[
        "禮贈品", "SEO內容行銷", "自媒體經營", "LINE應用開發", "餐飲行銷整合", "團體服業",
        "創意策劃", "插畫設計", "包裝設計",
    ]),
    (Category::InformationSystems, &[
        "LINE應用開發", "網站創新開發", "資訊弱電系統整合", "機電設計",
    ]),
    (Category::EngineeringRenovation, &[
        "空調工程", "策展規劃設計", "統包工程", "水電工程", "泥作工程", "抗病毒地板",
        "商空設計", "住宅設計", "燈具照明",
    ]),
    (Category::HealthBeauty, &[
        "心靈諮詢", "人壽保險", "產物保險規劃", "營養保健", "手足指甲保健", "醫療輔具",
        "物理治療師", "運動營養師", "健身教練", "寵物營養", "共享空間",
    ]),
    (Category::LeisureEducation, &["魔術方塊教學", "升學輔導顧問"]),
    (Category::InvestmentFinance, &["實體黃金買賣", "AI程式交易"]),
    (Category::FoodDining, &[
        "澎湖特色餐飲", "茶葉盤商", "原型食物料理師", "麵包烘焙業", "堅果烘焙", "無麩質雞蛋糕",
    ]),
    (Category::Other, &[]),
];

/// 产业标签 -> 分类 索引
static EXACT_INDEX: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, industries) in EXACT_TABLE {
        for industry in industries.iter() {
            index.entry(*industry).or_insert(*category);
        }
    }
    index
});

/// 精确查找产业标签
pub fn lookup_exact(industry: &str) -> Option<Category> {
    EXACT_INDEX.get(industry).copied()
}

/// 遍历对照表中每一对（分类，产业）
pub fn exact_pairs() -> impl Iterator<Item = (Category, &'static str)> {
    EXACT_TABLE
        .iter()
        .flat_map(|(category, industries)| industries.iter().map(move |i| (*category, *i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_labels() {
        assert_eq!(lookup_exact("律師"), Some(Category::BusinessConsulting));
        assert_eq!(lookup_exact("水電工程"), Some(Category::EngineeringRenovation));
        assert_eq!(lookup_exact("無麩質雞蛋糕"), Some(Category::FoodDining));
        assert_eq!(lookup_exact("律師 "), None);
    }

    #[test]
    fn test_duplicate_label_keeps_first_category() {
        // LINE應用開發 同时出现在 企業行銷 与 資訊系統
        assert_eq!(lookup_exact("LINE應用開發"), Some(Category::BusinessMarketing));
    }

    #[test]
    fn test_other_has_no_labels() {
        assert!(exact_pairs().all(|(category, _)| category != Category::Other));
    }
}
