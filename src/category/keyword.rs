//! 关键字规则
//! 精确对照失败时，按宣告顺序逐条测试，第一条成立的规则决定分类

use once_cell::sync::Lazy;

use super::model::Category;

/// 关键字条件（作用于已转小写的产业标签）
#[derive(Debug, Clone)]
pub enum Condition {
    Contains(&'static str), // 包含子字串
    Any(Vec<Condition>), // 任一成立
    All(Vec<Condition>), // 全部成立
    Not(Box<Condition>), // 取反
}

impl Condition {
    /// 判断条件是否成立
    pub fn is_match(&self, lowered: &str) -> bool {
        match self {
            Condition::Contains(word) => lowered.contains(word),
            Condition::Any(conds) => conds.iter().any(|c| c.is_match(lowered)),
            Condition::All(conds) => conds.iter().all(|c| c.is_match(lowered)),
            Condition::Not(cond) => !cond.is_match(lowered),
        }
    }

    /// 规则描述（日志用）
    pub fn describe(&self) -> String {
        match self {
            Condition::Contains(word) => format!("\"{}\"", word),
            Condition::Any(conds) => join(conds, " | "),
            Condition::All(conds) => join(conds, " & "),
            Condition::Not(cond) => format!("!{}", cond.describe()),
        }
    }
}

fn join(conds: &[Condition], sep: &str) -> String {
    let parts: Vec<String> = conds.iter().map(Condition::describe).collect();
    format!("({})", parts.join(sep))
}

fn has(word: &'static str) -> Condition {
    Condition::Contains(word)
}

fn any_of(words: &[&'static str]) -> Condition {
    Condition::Any(words.iter().map(|w| has(*w)).collect())
}

fn lacks(word: &'static str) -> Condition {
    Condition::Not(Box::new(has(word)))
}

/// 单条关键字规则
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub category: Category,
    pub condition: Condition,
}

/// 有序规则表
pub static KEYWORD_RULES: Lazy<Vec<KeywordRule>> = Lazy::new(|| {
    vec![
        KeywordRule {
            category: Category::BusinessConsulting,
            condition: Condition::Any(vec![
                has("顧問"),
                Condition::All(vec![has("設計"), lacks("包裝"), lacks("插畫")]),
            ]),
        },
        KeywordRule {
            category: Category::BusinessMarketing,
            condition: any_of(&["行銷", "設計", "創意", "包裝", "插畫", "團體服"]),
        },
        KeywordRule {
            category: Category::InformationSystems,
            condition: any_of(&["系統", "資訊", "網站", "line"]),
        },
        KeywordRule {
            category: Category::EngineeringRenovation,
            condition: Condition::Any(vec![
                has("工程"),
                has("裝修"),
                Condition::All(vec![has("設計"), any_of(&["商空", "住宅", "策展"])]),
            ]),
        },
        KeywordRule {
            category: Category::HealthBeauty,
            condition: any_of(&["健康", "美麗", "保險", "營養", "醫療", "健身", "寵物", "共享"]),
        },
        KeywordRule {
            category: Category::LeisureEducation,
            condition: any_of(&["教育", "教學", "輔導"]),
        },
        KeywordRule {
            category: Category::InvestmentFinance,
            condition: any_of(&["投資", "理財", "黃金", "交易", "ai程式"]),
        },
        KeywordRule {
            category: Category::FoodDining,
            condition: any_of(&["餐飲", "美食", "茶葉", "烘焙", "麵包", "食物"]),
        },
    ]
});

/// 返回第一条成立规则的（序号，分类）
pub fn match_keywords(industry: &str) -> Option<(usize, Category)> {
    let lowered = industry.to_lowercase();
    KEYWORD_RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.condition.is_match(&lowered))
        .map(|(idx, rule)| (idx, rule.category))
}
