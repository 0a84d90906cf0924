//! 产业分类器
//! 精确对照 -> 关键字规则 -> 预设分类，依序判定，第一个命中者为准

use tracing::{debug, warn};

use super::keyword::{match_keywords, KEYWORD_RULES};
use super::mapping::lookup_exact;
use super::model::Category;

/// 无法判定时的预设分类
pub const FALLBACK_CATEGORY: Category = Category::BusinessConsulting;

/// 判定来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifySource {
    ExactMatch,
    Keyword(usize),
    Default,
}

/// 产业分类器
pub struct CategoryClassifier;

impl CategoryClassifier {
    /// 依产业标签判定分类（总是返回固定集合中的一个分类）
    pub fn classify(industry: Option<&str>) -> Category {
        Self::classify_with_source(industry).0
    }

    /// 判定分类并返回判定来源
    pub fn classify_with_source(industry: Option<&str>) -> (Category, ClassifySource) {
        let label = industry.unwrap_or("");

        // 1. 精确对照
        if let Some(category) = lookup_exact(label) {
            return (category, ClassifySource::ExactMatch);
        }

        // 2. 关键字规则
        if let Some((idx, category)) = match_keywords(label) {
            debug!(
                "產業「{}」由關鍵字規則#{}判定為「{}」，規則={}",
                label,
                idx,
                category,
                KEYWORD_RULES[idx].condition.describe()
            );
            return (category, ClassifySource::Keyword(idx));
        }

        // 3. 预设分类
        warn!("未找到產業 \"{}\" 的分類，預設歸類為「{}」", label, FALLBACK_CATEGORY);
        (FALLBACK_CATEGORY, ClassifySource::Default)
    }
}
