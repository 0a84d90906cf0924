//! 分类模块：产业标签到顶层分类的判定
pub mod model;
pub mod mapping;
pub mod keyword;
pub mod classifier;

// 导出核心接口
pub use self::model::Category;
pub use self::mapping::{lookup_exact, exact_pairs, EXACT_TABLE};
pub use self::keyword::{Condition, KeywordRule, KEYWORD_RULES, match_keywords};
pub use self::classifier::{CategoryClassifier, ClassifySource, FALLBACK_CATEGORY};
