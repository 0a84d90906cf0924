//! 会员记录正规化
//! 分类回填、照片路径修正、简介回退链、列表清理

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use super::model::{Contact, Member, MemberId, MemberRecord, SocialEntry};
use crate::category::{Category, CategoryClassifier};

/// 简介缺省文字
pub const DEFAULT_DESCRIPTION: &str = "專業服務提供商";
/// 简短介绍截取长度（字元）
pub const SHORT_DESCRIPTION_CHARS: usize = 30;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 旧照片目录 -> 现行目录
const LEGACY_PHOTO_DIRS: &[(&str, &str)] = &[
    ("../會員照片/", "會員照片/"),
    ("../images/members/", "images/members/"),
];

/// 生成识别码：空白串替换为连字号后转小写
pub fn slugify(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, WHITESPACE_RUN.replace_all(name, "-").to_lowercase())
}

/// 修正照片路径：去掉开头的 `../`，再改写旧目录前缀
pub fn normalize_photo_path(photo: &str) -> String {
    let mut path = photo.strip_prefix("../").unwrap_or(photo).to_string();
    for (legacy, current) in LEGACY_PHOTO_DIRS {
        if path.contains(legacy) {
            path = path.replacen(legacy, current, 1);
        }
    }
    path
}

/// 非空字串（空字串视为缺省）
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 简短介绍：shortDescription -> description 前30字 + "..." -> 缺省文字
pub fn short_description(record: &MemberRecord) -> String {
    if let Some(short) = present(&record.short_description) {
        return short.to_string();
    }
    match present(&record.description) {
        Some(desc) => {
            let head: String = desc.chars().take(SHORT_DESCRIPTION_CHARS).collect();
            format!("{}...", head)
        }
        None => DEFAULT_DESCRIPTION.to_string(),
    }
}

/// 详细介绍：fullDescription -> description -> 缺省文字
pub fn full_description(record: &MemberRecord) -> String {
    present(&record.full_description)
        .or_else(|| present(&record.description))
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string()
}

/// 清理字串列表：仅保留字串项，去空白后非空者
pub fn clean_strings(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 解析社群连结（保持文件顺序，丢弃非字串或空白值）
pub fn social_entries(value: Option<&Value>) -> Vec<SocialEntry> {
    let Some(Value::Object(map)) = value else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(platform, v)| {
            let trimmed = v.as_str()?.trim();
            (!trimmed.is_empty()).then(|| SocialEntry {
                platform: platform.clone(),
                value: trimmed.to_string(),
            })
        })
        .collect()
}

/// 解析联络方式（全部缺省时返回 None）
pub fn contact(value: Option<&Value>) -> Option<Contact> {
    let Some(Value::Object(map)) = value else {
        return None;
    };
    let field = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let contact = Contact {
        email: field("email"),
        phone: field("phone"),
        line: field("line"),
    };
    (!contact.is_empty()).then_some(contact)
}

/// 解析分类：已给出且属于固定集合者直接采用，否则交由分类器回填
pub fn resolve_category(record: &MemberRecord) -> Category {
    match present(&record.category).map(str::trim) {
        Some(label) => match Category::from_label(label) {
            Some(category) => category,
            None => {
                warn!("會員「{}」的分類「{}」不在固定分類中，改由產業判定", record.name, label);
                CategoryClassifier::classify(record.industry.as_deref())
            }
        },
        None => CategoryClassifier::classify(record.industry.as_deref()),
    }
}

/// 会员正规化器
pub struct MemberNormalizer;

impl MemberNormalizer {
    /// 单笔原始记录 -> 正规化会员
    pub fn normalize(record: MemberRecord) -> Member {
        let category = resolve_category(&record);
        let photo = present(&record.photo).map(normalize_photo_path);
        if let (Some(raw), Some(fixed)) = (record.photo.as_deref(), photo.as_deref()) {
            if raw != fixed {
                debug!("照片路徑修正：{} -> {}", raw, fixed);
            }
        }

        Member {
            id: MemberId::new(slugify("member", &record.name)),
            short_description: short_description(&record),
            full_description: full_description(&record),
            services: clean_strings(record.services.as_ref()),
            hashtags: clean_strings(record.hashtags.as_ref()),
            social: social_entries(record.social.as_ref()),
            contact: contact(record.contact.as_ref()),
            industry: record.industry.filter(|s| !s.trim().is_empty()),
            name: record.name,
            category,
            photo,
        }
    }

    /// 批量正规化
    pub fn normalize_all(records: Vec<MemberRecord>) -> Vec<Member> {
        records.into_iter().map(Self::normalize).collect()
    }
}
