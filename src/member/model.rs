//! 会员数据模型定义
//! MemberRecord 对应 JSON 原始结构，Member 为正规化后的只读记录

use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::Category;

/// 会员资料文件（`{ "members": [...] }`）
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MemberDocument {
    pub members: Vec<MemberRecord>,
}

/// 单一会员原始记录（从 members.json 解析）
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,

    // 以下字段宽松解析：类型不符时视为空
    #[serde(default)]
    pub services: Option<Value>,
    #[serde(default)]
    pub hashtags: Option<Value>,
    #[serde(default)]
    pub social: Option<Value>,
    #[serde(default)]
    pub contact: Option<Value>,
}

/// 卡片识别码（`member-` + 名称slug）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 社群连结（保持原始文件中的顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialEntry {
    pub platform: String,
    pub value: String,
}

/// 联络方式（各字段独立可选）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub line: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.line.is_none()
    }
}

/// 正规化后的会员
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub industry: Option<String>,
    pub category: Category,
    pub short_description: String,
    pub full_description: String,
    pub services: Vec<String>,
    pub hashtags: Vec<String>,
    pub social: Vec<SocialEntry>,
    pub contact: Option<Contact>,
    pub photo: Option<String>,
}

impl Member {
    /// 名称首字（占位图用）
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
