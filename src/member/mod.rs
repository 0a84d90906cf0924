//! 会员模块：原始记录模型与正规化
pub mod model;
pub mod normalize;

// 导出核心接口
pub use self::model::{Contact, Member, MemberDocument, MemberId, MemberRecord, SocialEntry};
pub use self::normalize::{
    MemberNormalizer, normalize_photo_path, slugify, DEFAULT_DESCRIPTION,
};
