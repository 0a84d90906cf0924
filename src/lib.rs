//! member-directory - 会员名录：产业分类、会员卡片渲染与分类筛选

// 导出全局错误类型
pub use self::error::{DirectoryError, DirResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, DirectoryConfig, MountPoints};

// 导出分类模块核心接口
pub use self::category::{Category, CategoryClassifier, ClassifySource};

// 导出会员模块核心接口
pub use self::member::{Contact, Member, MemberId, MemberNormalizer, MemberRecord, SocialEntry};

// 导出名录模块核心接口
pub use self::directory::{
    build_directory, group_and_order, CardView, CategoryGroup, DirectoryController,
    DirectoryLoader, FilterKey, RenderedDirectory, ViewState,
};

// 导出渲染模块核心接口
pub use self::render::{ensure_url_protocol, render_card, Element, Node};

// 导出提取与适配模块核心接口
pub use self::extractor::HtmlExtractor;
pub use self::adapter::PageAdapter;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod category;
pub mod member;
pub mod directory;
pub mod render;
pub mod extractor;
pub mod adapter;
