//! 全局配置管理,存储所有可配置项

/// 默认会员资料位置（相对路径）
pub const DEFAULT_DATA_SOURCE: &str = "data/members.json";

/// 宿主页面上的容器ID（名录只负责填充，不负责创建）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoints {
    // 筛选按钮容器
    pub filter_buttons: String,
    // 会员卡片容器
    pub members_grid: String,
    // 错误面板容器，None时错误面板写入卡片容器
    pub error_region: Option<String>,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            filter_buttons: "filterButtons".to_string(),
            members_grid: "membersGrid".to_string(),
            error_region: None,
        }
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    // 会员资料来源（相对路径或 http(s) URL）
    pub data_source: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 宿主页面容器
    pub mounts: MountPoints,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            http_timeout: 30,
            mounts: MountPoints::default(),
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> DirectoryConfig {
        DirectoryConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: DirectoryConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_source(mut self, source: impl Into<String>) -> Self {
        self.config.data_source = source.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn mounts(mut self, mounts: MountPoints) -> Self {
        self.config.mounts = mounts;
        self
    }

    pub fn build(self) -> DirectoryConfig {
        self.config
    }
}
