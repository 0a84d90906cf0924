//! 名录模块：资料载入、分组排序、展示状态与控制器
pub mod loader;
pub mod group;
pub mod state;
pub mod controller;

// 导出核心接口
pub use self::loader::DirectoryLoader;
pub use self::group::{category_counts, group_and_order, members_in, ordered_categories, CategoryGroup};
pub use self::state::{CardView, FilterKey, FocusContainer, ViewState};
pub use self::controller::{build_directory, DirectoryController, RenderedDirectory};
