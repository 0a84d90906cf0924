//! 名录展示状态
//! 筛选、卡片展开（聚焦模式）、分类折叠，全部是纯状态转移，渲染时据此推导可见性

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::DirectoryError;
use crate::member::MemberId;

/// 筛选键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    Category(Category),
}

impl FilterKey {
    /// 按钮上的 data-category 值
    pub fn data_key(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.data_key())
    }
}

impl FromStr for FilterKey {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "全部" | "全部顯示" => Ok(FilterKey::All),
            other => other.parse().map(FilterKey::Category),
        }
    }
}

/// 单张卡片的展示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardView {
    pub expanded: bool,
    pub hidden: bool,
}

/// 聚焦容器（一个分类分组）
///
/// 展开任一卡片时，容器内未展开的卡片全部隐藏；
/// 收合任一卡片时，容器内所有卡片恢复显示（其余已展开者保持展开）。
#[derive(Debug, Clone, Default)]
pub struct FocusContainer {
    expanded: HashSet<MemberId>,
    suppressed: bool,
}

impl FocusContainer {
    /// 切换卡片，返回切换后的展开状态
    pub fn toggle(&mut self, id: &MemberId) -> bool {
        if self.expanded.remove(id) {
            self.suppressed = false;
            false
        } else {
            self.expanded.insert(id.clone());
            self.suppressed = true;
            true
        }
    }

    pub fn card_view(&self, id: &MemberId) -> CardView {
        let expanded = self.expanded.contains(id);
        CardView {
            expanded,
            hidden: self.suppressed && !expanded,
        }
    }
}

/// 名录整体展示状态
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    filter: FilterKey,
    // 分组视图：每个分类一个聚焦容器
    containers: HashMap<Category, FocusContainer>,
    // 平铺视图：卡片不在分组容器内，只切换自身
    flat_expanded: HashSet<MemberId>,
    collapsed_categories: HashSet<Category>,
}

impl ViewState {
    pub fn filter(&self) -> FilterKey {
        self.filter
    }

    /// 切换筛选（整体重绘，所有展开状态归零）
    pub fn set_filter(&mut self, filter: FilterKey) {
        *self = Self {
            filter,
            ..Self::default()
        };
    }

    /// 切换分组视图中的卡片
    pub fn toggle_grouped_card(&mut self, category: Category, id: &MemberId) -> bool {
        self.containers.entry(category).or_default().toggle(id)
    }

    /// 切换平铺视图中的卡片
    pub fn toggle_flat_card(&mut self, id: &MemberId) -> bool {
        if self.flat_expanded.remove(id) {
            false
        } else {
            self.flat_expanded.insert(id.clone());
            true
        }
    }

    /// 切换分类折叠，返回切换后是否展开
    pub fn toggle_category(&mut self, category: Category) -> bool {
        if self.collapsed_categories.remove(&category) {
            true
        } else {
            self.collapsed_categories.insert(category);
            false
        }
    }

    pub fn is_category_expanded(&self, category: Category) -> bool {
        !self.collapsed_categories.contains(&category)
    }

    pub fn grouped_card_view(&self, category: Category, id: &MemberId) -> CardView {
        self.containers
            .get(&category)
            .map(|container| container.card_view(id))
            .unwrap_or_default()
    }

    pub fn flat_card_view(&self, id: &MemberId) -> CardView {
        CardView {
            expanded: self.flat_expanded.contains(id),
            hidden: false,
        }
    }
}
