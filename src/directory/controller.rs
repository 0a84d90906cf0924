//! 名录控制器：持有会员资料与展示状态，整合载入、分组、筛选、切换与渲染
use tracing::{debug, error};

use super::group::{group_and_order, members_in, ordered_categories, CategoryGroup};
use super::loader::DirectoryLoader;
use super::state::{FilterKey, ViewState};
use crate::category::Category;
use crate::config::DirectoryConfig;
use crate::error::{DirResult, DirectoryError};
use crate::member::{Member, MemberId};
use crate::render::{
    nodes_to_html, render_error_panel, render_filter_buttons, render_flat, render_grouped,
};

/// 渲染结果（各容器的 HTML 片段）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDirectory {
    pub filter_buttons: String,
    pub members_grid: String,
    pub error_panel: Option<String>,
}

impl RenderedDirectory {
    /// 载入失败：只有错误面板，没有任何卡片
    pub fn load_failure(err: &DirectoryError) -> Self {
        Self {
            filter_buttons: String::new(),
            members_grid: String::new(),
            error_panel: Some(render_error_panel(err).to_html()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_panel.is_some()
    }
}

/// 名录控制器
#[derive(Debug, Clone)]
pub struct DirectoryController {
    members: Vec<Member>,
    categories: Vec<Category>,
    state: ViewState,
}

impl DirectoryController {
    /// 以已正规化的会员建立（资料此后不再变动）
    pub fn new(members: Vec<Member>) -> Self {
        let categories = ordered_categories(&members);
        debug!("名錄初始化：會員數={}，分類={:?}", members.len(), categories);
        Self {
            members,
            categories,
            state: ViewState::default(),
        }
    }

    /// 载入资料并建立控制器
    pub async fn load(config: &DirectoryConfig) -> DirResult<Self> {
        let members = DirectoryLoader::load(config).await?;
        Ok(Self::new(members))
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// 筛选按钮上的分类（人数由多到少，不含「其他」）
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_and_order(&self.members)
    }

    /// 切换筛选：全部 -> 分组视图；单一分类 -> 平铺视图（整体重绘）
    pub fn filter_by_category(&mut self, filter: FilterKey) {
        debug!("切換篩選：{}", filter);
        self.state.set_filter(filter);
    }

    /// 切换卡片展开；卡片不在当前视图中时返回 None
    pub fn toggle_card_expansion(&mut self, id: &MemberId) -> Option<bool> {
        let member = self.members.iter().find(|m| &m.id == id)?;
        let category = member.category;
        match self.state.filter() {
            FilterKey::All if category.is_listed() => {
                Some(self.state.toggle_grouped_card(category, id))
            }
            FilterKey::Category(active) if active == category => {
                Some(self.state.toggle_flat_card(id))
            }
            _ => None,
        }
    }

    /// 切换分类折叠；仅分组视图中存在的分类有效
    pub fn toggle_category_expansion(&mut self, category: Category) -> Option<bool> {
        if self.state.filter() != FilterKey::All || !self.categories.contains(&category) {
            return None;
        }
        Some(self.state.toggle_category(category))
    }

    /// 依当前状态渲染
    pub fn render(&self) -> RenderedDirectory {
        let filter = self.state.filter();
        let filter_buttons = nodes_to_html(&render_filter_buttons(&self.categories, filter));
        let grid = match filter {
            FilterKey::All => render_grouped(&self.groups(), &self.state),
            FilterKey::Category(category) => {
                render_flat(&members_in(&self.members, category), &self.state)
            }
        };
        RenderedDirectory {
            filter_buttons,
            members_grid: nodes_to_html(&grid),
            error_panel: None,
        }
    }
}

/// 页面初始化：载入资料并渲染；载入失败时渲染错误面板
pub async fn build_directory(config: &DirectoryConfig, filter: FilterKey) -> RenderedDirectory {
    match DirectoryController::load(config).await {
        Ok(mut controller) => {
            controller.filter_by_category(filter);
            controller.render()
        }
        Err(err) => {
            error!("載入會員資料失敗：{}", err);
            RenderedDirectory::load_failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::group::tests::member;
    use crate::extractor::HtmlExtractor;

    fn visible_cards(html: &str) -> Vec<String> {
        HtmlExtractor::new()
            .extract(html)
            .with_class("member-card")
            .into_iter()
            .filter(|card| card.is_visible())
            .filter_map(|card| card.attr("data-member-id").map(str::to_string))
            .collect()
    }

    fn sample() -> DirectoryController {
        DirectoryController::new(vec![
            member("A1", "企業顧問"),
            member("A2", "企業顧問"),
            member("A3", "企業顧問"),
            member("B1", "美食餐飲"),
            member("B2", "美食餐飲"),
            member("Z", "其他"),
        ])
    }

    #[test]
    fn test_focus_mode_scoped_to_group() {
        let mut c = sample();
        let a2 = MemberId::new("member-a2");
        assert_eq!(c.toggle_card_expansion(&a2), Some(true));
        let visible = visible_cards(&c.render().members_grid);
        assert_eq!(visible, vec!["member-a2", "member-b1", "member-b2"]);

        assert_eq!(c.toggle_card_expansion(&a2), Some(false));
        let visible = visible_cards(&c.render().members_grid);
        assert_eq!(visible, vec!["member-a1", "member-a2", "member-a3", "member-b1", "member-b2"]);
    }

    #[test]
    fn test_other_category_not_rendered() {
        let c = sample();
        assert_eq!(c.categories(), &[Category::BusinessConsulting, Category::FoodDining]);
        let rendered = c.render();
        assert!(!rendered.members_grid.contains("member-z"));
        assert!(!rendered.filter_buttons.contains("其他"));
        assert_eq!(c.members().len(), 6);
    }

    #[test]
    fn test_toggle_unknown_or_offscreen_card() {
        let mut c = sample();
        assert_eq!(c.toggle_card_expansion(&MemberId::new("member-nobody")), None);
        assert_eq!(c.toggle_card_expansion(&MemberId::new("member-z")), None);
        c.filter_by_category(FilterKey::Category(Category::FoodDining));
        assert_eq!(c.toggle_card_expansion(&MemberId::new("member-a1")), None);
    }

    #[test]
    fn test_flat_view_has_no_focus_mode() {
        let mut c = sample();
        c.filter_by_category(FilterKey::Category(Category::BusinessConsulting));
        assert_eq!(c.toggle_card_expansion(&MemberId::new("member-a1")), Some(true));
        let rendered = c.render();
        assert_eq!(visible_cards(&rendered.members_grid), vec!["member-a1", "member-a2", "member-a3"]);
        assert!(!rendered.members_grid.contains("category-section"));
        let page = HtmlExtractor::new().extract(&rendered.filter_buttons);
        let active = page.first_with_class("active").unwrap();
        assert_eq!(active.attr("data-category"), Some("企業顧問"));
    }

    #[test]
    fn test_filter_resets_expansion() {
        let mut c = sample();
        c.toggle_card_expansion(&MemberId::new("member-b1"));
        c.toggle_category_expansion(Category::BusinessConsulting);
        c.filter_by_category(FilterKey::All);
        let page = HtmlExtractor::new().extract(&c.render().members_grid);
        assert_eq!(page.with_class("member-card").iter().filter(|e| e.is_visible()).count(), 5);
        assert!(page.element_by_id("category-企業顧問-members").unwrap().has_class("expanded"));
    }

    #[test]
    fn test_category_toggle_independent_of_cards() {
        let mut c = sample();
        c.toggle_card_expansion(&MemberId::new("member-a1"));
        assert_eq!(c.toggle_category_expansion(Category::FoodDining), Some(false));
        let page = HtmlExtractor::new().extract(&c.render().members_grid);
        assert!(!page.element_by_id("category-美食餐飲-members").unwrap().has_class("expanded"));
        assert!(page.element_by_id("category-企業顧問-members").unwrap().has_class("expanded"));
        let a1 = page.with_class("member-card").into_iter().find(|e| e.attr("data-member-id") == Some("member-a1")).unwrap();
        assert!(a1.has_class("expanded-full"));
        assert_eq!(c.toggle_category_expansion(Category::Other), None);
        assert_eq!(c.toggle_category_expansion(Category::FoodDining), Some(true));
    }

    #[test]
    fn test_empty_filter_result() {
        let mut c = sample();
        c.filter_by_category(FilterKey::Category(Category::InvestmentFinance));
        let rendered = c.render();
        assert!(rendered.members_grid.contains(crate::render::EMPTY_MESSAGE));
        // 没有对应按钮，因此没有任何按钮为 active
        let page = HtmlExtractor::new().extract(&rendered.filter_buttons);
        assert!(page.first_with_class("active").is_none());
    }

    #[tokio::test]
    async fn test_build_directory_failure_renders_panel() {
        let config = crate::config::ConfigManager::custom()
            .data_source("/no/such/dir/members.json")
            .build();
        let rendered = build_directory(&config, FilterKey::All).await;
        assert!(rendered.is_error());
        assert!(rendered.members_grid.is_empty());
        assert!(rendered.filter_buttons.is_empty());
    }
}
