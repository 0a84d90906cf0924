//! 名录区块渲染：筛选按钮、分组视图、平铺视图、错误面板

use super::card::render_card;
use super::markup::{Element, Node};
use crate::category::Category;
use crate::directory::group::CategoryGroup;
use crate::directory::state::{FilterKey, ViewState};
use crate::error::DirectoryError;
use crate::member::{slugify, Member};

/// 平铺视图无会员时的提示
pub const EMPTY_MESSAGE: &str = "目前沒有符合條件的會員。";
/// 「全部显示」按钮文字
pub const ALL_BUTTON_LABEL: &str = "全部顯示";
/// 载入失败提示
pub const LOAD_ERROR_TITLE: &str = "載入會員資料時發生錯誤";
pub const LOAD_ERROR_HINT: &str =
    "提示：如果使用本地檔案開啟，請使用 HTTP 伺服器（如 VS Code Live Server）或部署到 GitHub Pages";

/// 分类区块识别码
pub fn category_dom_id(category: Category) -> String {
    slugify("category", category.label())
}

/// 筛选按钮：全部显示 + 各分类（恰有一个 active）
pub fn render_filter_buttons(categories: &[Category], active: FilterKey) -> Vec<Node> {
    std::iter::once(FilterKey::All)
        .chain(categories.iter().copied().map(FilterKey::Category))
        .map(|key| {
            let label = match key {
                FilterKey::All => ALL_BUTTON_LABEL,
                FilterKey::Category(category) => category.label(),
            };
            Node::from(
                Element::new("button")
                    .class(&["filter-btn", if key == active { "active" } else { "" }])
                    .attr("data-category", key.data_key())
                    .text(label),
            )
        })
        .collect()
}

/// 分组视图
pub fn render_grouped(groups: &[CategoryGroup<'_>], state: &ViewState) -> Vec<Node> {
    groups
        .iter()
        .map(|group| Node::from(render_category_section(group, state)))
        .collect()
}

fn render_category_section(group: &CategoryGroup<'_>, state: &ViewState) -> Element {
    let category = group.category;
    let dom_id = category_dom_id(category);
    let expanded = state.is_category_expanded(category);
    let state_class = if expanded { "expanded" } else { "" };

    let header = Element::new("div")
        .class(&["category-header"])
        .child(
            Element::new("div")
                .class(&["category-header-left"])
                .child(Element::new("h3").class(&["category-title"]).text(category.label()))
                .child(
                    Element::new("span")
                        .class(&["category-count"])
                        .text(format!("{} 位會員", group.len())),
                ),
        )
        .child(
            Element::new("button")
                .class(&["category-toggle-btn", state_class])
                .attr("aria-label", "展開/摺疊分類")
                .attr("data-target", dom_id.clone())
                .child(
                    Element::new("span")
                        .class(&["toggle-icon"])
                        .text(if expanded { "▲" } else { "▼" }),
                ),
        );

    let cards = group.members.iter().map(|member| {
        Node::from(render_card(member, state.grouped_card_view(category, &member.id)))
    });

    Element::new("div")
        .class(&["category-section"])
        .attr("data-category", category.label())
        .child(header)
        .child(
            Element::new("div")
                .class(&["category-members-grid", state_class])
                .id(format!("{}-members", dom_id))
                .children(cards),
        )
}

/// 平铺视图（单一分类）
pub fn render_flat(members: &[&Member], state: &ViewState) -> Vec<Node> {
    if members.is_empty() {
        return vec![
            Element::new("p")
                .class(&["members-empty"])
                .text(EMPTY_MESSAGE)
                .into(),
        ];
    }
    members
        .iter()
        .map(|member| Node::from(render_card(member, state.flat_card_view(&member.id))))
        .collect()
}

/// 载入失败面板
pub fn render_error_panel(error: &DirectoryError) -> Node {
    Element::new("div")
        .class(&["members-load-error"])
        .attr("style", "text-align: center; color: #888; grid-column: 1 / -1; padding: 2rem;")
        .child(
            Element::new("p")
                .attr("style", "margin-bottom: 1rem; color: #D4AF37; font-size: 1.1rem;")
                .text(LOAD_ERROR_TITLE),
        )
        .child(
            Element::new("p")
                .attr("style", "font-size: 0.9rem; color: #666; margin-bottom: 0.5rem;")
                .text(error.to_string()),
        )
        .child(
            Element::new("p")
                .attr("style", "font-size: 0.85rem; color: #555; margin-top: 1rem;")
                .text(LOAD_ERROR_HINT),
        )
        .into()
}

/// 节点序列 -> HTML
pub fn nodes_to_html(nodes: &[Node]) -> String {
    nodes.iter().map(Node::to_html).collect()
}
