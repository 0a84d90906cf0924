//! 渲染模块：会员卡片与名录区块的标记生成
pub mod markup;
pub mod social;
pub mod card;
pub mod page;

// 导出核心接口
pub use self::markup::{Element, Node, escape_attr, escape_text};
pub use self::social::{ensure_url_protocol, platform_meta, PlatformMeta};
pub use self::card::{render_card, placeholder_svg};
pub use self::page::{
    category_dom_id, nodes_to_html, render_error_panel, render_filter_buttons, render_flat,
    render_grouped, EMPTY_MESSAGE,
};
