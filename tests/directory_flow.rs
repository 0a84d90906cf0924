//! 名录完整流程：载入 -> 分类回填 -> 分组 -> 渲染 -> 切换 -> 挂载

use member_directory::{
    build_directory, Category, ConfigManager, DirectoryController, DirectoryLoader, FilterKey,
    HtmlExtractor, MemberId, MountPoints, PageAdapter,
};

const TWO_MEMBERS: &str = r#"{
  "members": [
    { "name": "好食光", "industry": "烘焙", "category": "美食餐飲", "shortDescription": "手作麵包" },
    { "name": "李律師", "industry": "律師", "social": { "website": "lee-law.tw" } }
  ]
}"#;

fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn grouped_view_from_explicit_and_classified_categories() {
    let members = DirectoryLoader::parse(TWO_MEMBERS).unwrap();
    let controller = DirectoryController::new(members);

    let groups = controller.groups();
    assert_eq!(groups.len(), 2);
    let mut categories: Vec<Category> = groups.iter().map(|g| g.category).collect();
    categories.sort();
    assert_eq!(categories, vec![Category::BusinessConsulting, Category::FoodDining]);
    assert!(groups.iter().all(|g| g.len() == 1));

    let page = HtmlExtractor::new().extract(&controller.render().members_grid);
    assert_eq!(page.with_class("category-section").len(), 2);
    assert_eq!(page.with_class("member-card").len(), 2);
    let link = page.first_with_class("member-social-link").unwrap();
    assert_eq!(link.attr("href"), Some("https://lee-law.tw"));
}

#[test]
fn focus_mode_within_one_group_only() {
    let members = DirectoryLoader::parse(
        r#"{"members": [
            {"name": "c1", "industry": "水電工程"},
            {"name": "c2", "industry": "泥作工程"},
            {"name": "c3", "industry": "空調工程"},
            {"name": "d1", "industry": "茶葉盤商"}
        ]}"#,
    )
    .unwrap();
    let mut controller = DirectoryController::new(members);

    let visible = |controller: &DirectoryController| -> Vec<String> {
        HtmlExtractor::new()
            .extract(&controller.render().members_grid)
            .with_class("member-card")
            .into_iter()
            .filter(|card| card.is_visible())
            .filter_map(|card| card.attr("data-member-id").map(str::to_string))
            .collect()
    };

    let c2 = MemberId::new("member-c2");
    assert_eq!(controller.toggle_card_expansion(&c2), Some(true));
    assert_eq!(visible(&controller), vec!["member-c2", "member-d1"]);

    assert_eq!(controller.toggle_card_expansion(&c2), Some(false));
    assert_eq!(visible(&controller), vec!["member-c1", "member-c2", "member-c3", "member-d1"]);
}

#[tokio::test]
async fn render_page_from_file_into_host() {
    let data = write_temp("flow-members.json", TWO_MEMBERS);
    let config = ConfigManager::custom()
        .data_source(data.to_string_lossy().to_string())
        .build();

    let rendered = build_directory(&config, FilterKey::Category(Category::FoodDining)).await;
    assert!(!rendered.is_error());

    let host = r#"<main><nav id="filterButtons"></nav><section id="membersGrid"></section></main>"#;
    let html = PageAdapter::mount(host, &rendered, &MountPoints::default()).unwrap();
    let page = HtmlExtractor::new().extract(&html);

    let cards = page.with_class("member-card");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].attr("data-member-id"), Some("member-好食光"));
    let active = page.first_with_class("active").unwrap();
    assert_eq!(active.attr("data-category"), Some("美食餐飲"));
    let _ = std::fs::remove_file(data);
}

#[tokio::test]
async fn malformed_document_renders_error_panel_only() {
    let data = write_temp("flow-bad.json", r#"{"items": []}"#);
    let config = ConfigManager::custom()
        .data_source(data.to_string_lossy().to_string())
        .build();

    let rendered = build_directory(&config, FilterKey::All).await;
    assert!(rendered.is_error());

    let host = r#"<div id="filterButtons"></div><div id="membersGrid"></div>"#;
    let html = PageAdapter::mount(host, &rendered, &MountPoints::default()).unwrap();
    assert!(html.contains("找不到 members 陣列"));
    assert!(html.contains("載入會員資料時發生錯誤"));
    assert!(!html.contains("member-card"));
    let _ = std::fs::remove_file(data);
}
