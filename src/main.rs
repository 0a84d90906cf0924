//! member-directory 命令行：产生静态会员名录页面、查询产业分类

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use member_directory::{
    build_directory, CategoryClassifier, ClassifySource, ConfigManager, FilterKey, PageAdapter,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "member-directory", version, about = "會員名錄產生器")]
struct Cli {
    /// 输出详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 载入会员资料并填入宿主页面
    Render {
        /// 会员资料（本地路径或 http(s) URL）
        #[arg(short, long, default_value = member_directory::config::DEFAULT_DATA_SOURCE)]
        data: String,
        /// 宿主页面（需含 #filterButtons 与 #membersGrid）
        #[arg(short, long)]
        template: PathBuf,
        /// 初始筛选（all 或分类名称）
        #[arg(short, long, default_value = "all")]
        filter: FilterKey,
        /// 输出文件，缺省时写到标准输出
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// HTTP 超时（秒）
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// 查询产业标签的分类
    Classify {
        /// 产业标签
        #[arg(required = true)]
        industries: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { data, template, filter, out, timeout } => {
            let config = ConfigManager::custom()
                .data_source(data)
                .http_timeout(timeout)
                .build();

            let host = tokio::fs::read_to_string(&template)
                .await
                .with_context(|| format!("無法讀取宿主頁面 {}", template.display()))?;

            let rendered = build_directory(&config, filter).await;
            if rendered.is_error() {
                warn!("會員資料載入失敗，頁面僅包含錯誤面板");
            }

            let page = PageAdapter::mount(&host, &rendered, &config.mounts)
                .context("宿主頁面掛載失敗")?;

            match out {
                Some(path) => {
                    tokio::fs::write(&path, page)
                        .await
                        .with_context(|| format!("無法寫入 {}", path.display()))?;
                    info!("名錄頁面已輸出：{}", path.display());
                }
                None => println!("{}", page),
            }
        }
        Commands::Classify { industries } => {
            for industry in industries {
                let (category, source) = CategoryClassifier::classify_with_source(Some(&industry));
                let how = match source {
                    ClassifySource::ExactMatch => "對照表".to_string(),
                    ClassifySource::Keyword(idx) => format!("關鍵字規則#{}", idx),
                    ClassifySource::Default => "預設".to_string(),
                };
                println!("{}\t{}\t{}", industry, category, how);
            }
        }
    }

    Ok(())
}
