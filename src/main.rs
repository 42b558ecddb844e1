// 图鉴命令行入口
// 开发心理：简洁的启动流程，专注于查询和文本渲染
// 任何抓取失败都渲染为说明文字，进程只在配置错误时失败退出

use clap::{Parser, Subcommand};
use log::{error, info};

use pokedex::utils::text::{capitalize_first, format_dex_number};
use pokedex::{ApiConfig, PokedexClient, Result, TransitionRecord};

#[derive(Parser)]
#[command(name = "pokedex", version, about = "PokéAPI图鉴查询工具")]
struct Cli {
    /// TOML配置文件路径，缺省时读取环境变量和默认值
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 查看单个宝可梦的详情和进化路线
    Show {
        /// 图鉴编号
        id: u32,
    },
    /// 列出一页图鉴条目
    List {
        /// 起始偏移
        #[arg(long, default_value_t = 0)]
        offset: u32,
        /// 每页条数
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[tokio::main]
async fn main() {
    // 初始化日志系统
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("图鉴查询失败: {}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ApiConfig::load_from_file(path)?,
        None => ApiConfig::from_env(),
    };

    let client = PokedexClient::new(config)?;

    match cli.command {
        Command::Show { id } => show_entry(&client, id).await,
        Command::List { offset, limit } => list_entries(&client, offset, limit).await,
    }
}

async fn show_entry(client: &PokedexClient, id: u32) -> Result<()> {
    let entry = client.get_entry(id).await?;

    println!("{} {}", format_dex_number(entry.number), entry.display_name());
    println!(
        "属性: {}",
        entry
            .types
            .iter()
            .map(|t| capitalize_first(t))
            .collect::<Vec<_>>()
            .join(" / ")
    );
    println!("分类: {}", entry.genus);
    println!("身高: {:.1} m", entry.height_m);
    println!("体重: {:.1} kg", entry.weight_kg);
    println!("特性: {}", entry.abilities);
    println!("性别比例: {}", entry.gender.display());
    println!("蛋群: {}", entry.egg_groups);
    println!("孵化群: {}", entry.egg_cycle);

    // 进化链抓取失败只影响这一段展示，不影响已输出的详情
    match client.get_evolution_records(id).await {
        Ok(records) => print_evolution_path(&records, &entry.name),
        Err(e) => {
            info!("进化链不可用: {}", e);
            println!("\n{}", e.user_message());
        }
    }

    Ok(())
}

fn print_evolution_path(records: &[TransitionRecord], current: &str) {
    println!("\n进化路线:");

    if records.is_empty() {
        println!("该宝可梦没有进化形态。");
        return;
    }

    for record in records {
        // 当前查看的宝可梦在序列里高亮标记
        let marker = if record.is_from(current) { "»" } else { " " };
        let requirement = if record.requirement.is_empty() {
            String::new()
        } else {
            format!(" - {}", capitalize_first(&record.requirement))
        };

        println!(
            "{} {} → {} (Trigger: {}){}",
            marker,
            capitalize_first(&record.from),
            capitalize_first(&record.to),
            record.trigger,
            requirement
        );
    }
}

async fn list_entries(client: &PokedexClient, offset: u32, limit: Option<u32>) -> Result<()> {
    let limit = limit.unwrap_or_else(|| client.config().page_limit);
    let entries = client.list_entries(offset, limit).await?;

    for entry in &entries {
        println!(
            "{} {:<12} {}",
            format_dex_number(entry.number),
            capitalize_first(&entry.name),
            entry
                .types
                .iter()
                .map(|t| capitalize_first(t))
                .collect::<Vec<_>>()
                .join(" / ")
        );
    }

    info!("共列出 {} 个条目", entries.len());
    Ok(())
}
