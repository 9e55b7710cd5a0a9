//! Panel CLI Tool
//!
//! 管理面板命令行工具：保存 API Key、健康检查、查看用户、封禁/解封用户

mod commands;
mod utils;

use clap::{Parser, Subcommand};

use utils::OutputFormat;

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(version, about = "Bot 管理面板命令行工具", long_about = None)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true, default_value = "config/panel.json")]
    config: String,

    /// Admin API 地址（覆盖配置文件中的 baseUrl）
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// API Key 管理
    #[command(subcommand)]
    Key(KeyCommands),

    /// 服务健康检查
    Health,

    /// 列出用户
    Users {
        /// 返回数量（默认取配置 userListLimit）
        #[arg(short, long)]
        limit: Option<u32>,

        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// 封禁用户
    Ban {
        /// Discord 用户 ID
        user_id: String,

        /// 封禁天数（默认取配置 defaultBanDays，0 表示不设截止时间）
        #[arg(short, long)]
        days: Option<u32>,

        /// 封禁原因
        #[arg(short, long, default_value = "")]
        reason: String,
    },

    /// 解封用户
    Unban {
        /// Discord 用户 ID
        user_id: String,
    },
}

#[derive(Subcommand)]
enum KeyCommands {
    /// 保存 API Key
    Set {
        /// API Key
        value: String,
    },

    /// 显示当前 API Key（脱敏）
    Show,

    /// 清除 API Key
    Clear,
}

#[tokio::main]
async fn main() {
    // 初始化日志（输出到 stderr，stdout 只保留命令结果）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url = cli.base_url.as_deref();

    let result = match cli.command {
        Commands::Key(cmd) => match cmd {
            KeyCommands::Set { value } => commands::key::set(&cli.config, &value),
            KeyCommands::Show => commands::key::show(&cli.config),
            KeyCommands::Clear => commands::key::clear(&cli.config),
        },
        Commands::Health => commands::health::check(&cli.config, base_url).await,
        Commands::Users { limit, format } => {
            commands::users::list(&cli.config, base_url, limit, format).await
        }
        Commands::Ban {
            user_id,
            days,
            reason,
        } => commands::ban::ban(&cli.config, base_url, &user_id, days, &reason).await,
        Commands::Unban { user_id } => {
            commands::ban::unban(&cli.config, base_url, &user_id).await
        }
    };

    if let Err(e) = result {
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}
