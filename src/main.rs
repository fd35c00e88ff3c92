use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use eval_log_parser::app::App;
use eval_log_parser::config::Config;
use eval_log_parser::logger;

/// 解析评测日志并生成 JSON 文件
#[derive(Parser, Debug)]
#[command(name = "eval_log_parser", version, about = "解析评测日志并生成 JSON 文件")]
struct Cli {
    /// 待解析的日志文件路径
    log_file: PathBuf,

    /// 输出 JSON 文件路径（默认取配置中的 parsed_logs.json）
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();
    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output_file));

    // 初始化并运行应用
    App::initialize(config)?.run(&cli.log_file, &output)?;

    Ok(())
}
