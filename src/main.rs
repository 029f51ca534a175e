use anyhow::Result;
use clap::Parser;
use std::process;

use appsweep_lib::commands;
use appsweep_lib::modules::common::logging;

#[derive(Parser, Debug)]
#[command(name = "appsweep")]
#[command(about = "Windows 软件卸载与残留清理工具", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        commands::Command::List(cmd) => commands::list::execute(cmd).await,
        commands::Command::Uninstall(cmd) => commands::uninstall::execute(cmd).await,
        commands::Command::Clean(cmd) => commands::clean::execute(cmd).await,
    };

    match result {
        Ok(_) => {}
        Err(e) => {
            eprintln!("错误: {}", e);
            process::exit(1);
        }
    }

    Ok(())
}
