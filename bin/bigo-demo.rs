use std::path::PathBuf;

use bigo::demo::DemoRegistry;
use bigo::{BigoConfig, OutputFormatter, Result, SuiteReport};
use clap::Parser;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "bigo.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Run a single demonstration by name (default: run all)
    #[arg(short, long)]
    demo: Option<String>,

    /// Export the suite report to this JSON file (overrides config file)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = BigoConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        println!("📝 You can edit this file and rerun the demonstrations.");
        return Ok(());
    }

    // 加载配置
    let mut config = BigoConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }
    if let Some(json) = args.json {
        config.output.json_file = Some(json);
    }
    if args.no_color {
        config.output.colored = false;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging);

    if !config.output.colored {
        colored::control::set_override(false);
    }

    info!("🚀 Starting bigo demonstrations...");
    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    // 打印配置摘要
    config.print_summary();

    let registry = DemoRegistry::new();

    let suite = match &args.demo {
        Some(name) => {
            if !registry.has_demo(name) {
                eprintln!(
                    "{}",
                    OutputFormatter::format_error(&format!(
                        "unknown demonstration '{}'. Available: {}",
                        name,
                        registry.demo_names().join(", ")
                    ))
                );
                std::process::exit(1);
            }
            let mut suite = SuiteReport::new();
            suite.push(registry.execute(name, &config)?);
            suite
        }
        None => registry.run_all(&config)?,
    };

    // 导出JSON报告
    if let Some(path) = &config.output.json_file {
        suite.save_to_file(path)?;
        info!("💾 Report written to {}", path.display());
    }

    info!("✅ All demonstrations completed");

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &bigo::config::LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match config.output.as_str() {
        "file" => {
            if let Some(log_file) = &config.log_file {
                // 确保日志目录存在
                if let Some(parent) = log_file.parent() {
                    let _ = std::fs::create_dir_all(parent);
                }

                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_file)
                    .expect("Failed to open log file");

                tracing_subscriber::registry()
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(file)
                            .with_target(false),
                    )
                    .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                    .init();
            }
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }
}
