//! Ember CLI - command line access to the Ember lexer.
//! Ember CLI - Ember 词法分析器的命令行界面。

mod commands;
mod config;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "ember")]
#[command(author, version, about = "Ember - tokenize Ember source files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file overriding the lexer tables. / 覆盖词法表的 JSON 文件。
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a file. / 打印文件的 token。
    Tokens {
        /// The file to tokenize. / 要分析的文件。
        file: String,

        /// Print a JSON array instead of one token per line. / 输出 JSON 数组。
        #[arg(long)]
        json: bool,
    },

    /// Check that a file is lexically valid. / 检查文件的词法是否有效。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = config::load(cli.config.as_deref())
        .map_err(|e| e.to_string())
        .and_then(|config| match cli.command {
            Commands::Tokens { file, json } => {
                commands::tokens::run(&file, config, json, cli.verbose)
            }
            Commands::Check { file } => commands::check::run(&file, config, cli.verbose),
        });

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
