//! The `ember tokens` command.
//! `ember tokens` 命令。

use super::{read_source, report};
use crate::output;
use ember_lexer::{Lexer, LexerConfig, Token};
use std::io::{self, Write};

/// Print every token of a file, one per line or as a JSON array.
/// 打印文件中的所有 token，每行一个或输出为 JSON 数组。
pub fn run(file: &str, config: LexerConfig, json: bool, verbose: bool) -> Result<(), String> {
    let source = read_source(file)?;

    let tokens = Lexer::with_config(&source, config)
        .tokenize()
        .map_err(|err| report(&source, file, &err))?;

    write_tokens(&tokens, json, io::stdout().lock())
        .map_err(|e| format!("cannot write tokens: {}", e))?;

    if verbose {
        output::info(&format!("{} token(s)", tokens.len()));
    }
    Ok(())
}

/// Write tokens as `Kind(value)` lines, or as a pretty JSON array.
/// 以 `Kind(value)` 行或格式化的 JSON 数组写出 token。
pub fn write_tokens(tokens: &[Token], json: bool, mut out: impl Write) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, tokens)?;
        writeln!(out)?;
    } else {
        for token in tokens {
            writeln!(out, "{token}")?;
        }
    }
    Ok(())
}
