//! The `ember check` command.
//! `ember check` 命令。

use super::{read_source, report};
use crate::output;
use ember_lexer::{Lexer, LexerConfig};

/// Lex a file and report whether it is lexically valid.
/// 对文件进行词法分析并报告其是否有效。
pub fn run(file: &str, config: LexerConfig, verbose: bool) -> Result<(), String> {
    let source = read_source(file)?;

    let mut count = 0usize;
    for token in Lexer::with_config(&source, config) {
        token.map_err(|err| report(&source, file, &err))?;
        count += 1;
    }

    if verbose {
        output::info(&format!("Lexed {count} token(s)"));
    }

    output::success("OK - No errors found");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn check(contents: &str, config: LexerConfig) -> Result<(), String> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.em");
        fs::write(&path, contents).unwrap();
        run(&path.to_string_lossy(), config, false)
    }

    #[test]
    fn test_check_valid_source() {
        assert!(check("if x => 'yes' else 'no' # done", LexerConfig::default()).is_ok());
        assert!(check("", LexerConfig::default()).is_ok());
    }

    #[test]
    fn test_check_reports_lexical_error() {
        assert_eq!(
            check("let s = 'ok' $", LexerConfig::default()),
            Err("lexical error".to_string())
        );
    }

    #[test]
    fn test_check_uses_config() {
        assert!(check("'open", LexerConfig::default()).is_ok());
        assert!(check("'open", LexerConfig::default().strict_strings(true)).is_err());
    }
}
