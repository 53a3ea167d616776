//! Parser that consumes the token stream and fills in a `BuildConfig`.
//!
//! One command per logical line:
//!
//! ```text
//! command  ::= String '(' String (',' String)* ')' LineEnd
//! ```
//!
//! `Set*` commands take exactly one parameter and overwrite a scalar
//! field after validation; `Add*` commands take one or more parameters
//! and append them to a list field.  Whatever happens, the rest of the
//! line up to its `LineEnd` is discarded before the next command starts.

use super::lexer::{Token, TokenKind, TokenList};
use super::{Diagnostic, ParseResult};
use crate::config::{
    BuildConfig, BuildType, Compiler, LanguageVersion, OutputType, TargetArch,
};

/// Every command the language knows, resolved once from the name token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    SetProjectName,
    SetCompiler,
    SetLanguageVersion,
    SetTargetArch,
    SetOutputType,
    SetBuildType,
    AddFile,
    AddSourcePath,
    AddConstant,
    AddIncludePath,
    AddLibrary,
    AddObjectFile,
    AddCompilerFlag,
    AddLinkerFlag,
}

impl Command {
    /// Case-sensitive exact match; anything else is an unknown command.
    fn lookup(name: &str) -> Option<Self> {
        match name {
            "SetProjectName" => Some(Self::SetProjectName),
            "SetCompiler" => Some(Self::SetCompiler),
            "SetLanguageVersion" => Some(Self::SetLanguageVersion),
            "SetTargetArch" => Some(Self::SetTargetArch),
            "SetOutputType" => Some(Self::SetOutputType),
            "SetBuildType" => Some(Self::SetBuildType),
            "AddFile" => Some(Self::AddFile),
            "AddSourcePath" => Some(Self::AddSourcePath),
            "AddConstant" => Some(Self::AddConstant),
            "AddIncludePath" => Some(Self::AddIncludePath),
            "AddLibrary" => Some(Self::AddLibrary),
            "AddObjectFile" => Some(Self::AddObjectFile),
            "AddCompilerFlag" => Some(Self::AddCompilerFlag),
            "AddLinkerFlag" => Some(Self::AddLinkerFlag),
            _ => None,
        }
    }
}

pub fn parse(tokens: TokenList) -> ParseResult {
    Parser::new(tokens).parse()
}

struct Parser {
    tokens: TokenList,
    config: BuildConfig,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn new(tokens: TokenList) -> Self {
        Self {
            tokens,
            config: BuildConfig::default(),
            diagnostics: Vec::new(),
        }
    }

    fn parse(mut self) -> ParseResult {
        while let Some(token) = self.tokens.peek() {
            if token.kind == TokenKind::String {
                self.command();
            } else {
                let token = token.clone();
                self.error(&token, "Commands must begin with a string.");
                self.tokens.skip_line();
            }
        }

        ParseResult {
            config: self.config,
            diagnostics: self.diagnostics,
        }
    }

    fn error(&mut self, token: &Token, message: &str) {
        self.diagnostics.push(Diagnostic {
            line: token.line,
            lexeme: token.lexeme.clone(),
            message: message.to_string(),
        });
    }

    fn command(&mut self) {
        let Some(name) = self.tokens.advance() else {
            return;
        };
        match Command::lookup(&name.lexeme) {
            Some(command) => self.apply(command, &name),
            None => {
                self.error(&name, "Unknown command.");
                self.tokens.skip_line();
            }
        }
    }

    fn apply(&mut self, command: Command, name: &Token) {
        match command {
            Command::SetProjectName => {
                // any string is a legal project name
                if let Some(param) = self.simple_command(name) {
                    self.config.project_name = param.lexeme;
                }
            }
            Command::SetCompiler => {
                if let Some(param) = self.simple_command(name) {
                    match Compiler::parse(&param.lexeme) {
                        Some(compiler) => self.config.compiler = compiler,
                        None => self.error(&param, "Invalid compiler."),
                    }
                }
            }
            Command::SetLanguageVersion => {
                if let Some(param) = self.simple_command(name) {
                    match LanguageVersion::parse(&param.lexeme) {
                        Some(version) => self.config.language_version = version,
                        None => self.error(&param, "Invalid language version."),
                    }
                }
            }
            Command::SetTargetArch => {
                if let Some(param) = self.simple_command(name) {
                    match TargetArch::parse(&param.lexeme) {
                        Some(arch) => self.config.target_arch = arch,
                        None => self.error(&param, "Invalid architecture."),
                    }
                }
            }
            Command::SetOutputType => {
                if let Some(param) = self.simple_command(name) {
                    match OutputType::parse(&param.lexeme) {
                        Some(output) => self.config.output_type = output,
                        None => self.error(&param, "Invalid output type."),
                    }
                }
            }
            Command::SetBuildType => {
                if let Some(param) = self.simple_command(name) {
                    match BuildType::parse(&param.lexeme) {
                        Some(build) => self.config.build_type = build,
                        None => self.error(&param, "Invalid build type."),
                    }
                }
            }
            Command::AddFile => self.append(name, |c| &mut c.files),
            Command::AddSourcePath => self.append(name, |c| &mut c.source_paths),
            Command::AddConstant => self.append(name, |c| &mut c.constants),
            Command::AddIncludePath => self.append(name, |c| &mut c.include_paths),
            Command::AddLibrary => self.append(name, |c| &mut c.libraries),
            Command::AddObjectFile => self.append(name, |c| &mut c.object_files),
            Command::AddCompilerFlag => self.append(name, |c| &mut c.compiler_flags),
            Command::AddLinkerFlag => self.append(name, |c| &mut c.linker_flags),
        }
    }

    fn append(&mut self, name: &Token, field: fn(&mut BuildConfig) -> &mut Vec<String>) {
        if let Some(params) = self.complex_command(name) {
            field(&mut self.config).extend(params.into_iter().map(|t| t.lexeme));
        }
    }

    /// `SetX(value)` — one parameter token between parentheses.  Always
    /// discards the rest of the line, success or not.
    fn simple_command(&mut self, name: &Token) -> Option<Token> {
        let param = self.simple_param(name);
        self.tokens.skip_line();
        param
    }

    fn simple_param(&mut self, name: &Token) -> Option<Token> {
        match self.tokens.advance() {
            Some(t) if t.kind == TokenKind::LeftParen => {}
            _ => {
                self.error(name, "Expected \"(\" after command.");
                return None;
            }
        }

        let Some(param) = self.tokens.advance() else {
            self.error(name, "Expected parameter after command.");
            return None;
        };

        match self.tokens.advance() {
            Some(t) if t.kind == TokenKind::RightParen => {}
            _ => {
                self.error(name, "Expected \")\" after parameter.");
                return None;
            }
        }

        Some(param)
    }

    /// `AddX(v1, v2, ...)` — one or more comma-separated parameters.
    fn complex_command(&mut self, name: &Token) -> Option<Vec<Token>> {
        let params = self.complex_params(name);
        self.tokens.skip_line();
        params
    }

    fn complex_params(&mut self, name: &Token) -> Option<Vec<Token>> {
        match self.tokens.advance() {
            Some(t) if t.kind == TokenKind::LeftParen => {}
            _ => {
                self.error(name, "Expected \"(\" after command.");
                return None;
            }
        }

        let params = self.parameter_list();
        if params.is_empty() {
            self.error(name, "Expected parameters after command.");
            return None;
        }

        match self.tokens.advance() {
            Some(t) if t.kind == TokenKind::RightParen => {}
            _ => {
                self.error(name, "Expected \")\" after parameters.");
                return None;
            }
        }

        Some(params)
    }

    /// Greedy `String (',' String)*`.  A comma not followed by another
    /// string just stops consumption; the `)` check catches any genuine
    /// misalignment afterwards.
    fn parameter_list(&mut self) -> Vec<Token> {
        let mut params = Vec::new();
        while matches!(self.tokens.peek(), Some(t) if t.kind == TokenKind::String) {
            if let Some(param) = self.tokens.advance() {
                params.push(param);
            }
            match self.tokens.peek() {
                Some(t) if t.kind == TokenKind::Comma => {
                    self.tokens.advance();
                }
                _ => break,
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_source;
    use super::*;

    #[test]
    fn test_set_commands() {
        let result = parse_source(
            "SetProjectName(app)\n\
             SetCompiler(clang)\n\
             SetLanguageVersion(c11)\n\
             SetTargetArch(32)\n\
             SetOutputType(shared)\n\
             SetBuildType(debug)\n",
        );
        assert!(result.is_clean(), "{:?}", result.diagnostics);
        assert_eq!(result.config.project_name, "app");
        assert_eq!(result.config.compiler, Compiler::Clang);
        assert_eq!(result.config.language_version, LanguageVersion::C11);
        assert_eq!(result.config.target_arch, TargetArch::Bits32);
        assert_eq!(result.config.output_type, OutputType::Shared);
        assert_eq!(result.config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_add_commands_append_in_order() {
        let result = parse_source("AddFile(a.c, b.c, c.c)\nAddFile(d.c)\n");
        assert!(result.is_clean());
        assert_eq!(result.config.files, vec!["a.c", "b.c", "c.c", "d.c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let result = parse_source("AddLibrary(m, m)\nAddLibrary(m)\n");
        assert!(result.is_clean());
        assert_eq!(result.config.libraries, vec!["m", "m", "m"]);
    }

    #[test]
    fn test_invalid_scalar_keeps_previous_value() {
        let result = parse_source("SetCompiler(msvc)\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Invalid compiler.");
        assert_eq!(result.diagnostics[0].lexeme, "msvc");
        assert_eq!(result.config.compiler, Compiler::Gcc);

        let result = parse_source("SetBuildType(debug)\nSetBuildType(fastest)\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_unknown_command() {
        let result = parse_source("Foo(bar)\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Unknown command.");
        assert_eq!(result.config, BuildConfig::default());
    }

    #[test]
    fn test_command_names_are_case_sensitive() {
        let result = parse_source("setcompiler(clang)\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Unknown command.");
        assert_eq!(result.config.compiler, Compiler::Gcc);
    }

    #[test]
    fn test_empty_parameter_list() {
        let result = parse_source("AddFile()\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "Expected parameters after command."
        );
        assert!(result.config.files.is_empty());
    }

    #[test]
    fn test_missing_open_paren() {
        let result = parse_source("SetBuildType debug\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "Expected \"(\" after command."
        );
        assert_eq!(result.config.build_type, BuildType::Release);
    }

    #[test]
    fn test_missing_close_paren() {
        let result = parse_source("AddFile(a.c b.c)\n");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "Expected \")\" after parameters."
        );
        assert!(result.config.files.is_empty());
    }

    #[test]
    fn test_trailing_comma_stops_consumption() {
        // the `)` lines up again after the dangling comma, so this parses
        let result = parse_source("AddFile(a.c,)\n");
        assert!(result.is_clean());
        assert_eq!(result.config.files, vec!["a.c"]);
    }

    #[test]
    fn test_trailing_tokens_after_command_are_dropped() {
        let result = parse_source("SetBuildType(debug) stray tokens\n");
        assert!(result.is_clean());
        assert_eq!(result.config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_line_must_begin_with_a_string() {
        let result = parse_source("(oops)\n");
        assert!(!result.diagnostics.is_empty());
        assert_eq!(
            result.diagnostics[0].message,
            "Commands must begin with a string."
        );
        assert_eq!(result.config, BuildConfig::default());
    }

    #[test]
    fn test_recovers_after_bad_line() {
        let result = parse_source(
            "SetCompiler(tcc)\n\
             SetProjectName(app)\n\
             AddFile(a.c)\n\
             SetBuildType(debug)\n",
        );
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].line, 1);
        assert_eq!(result.config.project_name, "app");
        assert_eq!(result.config.files, vec!["a.c"]);
        assert_eq!(result.config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_every_bad_line_gets_its_own_diagnostic() {
        let result = parse_source("Foo(1)\nAddFile()\nSetTargetArch(16)\n");
        let lines: Vec<usize> = result.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_command_without_newline_at_eof() {
        let result = parse_source("SetBuildType(debug)");
        assert!(result.is_clean());
        assert_eq!(result.config.build_type, BuildType::Debug);
    }

    #[test]
    fn test_empty_input() {
        let result = parse_source("");
        assert!(result.is_clean());
        assert_eq!(result.config, BuildConfig::default());
    }

    #[test]
    fn test_diagnostic_rendering() {
        let result = parse_source("Frobnicate(now)\n");
        assert_eq!(
            result.diagnostics[0].to_string(),
            "[1] at -> \"Frobnicate\" Unknown command."
        );
    }
}
