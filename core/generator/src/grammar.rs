//! Grammar source scanning.
//!
//! The declaration language recognized here: `//` line comments, and
//! top-level rule declarations of the form `Name { body }`, where exactly one
//! rule carries the `@top` marker. Rule bodies are brace-balanced and kept
//! opaque at this stage.

use thiserror::Error;

/// A user-facing problem in the grammar source. The message, including the
/// `file:line` position, is the entire diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{msg}")]
pub struct GenError {
    msg: String,
}

impl GenError {
    /// Wraps a complete, already-formatted message.
    pub fn new(message: impl Into<String>) -> Self {
        GenError {
            msg: message.into(),
        }
    }

    pub(crate) fn at(message: impl Into<String>, file: Option<&str>, line: usize) -> Self {
        let message = message.into();
        let msg = match file {
            Some(file) => format!("{file}:{line}: {message}"),
            None => format!("line {line}: {message}"),
        };
        GenError { msg }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

/// One top-level rule declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rule {
    pub(crate) name: String,
    pub(crate) top: bool,
}

/// The scanned grammar: rules in declaration order, ids are positions.
#[derive(Debug)]
pub(crate) struct Grammar {
    pub(crate) rules: Vec<Rule>,
}

impl Grammar {
    pub(crate) fn parse(source: &str, file: Option<&str>) -> Result<Grammar, GenError> {
        let mut sc = Scanner::new(source, file);
        let mut rules: Vec<Rule> = Vec::new();
        loop {
            sc.skip_trivia();
            let Some(c) = sc.peek() else { break };
            let top = if c == '@' {
                sc.bump();
                let Some(marker) = sc.ident() else {
                    return Err(sc.error("expected a directive name after '@'"));
                };
                if marker != "top" {
                    return Err(sc.error(format!("unknown directive '@{marker}'")));
                }
                sc.skip_trivia();
                true
            } else {
                false
            };
            let Some(name) = sc.ident() else {
                if top {
                    return Err(sc.error("expected a rule name after '@top'"));
                }
                return Err(sc.error(format!("unexpected character '{c}'")));
            };
            if top && rules.iter().any(|r| r.top) {
                return Err(sc.error("duplicate '@top' rule"));
            }
            if rules.iter().any(|r| r.name == name) {
                return Err(sc.error(format!("duplicate definition of '{name}'")));
            }
            sc.skip_trivia();
            if sc.peek() != Some('{') {
                return Err(sc.error(format!("expected '{{' after rule name '{name}'")));
            }
            sc.block()?;
            rules.push(Rule { name, top });
        }
        if rules.is_empty() {
            return Err(GenError::at("empty grammar", file, 1));
        }
        if !rules.iter().any(|r| r.top) {
            return Err(GenError::at("missing '@top' rule", file, 1));
        }
        Ok(Grammar { rules })
    }

    pub(crate) fn top_rule(&self) -> &Rule {
        self.rules
            .iter()
            .find(|r| r.top)
            .expect("a parsed grammar always has a top rule")
    }
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    file: Option<&'a str>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, file: Option<&'a str>) -> Self {
        Scanner {
            src,
            pos: 0,
            line: 1,
            file,
        }
    }

    fn error(&self, message: impl Into<String>) -> GenError {
        GenError::at(message, self.file, self.line)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.src[self.pos..].starts_with("//") => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn ident(&mut self) -> Option<String> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        if self.pos == start {
            None
        } else {
            Some(self.src[start..self.pos].to_owned())
        }
    }

    /// Consumes a brace-balanced rule body. The scanner is positioned at the
    /// opening `{`.
    fn block(&mut self) -> Result<(), GenError> {
        let open_line = self.line;
        let mut depth = 0usize;
        loop {
            match self.bump() {
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => {
                    return Err(GenError::at("unterminated rule body", self.file, open_line));
                }
            }
        }
    }
}
