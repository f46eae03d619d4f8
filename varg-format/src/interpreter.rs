//! Directive interpreter for simplified `printf`-style templates
//!
//! A template is scanned once, left to right. `%i`/`%d`, `%f` and `%s` each
//! consume one argument from the cursor; every other character is copied to
//! the sink. A `%` followed by an unknown letter, or a `%` at the very end,
//! is malformed and handled according to [`MalformedPolicy`].

use std::str::CharIndices;

use varg_runtime::{ArgKind, Cursor, VarargError};

use crate::config::{Config, MalformedPolicy};
use crate::sink::{Piece, Sink};
use crate::RenderError;

/// One parsed unit of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Character copied to the output
    Literal(char),
    /// Placeholder consuming one argument of the given kind
    Placeholder(ArgKind),
    /// `%` at byte `position` followed by an unrecognized letter, or by
    /// nothing at all (`directive` is `None`)
    Malformed {
        position: usize,
        directive: Option<char>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    DirectiveStart { position: usize },
    Done,
}

/// Iterator over the directives of a template
pub struct Directives<'t> {
    chars: CharIndices<'t>,
    state: State,
}

impl<'t> Directives<'t> {
    pub fn new(template: &'t str) -> Self {
        Self {
            chars: template.char_indices(),
            state: State::Literal,
        }
    }
}

impl Iterator for Directives<'_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Directive> {
        loop {
            match self.state {
                State::Done => return None,
                State::Literal => match self.chars.next() {
                    None => self.state = State::Done,
                    Some((position, '%')) => self.state = State::DirectiveStart { position },
                    Some((_, ch)) => return Some(Directive::Literal(ch)),
                },
                State::DirectiveStart { position } => {
                    let next = self.chars.next();
                    self.state = if next.is_some() {
                        State::Literal
                    } else {
                        State::Done
                    };
                    let directive = match next {
                        Some((_, 'i' | 'd')) => Directive::Placeholder(ArgKind::Int),
                        Some((_, 'f')) => Directive::Placeholder(ArgKind::Double),
                        Some((_, 's')) => Directive::Placeholder(ArgKind::Text),
                        Some((_, ch)) => Directive::Malformed {
                            position,
                            directive: Some(ch),
                        },
                        None => Directive::Malformed {
                            position,
                            directive: None,
                        },
                    };
                    return Some(directive);
                }
            }
        }
    }
}

/// Argument kinds a template expects, in order
pub fn placeholders(template: &str) -> Vec<ArgKind> {
    Directives::new(template)
        .filter_map(|d| match d {
            Directive::Placeholder(kind) => Some(kind),
            _ => None,
        })
        .collect()
}

/// Renders templates against a cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct Interpreter {
    policy: MalformedPolicy,
}

impl Interpreter {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.malformed_directive)
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Render `template`, extracting one argument from `args` per placeholder.
    ///
    /// Rendering stops at the first failed extraction; pieces emitted before
    /// that stay in the sink.
    pub fn render<S: Sink + ?Sized>(
        &self,
        template: &str,
        args: &mut Cursor<'_>,
        sink: &mut S,
    ) -> Result<(), RenderError> {
        for directive in Directives::new(template) {
            match directive {
                Directive::Literal(ch) => sink.emit(Piece::Char(ch))?,
                Directive::Placeholder(kind) => {
                    log::debug!("directive {} at slot {}", kind, args.position());
                    match kind {
                        ArgKind::Int => sink.emit(Piece::Int(args.arg::<i64>()?))?,
                        ArgKind::Double => sink.emit(Piece::Double(args.arg::<f64>()?))?,
                        ArgKind::Text => sink.emit(Piece::Text(args.arg::<&str>()?))?,
                    }
                }
                Directive::Malformed {
                    position,
                    directive,
                } => self.malformed(position, directive)?,
            }
        }
        Ok(())
    }

    fn malformed(&self, position: usize, directive: Option<char>) -> Result<(), RenderError> {
        match self.policy {
            MalformedPolicy::Drop => {
                log::warn!("dropping malformed directive at byte {}", position);
                Ok(())
            }
            MalformedPolicy::Report => Err(VarargError::MalformedDirective {
                position,
                directive,
            }
            .into()),
        }
    }
}
