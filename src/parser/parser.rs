//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from the lexer one at a time, keeping a single token of lookahead, and
//! builds every node inside the arena.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, rc::Rc};

use crate::{
    arena::Arena,
    ast::ast::Program,
    errors::errors::{Construct, Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_fn_decl,
};

/// How many grammar rules may be open at once before the parse is rejected.
///
/// Every rule entered through [`Parser::within`] counts one level, and so
/// does every infix operator folded into a chain, so this bounds both the
/// recursion of the parse and the height of the finished tree.
pub const MAX_NESTING_DEPTH: usize = 200;

/// The main parser structure that maintains parsing state.
///
/// Control state lives entirely in the call stack of the rule functions;
/// the struct only holds the lookahead token and the dispatch tables.
pub struct Parser<'a> {
    /// Token source, pulled on demand
    lexer: Lexer<'a>,
    /// Owner of every node and string produced by this parse
    arena: &'a Arena,
    /// The single token of lookahead
    current: Token<'a>,
    /// The name of the source being parsed
    file: Rc<str>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<'a>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'a>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'a>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Number of grammar rules currently open
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser and fetches the first token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from
    /// * `arena` - The arena that will own the tree
    pub fn new(mut lexer: Lexer<'a>, arena: &'a Arena) -> Result<Self, Error> {
        let current = next_significant(&mut lexer)?;
        let file = lexer.file();

        let mut parser = Parser {
            lexer,
            arena,
            current,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Parses function declarations until end of file.
    ///
    /// The first error aborts the parse; no partial program is returned.
    pub fn parse(&mut self) -> Result<Program<'a>, Error> {
        let mut functions = vec![];

        while self.current_token_kind() != TokenKind::FileEnd {
            functions.push(parse_fn_decl(self)?);
        }

        log::debug!(
            "parsed {} function(s) from {}, arena holds {} bytes",
            functions.len(),
            self.file,
            self.arena.used()
        );

        Ok(functions)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Token<'a> {
        self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next non-comment token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token<'a>, Error> {
        let previous = self.current;
        self.current = next_significant(&mut self.lexer)?;
        Ok(previous)
    }

    /// Consumes the current token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise a
    /// `TokenMismatch` naming both kinds at the current line.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'a>, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            return Err(self.error(ErrorImpl::TokenMismatch {
                expected: expected_kind,
                received: kind,
            }));
        }

        self.advance()
    }

    /// Runs a grammar rule, tagging any error it raises with `construct`.
    ///
    /// Input nested deeper than [`MAX_NESTING_DEPTH`] is rejected with
    /// `UnexpectedToken` at the token that would open the next level.
    pub fn within<T>(
        &mut self,
        construct: Construct,
        rule: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.descend().map_err(|err| err.within(construct))?;
        let result = rule(self);
        self.ascend(1);

        result.map_err(|err| err.within(construct))
    }

    /// Opens one nesting level, failing once [`MAX_NESTING_DEPTH`] are open.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current;
            log::debug!(
                "nesting deeper than {} levels at line {}",
                MAX_NESTING_DEPTH,
                token.line
            );
            return Err(self.error(ErrorImpl::UnexpectedToken {
                token: token.kind,
                text: token.value.to_string(),
            }));
        }

        self.depth += 1;
        Ok(())
    }

    /// Closes `levels` nesting levels opened with [`Parser::descend`].
    pub fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Moves a node into the arena.
    pub fn alloc<T>(&self, value: T) -> Result<&'a T, Error> {
        let arena = self.arena;
        arena.alloc(value).map_err(|err| self.error(err))
    }

    /// Freezes a finished child list into the arena.
    pub fn alloc_slice<T: Copy>(&self, items: &[T]) -> Result<&'a [T], Error> {
        let arena = self.arena;
        arena.alloc_slice(items).map_err(|err| self.error(err))
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<'a> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<'a> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<'a> {
        &self.led_lookup
    }

    /// Binding power of `kind` in infix position; `Default` when it is not an operator.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'a>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'a>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<'a>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current line in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current.line, Rc::clone(&self.file))
    }
}

fn next_significant<'a>(lexer: &mut Lexer<'a>) -> Result<Token<'a>, Error> {
    loop {
        let token = lexer.next_token()?;
        if !token.is(TokenKind::Comment) {
            return Ok(token);
        }
    }
}

/// Parses every function declaration pulled from `lexer`.
pub fn parse<'a>(lexer: Lexer<'a>, arena: &'a Arena) -> Result<Program<'a>, Error> {
    Parser::new(lexer, arena)?.parse()
}

/// Lexes and parses an in-memory source.
///
/// # Arguments
///
/// * `source` - The program text; it may be dropped once this returns
/// * `file` - Name used in diagnostics
/// * `arena` - The arena that will own the tree
pub fn parse_source<'a>(
    source: impl Into<String>,
    file: Option<String>,
    arena: &'a Arena,
) -> Result<Program<'a>, Error> {
    parse(Lexer::new(source, file, arena), arena)
}
