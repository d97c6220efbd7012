//! Syntax Tree Types for Bash
//!
//! Position-annotated tree consumed by the printer. Every node records
//! where it began (and, for bracketed constructs, where it closed) in the
//! original text, so layout decisions can be replayed.

use serde::{Deserialize, Serialize};

use super::operators::{
    BinaryCommandOperator, BinaryOperator, CaseTerminator, ExpansionOperator, GlobOperator,
    ProcessDirection, RedirectionOperator, UnaryOperator,
};
use super::position::Pos;

// =============================================================================
// FILE & STATEMENTS
// =============================================================================

/// Root node: a parsed script with its comments and line table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct File {
    pub stmts: Vec<Stmt>,
    /// Ordered by position; never attached to nodes.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Byte offset where each line starts, ascending.
    #[serde(default)]
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Position of the `#` marker
    pub hash: Pos,
    /// Text after the marker
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stmt {
    pub position: Pos,
    #[serde(default)]
    pub negated: bool,
    #[serde(default)]
    pub assigns: Vec<Assign>,
    pub cmd: Command,
    /// Ordered by position
    #[serde(default)]
    pub redirs: Vec<Redirect>,
    #[serde(default)]
    pub background: bool,
}

/// Variable assignment: `VAR=value` or `VAR+=value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub name: Option<Lit>,
    #[serde(default)]
    pub append: bool,
    pub value: Word,
}

/// I/O redirection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub op_pos: Pos,
    pub op: RedirectionOperator,
    /// Explicit file descriptor: the `2` in `2>&1`
    pub n: Option<Lit>,
    pub word: Word,
    /// Heredoc body including its final newline
    pub hdoc: Option<Word>,
}

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Call(CallExpr),
    Block(Block),
    If(IfClause),
    Subshell(Subshell),
    While(WhileClause),
    Until(WhileClause),
    For(ForClause),
    Binary(BinaryCmd),
    Func(FuncDecl),
    Case(CaseClause),
    Arithm(ArithmCmd),
    Test(TestClause),
    Decl(DeclClause),
    Eval(EvalClause),
    Coproc(CoprocClause),
    Let(LetClause),
}

/// Simple command: name args...
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CallExpr {
    pub args: Vec<Word>,
}

/// Command group: `{ ...; }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub lbrace: Pos,
    pub stmts: Vec<Stmt>,
    pub rbrace: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfClause {
    pub if_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub then_pos: Pos,
    pub then_stmts: Vec<Stmt>,
    #[serde(default)]
    pub elifs: Vec<Elif>,
    /// Unset when there is no `else`
    #[serde(default)]
    pub else_pos: Pos,
    #[serde(default)]
    pub else_stmts: Vec<Stmt>,
    pub fi: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elif {
    pub elif_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub then_pos: Pos,
    pub then_stmts: Vec<Stmt>,
}

/// Subshell: `( ... )`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subshell {
    pub lparen: Pos,
    pub stmts: Vec<Stmt>,
    pub rparen: Pos,
}

/// `while` and `until` loops share a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileClause {
    pub keyword_pos: Pos,
    pub cond_stmts: Vec<Stmt>,
    pub do_pos: Pos,
    pub do_stmts: Vec<Stmt>,
    pub done: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForClause {
    pub for_pos: Pos,
    #[serde(rename = "loop")]
    pub loop_: Loop,
    pub do_pos: Pos,
    pub do_stmts: Vec<Stmt>,
    pub done: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Loop {
    /// `for name in words`
    WordIter(WordIter),
    /// `for ((init; cond; post))`
    CStyle(CStyleLoop),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordIter {
    pub name: Lit,
    #[serde(default)]
    pub list: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CStyleLoop {
    pub lparen: Pos,
    pub init: Option<ArithmExpr>,
    pub cond: Option<ArithmExpr>,
    pub post: Option<ArithmExpr>,
    pub rparen: Pos,
}

/// Pipeline or and-or pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryCmd {
    pub op_pos: Pos,
    pub op: BinaryCommandOperator,
    pub x: Box<Stmt>,
    pub y: Box<Stmt>,
}

/// Function definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub position: Pos,
    /// Declared with the `function` keyword
    #[serde(default)]
    pub bash_style: bool,
    pub name: Lit,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    pub case_pos: Pos,
    pub word: Word,
    pub arms: Vec<CaseArm>,
    pub esac: Pos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseArm {
    pub op: CaseTerminator,
    pub op_pos: Pos,
    pub patterns: Vec<Word>,
    pub stmts: Vec<Stmt>,
}

/// Arithmetic command: `(( expr ))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmCmd {
    pub left: Pos,
    pub right: Pos,
    pub x: ArithmExpr,
}

/// Conditional command: `[[ expr ]]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestClause {
    pub left: Pos,
    pub right: Pos,
    pub x: ArithmExpr,
}

/// `declare`, `local`, `export`, `readonly`, `typeset`, `nameref`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclClause {
    pub position: Pos,
    /// Empty means `declare`
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub opts: Vec<Word>,
    #[serde(default)]
    pub assigns: Vec<Assign>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalClause {
    pub eval_pos: Pos,
    pub stmt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoprocClause {
    pub coproc_pos: Pos,
    pub name: Option<Lit>,
    pub stmt: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetClause {
    pub let_pos: Pos,
    pub exprs: Vec<ArithmExpr>,
}

// =============================================================================
// WORDS
// =============================================================================

/// A Word is a sequence of parts that form a single shell word.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Word {
    pub parts: Vec<WordPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WordPart {
    Lit(Lit),
    SglQuoted(SglQuoted),
    DblQuoted(DblQuoted),
    CmdSubst(CmdSubst),
    ParamExp(ParamExp),
    ArithmExp(ArithmExp),
    ArrayExpr(ArrayExpr),
    ExtGlob(ExtGlob),
    ProcSubst(ProcSubst),
}

/// Literal text, printed verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lit {
    pub value_pos: Pos,
    pub value: String,
}

/// `'...'`, or `$'...'` when `dollar` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SglQuoted {
    pub quote_pos: Pos,
    #[serde(default)]
    pub dollar: bool,
    pub value: String,
}

/// `"..."`, or `$"..."` when `dollar` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DblQuoted {
    pub quote_pos: Pos,
    #[serde(default)]
    pub dollar: bool,
    pub parts: Vec<WordPart>,
}

/// `$(...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmdSubst {
    pub left: Pos,
    pub stmts: Vec<Stmt>,
    pub right: Pos,
}

/// `$name` or `${...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamExp {
    pub dollar: Pos,
    /// `$name` form, no braces
    #[serde(default)]
    pub short: bool,
    /// `${#name}`
    #[serde(default)]
    pub length: bool,
    pub param: Lit,
    pub index: Option<Word>,
    pub repl: Option<Replace>,
    pub exp: Option<Expansion>,
    /// Unset in the short form
    #[serde(default)]
    pub rbrace: Pos,
}

/// `${name/orig/with}` or `${name//orig/with}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replace {
    pub all: bool,
    pub orig: Word,
    pub with: Word,
}

/// `${name<op>word}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    pub op: ExpansionOperator,
    pub word: Word,
}

/// `$((...))`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmExp {
    pub left: Pos,
    pub right: Pos,
    pub x: ArithmExpr,
}

/// `(a b c)` on the right of an assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpr {
    pub lparen: Pos,
    pub list: Vec<Word>,
    pub rparen: Pos,
}

/// `@(a|b)` and friends; the pattern is kept as written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtGlob {
    pub op_pos: Pos,
    pub op: GlobOperator,
    pub pattern: Lit,
}

/// `<(...)` or `>(...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcSubst {
    pub op_pos: Pos,
    pub op: ProcessDirection,
    pub stmts: Vec<Stmt>,
    pub rparen: Pos,
}

// =============================================================================
// ARITHMETIC AND TEST EXPRESSIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArithmExpr {
    Word(Word),
    Binary(Box<BinaryExpr>),
    Unary(Box<UnaryExpr>),
    Paren(Box<ParenExpr>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op_pos: Pos,
    pub op: BinaryOperator,
    pub x: ArithmExpr,
    pub y: ArithmExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op_pos: Pos,
    pub op: UnaryOperator,
    /// Postfix: `i++`
    #[serde(default)]
    pub post: bool,
    pub x: ArithmExpr,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub lparen: Pos,
    pub x: ArithmExpr,
    pub rparen: Pos,
}

// =============================================================================
// FACTORY FUNCTIONS (AST builders)
// =============================================================================

/// AST factory for building nodes
pub struct AST;

impl AST {
    pub fn file(stmts: Vec<Stmt>, comments: Vec<Comment>, lines: Vec<usize>) -> File {
        File {
            stmts,
            comments,
            lines,
        }
    }

    pub fn comment(hash: Pos, text: impl Into<String>) -> Comment {
        Comment {
            hash,
            text: text.into(),
        }
    }

    pub fn stmt(position: Pos, cmd: Command) -> Stmt {
        Stmt {
            position,
            negated: false,
            assigns: Vec::new(),
            cmd,
            redirs: Vec::new(),
            background: false,
        }
    }

    pub fn call(args: Vec<Word>) -> Command {
        Command::Call(CallExpr { args })
    }

    pub fn lit(value_pos: Pos, value: impl Into<String>) -> Lit {
        Lit {
            value_pos,
            value: value.into(),
        }
    }

    pub fn word(parts: Vec<WordPart>) -> Word {
        Word { parts }
    }

    /// A word made of a single literal
    pub fn lit_word(value_pos: Pos, value: impl Into<String>) -> Word {
        Word {
            parts: vec![WordPart::Lit(Self::lit(value_pos, value))],
        }
    }

    pub fn single_quoted(quote_pos: Pos, value: impl Into<String>) -> WordPart {
        WordPart::SglQuoted(SglQuoted {
            quote_pos,
            dollar: false,
            value: value.into(),
        })
    }

    pub fn double_quoted(quote_pos: Pos, parts: Vec<WordPart>) -> WordPart {
        WordPart::DblQuoted(DblQuoted {
            quote_pos,
            dollar: false,
            parts,
        })
    }

    /// `$name`
    pub fn short_param(dollar: Pos, name: impl Into<String>) -> WordPart {
        WordPart::ParamExp(ParamExp {
            dollar,
            short: true,
            length: false,
            param: Self::lit(dollar + 1, name),
            index: None,
            repl: None,
            exp: None,
            rbrace: Pos::NONE,
        })
    }

    pub fn assign(name: Lit, append: bool, value: Word) -> Assign {
        Assign {
            name: Some(name),
            append,
            value,
        }
    }

    pub fn redirect(op_pos: Pos, op: RedirectionOperator, word: Word) -> Redirect {
        Redirect {
            op_pos,
            op,
            n: None,
            word,
            hdoc: None,
        }
    }

    pub fn heredoc(op_pos: Pos, op: RedirectionOperator, word: Word, body: Word) -> Redirect {
        Redirect {
            op_pos,
            op,
            n: None,
            word,
            hdoc: Some(body),
        }
    }

    pub fn binary_cmd(op_pos: Pos, op: BinaryCommandOperator, x: Stmt, y: Stmt) -> Command {
        Command::Binary(BinaryCmd {
            op_pos,
            op,
            x: Box::new(x),
            y: Box::new(y),
        })
    }

    pub fn block(lbrace: Pos, stmts: Vec<Stmt>, rbrace: Pos) -> Command {
        Command::Block(Block {
            lbrace,
            stmts,
            rbrace,
        })
    }

    pub fn subshell(lparen: Pos, stmts: Vec<Stmt>, rparen: Pos) -> Command {
        Command::Subshell(Subshell {
            lparen,
            stmts,
            rparen,
        })
    }

    pub fn binary_expr(op_pos: Pos, op: BinaryOperator, x: ArithmExpr, y: ArithmExpr) -> ArithmExpr {
        ArithmExpr::Binary(Box::new(BinaryExpr { op_pos, op, x, y }))
    }

    pub fn unary_expr(op_pos: Pos, op: UnaryOperator, post: bool, x: ArithmExpr) -> ArithmExpr {
        ArithmExpr::Unary(Box::new(UnaryExpr { op_pos, op, post, x }))
    }

    pub fn paren_expr(lparen: Pos, x: ArithmExpr, rparen: Pos) -> ArithmExpr {
        ArithmExpr::Paren(Box::new(ParenExpr { lparen, x, rparen }))
    }
}
