//! Operator Vocabulary
//!
//! Closed enumerations of every operator the printer can meet, each with
//! its fixed textual spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! spelled {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// =============================================================================
// REDIRECTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedirectionOperator {
    Less,      // <
    Great,     // >
    DGreat,    // >>
    LessGreat, // <>
    LessAnd,   // <&
    GreatAnd,  // >&
    Clobber,   // >|
    DLess,     // <<
    DLessDash, // <<-
    TLess,     // <<<
    AndGreat,  // &>
    AndDGreat, // &>>
}

impl RedirectionOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Less => "<",
            Self::Great => ">",
            Self::DGreat => ">>",
            Self::LessGreat => "<>",
            Self::LessAnd => "<&",
            Self::GreatAnd => ">&",
            Self::Clobber => ">|",
            Self::DLess => "<<",
            Self::DLessDash => "<<-",
            Self::TLess => "<<<",
            Self::AndGreat => "&>",
            Self::AndDGreat => "&>>",
        }
    }

    /// Heredoc operators carry a body that is printed after the line ends.
    pub fn is_heredoc(self) -> bool {
        matches!(self, Self::DLess | Self::DLessDash)
    }
}

spelled!(RedirectionOperator);

// =============================================================================
// COMMAND LISTS
// =============================================================================

/// Operator joining the two sides of a binary command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryCommandOperator {
    Pipe,    // |
    PipeAll, // |&
    AndAnd,  // &&
    OrOr,    // ||
}

impl BinaryCommandOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pipe => "|",
            Self::PipeAll => "|&",
            Self::AndAnd => "&&",
            Self::OrOr => "||",
        }
    }
}

spelled!(BinaryCommandOperator);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseTerminator {
    DoubleSemi,  // ;;
    SemiAnd,     // ;&
    SemiSemiAnd, // ;;&
}

impl CaseTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DoubleSemi => ";;",
            Self::SemiAnd => ";&",
            Self::SemiSemiAnd => ";;&",
        }
    }
}

spelled!(CaseTerminator);

// =============================================================================
// PARAMETER EXPANSION
// =============================================================================

/// Operator between a parameter name and its word: `${a:-b}`, `${a##b}`...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionOperator {
    Colon,         // :
    Plus,          // +
    ColonPlus,     // :+
    Minus,         // -
    ColonMinus,    // :-
    Quest,         // ?
    ColonQuest,    // :?
    Assign,        // =
    ColonAssign,   // :=
    Percent,       // %
    DPercent,      // %%
    Hash,          // #
    DHash,         // ##
    Caret,         // ^
    DCaret,        // ^^
    Comma,         // ,
    DComma,        // ,,
}

impl ExpansionOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colon => ":",
            Self::Plus => "+",
            Self::ColonPlus => ":+",
            Self::Minus => "-",
            Self::ColonMinus => ":-",
            Self::Quest => "?",
            Self::ColonQuest => ":?",
            Self::Assign => "=",
            Self::ColonAssign => ":=",
            Self::Percent => "%",
            Self::DPercent => "%%",
            Self::Hash => "#",
            Self::DHash => "##",
            Self::Caret => "^",
            Self::DCaret => "^^",
            Self::Comma => ",",
            Self::DComma => ",,",
        }
    }
}

spelled!(ExpansionOperator);

// =============================================================================
// ARITHMETIC AND TEST EXPRESSIONS
// =============================================================================

/// Binary operators of `$(( ))`, `(( ))`, `let` and `[[ ]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Assign,
    Add,
    Sub,
    Rem,
    Mul,
    Quo,
    BitAnd,
    BitOr,
    BitXor,
    LogAnd,
    LogOr,
    Pow,
    Eql,
    Neq,
    Leq,
    Geq,
    AddAssign,
    SubAssign,
    MulAssign,
    QuoAssign,
    RemAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    Lss,
    Gtr,
    Shl,
    Shr,
    Quest,
    Colon,
    Comma,
    // [[ ]] only
    RegexMatch,
    Newer,
    Older,
    SameFile,
    NumEq,
    NumNe,
    NumLe,
    NumGe,
    NumLt,
    NumGt,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Rem => "%",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::LogAnd => "&&",
            Self::LogOr => "||",
            Self::Pow => "**",
            Self::Eql => "==",
            Self::Neq => "!=",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::QuoAssign => "/=",
            Self::RemAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::Lss => "<",
            Self::Gtr => ">",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Quest => "?",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::RegexMatch => "=~",
            Self::Newer => "-nt",
            Self::Older => "-ot",
            Self::SameFile => "-ef",
            Self::NumEq => "-eq",
            Self::NumNe => "-ne",
            Self::NumLe => "-le",
            Self::NumGe => "-ge",
            Self::NumLt => "-lt",
            Self::NumGt => "-gt",
        }
    }
}

spelled!(BinaryOperator);

/// Unary operators, arithmetic ones first, then the `[[ ]]` file and
/// string tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    BitNot,
    Inc,
    Dec,
    Exists,
    ExistsLegacy,
    RegularFile,
    Directory,
    CharSpecial,
    BlockSpecial,
    NamedPipe,
    Socket,
    Symlink,
    SymlinkLegacy,
    SetGid,
    SetUid,
    Sticky,
    Readable,
    Writable,
    Executable,
    NonEmpty,
    FdTerminal,
    OwnedByGroup,
    OwnedByUser,
    ModifiedSinceRead,
    EmptyString,
    NonEmptyString,
    OptionSet,
    VarSet,
    NameRef,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Exists => "-e",
            Self::ExistsLegacy => "-a",
            Self::RegularFile => "-f",
            Self::Directory => "-d",
            Self::CharSpecial => "-c",
            Self::BlockSpecial => "-b",
            Self::NamedPipe => "-p",
            Self::Socket => "-S",
            Self::Symlink => "-L",
            Self::SymlinkLegacy => "-h",
            Self::SetGid => "-g",
            Self::SetUid => "-u",
            Self::Sticky => "-k",
            Self::Readable => "-r",
            Self::Writable => "-w",
            Self::Executable => "-x",
            Self::NonEmpty => "-s",
            Self::FdTerminal => "-t",
            Self::OwnedByGroup => "-G",
            Self::OwnedByUser => "-O",
            Self::ModifiedSinceRead => "-N",
            Self::EmptyString => "-z",
            Self::NonEmptyString => "-n",
            Self::OptionSet => "-o",
            Self::VarSet => "-v",
            Self::NameRef => "-R",
        }
    }
}

spelled!(UnaryOperator);

// =============================================================================
// WORD PART INTRODUCERS
// =============================================================================

/// Extended glob introducer: `?(`, `*(`, `+(`, `@(`, `!(`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlobOperator {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
    One,
    Except,
}

impl GlobOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ZeroOrOne => "?(",
            Self::ZeroOrMore => "*(",
            Self::OneOrMore => "+(",
            Self::One => "@(",
            Self::Except => "!(",
        }
    }
}

spelled!(GlobOperator);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessDirection {
    Input,  // <(...)
    Output, // >(...)
}

impl ProcessDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "<(",
            Self::Output => ">(",
        }
    }
}

spelled!(ProcessDirection);
