#![allow(dead_code)]

use bash_printer::*;

/// Builds position-accurate trees from source text. Tokens are looked up
/// left to right, so nodes must be created in source order.
pub struct Src {
    text: &'static str,
    cursor: usize,
}

impl Src {
    pub fn new(text: &'static str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Position of the next `tok` at or after the cursor; the cursor moves
    /// past it.
    pub fn pos(&mut self, tok: &str) -> Pos {
        let off = match self.text[self.cursor..].find(tok) {
            Some(i) => self.cursor + i,
            None => panic!("{:?} not found after offset {}", tok, self.cursor),
        };
        self.cursor = off + tok.len();
        Pos::from_offset(off)
    }

    pub fn lit(&mut self, tok: &str) -> Word {
        let pos = self.pos(tok);
        AST::lit_word(pos, tok)
    }

    pub fn call(&mut self, args: &[&str]) -> Stmt {
        let words: Vec<Word> = args.iter().map(|a| self.lit(a)).collect();
        AST::stmt(words[0].pos(), AST::call(words))
    }

    /// `$name`
    pub fn param(&mut self, name: &str) -> Word {
        let dollar = self.pos(&format!("${}", name));
        AST::word(vec![AST::short_param(dollar, name)])
    }

    /// `name=value` as a statement of its own
    pub fn assign(&mut self, name: &str, value: &str) -> Stmt {
        let pos = self.pos(name);
        let value = self.lit(value);
        let mut s = AST::stmt(pos, AST::call(vec![]));
        s.assigns.push(AST::assign(AST::lit(pos, name), false, value));
        s
    }

    /// A comment; `text` is everything after the `#`.
    pub fn comment(&mut self, text: &str) -> Comment {
        let hash = self.pos(&format!("#{}", text));
        AST::comment(hash, text)
    }

    pub fn file(&self, stmts: Vec<Stmt>, comments: Vec<Comment>) -> File {
        AST::file(stmts, comments, lines_of(self.text))
    }

    pub fn text(&self) -> &'static str {
        self.text
    }
}

pub fn print(file: &File) -> String {
    Config::default().sprint(file).unwrap()
}

/// Printing a tree built from already formatted text gives that text back.
pub fn assert_stable(src: &Src, file: &File) {
    assert_eq!(print(file), src.text());
}
