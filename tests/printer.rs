mod common;

use bash_printer::*;
use common::{assert_stable, print, Src};

// =============================================================================
// STATEMENT LISTS
// =============================================================================

#[test]
fn test_semicolon_list_stays_on_one_line() {
    let mut src = Src::new("a; b\n");
    let stmts = vec![src.call(&["a"]), src.call(&["b"])];
    let file = src.file(stmts, vec![]);
    assert_eq!(print(&file), "a; b\n");
}

#[test]
fn test_background_separator() {
    let mut src = Src::new("a & b\n");
    let mut a = src.call(&["a"]);
    a.background = true;
    let b = src.call(&["b"]);
    let file = src.file(vec![a, b], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_blank_lines_collapse_to_one() {
    let mut src = Src::new("a\n\n\nb\nc\n");
    let stmts = vec![src.call(&["a"]), src.call(&["b"]), src.call(&["c"])];
    let file = src.file(stmts, vec![]);
    assert_eq!(print(&file), "a\n\nb\nc\n");
}

#[test]
fn test_negation() {
    let mut src = Src::new("! a\n");
    let pos = src.pos("!");
    let arg = src.lit("a");
    let mut s = AST::stmt(pos, AST::call(vec![arg]));
    s.negated = true;
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

// =============================================================================
// COMMENTS
// =============================================================================

#[test]
fn test_leading_and_trailing_comments() {
    let mut src = Src::new("# head\na # tail\n\n# mid\nb\n");
    let head = src.comment(" head");
    let a = src.call(&["a"]);
    let tail = src.comment(" tail");
    let mid = src.comment(" mid");
    let b = src.call(&["b"]);
    let file = src.file(vec![a, b], vec![head, tail, mid]);
    assert_stable(&src, &file);
}

#[test]
fn test_trailing_comments_are_aligned() {
    let mut src = Src::new("x=1 # one\nyy=22 # two\n");
    let x = src.assign("x", "1");
    let one = src.comment(" one");
    let y = src.assign("yy", "22");
    let two = src.comment(" two");
    let file = src.file(vec![x, y], vec![one, two]);
    assert_eq!(print(&file), "x=1   # one\nyy=22 # two\n");
}

#[test]
fn test_blank_line_ends_alignment_run() {
    let mut src = Src::new("x=1 # one\n\nyy=22 # two\n");
    let x = src.assign("x", "1");
    let one = src.comment(" one");
    let y = src.assign("yy", "22");
    let two = src.comment(" two");
    let file = src.file(vec![x, y], vec![one, two]);
    assert_stable(&src, &file);
}

#[test]
fn test_alignment_run_of_three() {
    let mut src = Src::new("a # 1\nbbb # 2\ncc # 3\n");
    let a = src.call(&["a"]);
    let c1 = src.comment(" 1");
    let b = src.call(&["bbb"]);
    let c2 = src.comment(" 2");
    let c = src.call(&["cc"]);
    let c3 = src.comment(" 3");
    let file = src.file(vec![a, b, c], vec![c1, c2, c3]);
    assert_eq!(print(&file), "a   # 1\nbbb # 2\ncc  # 3\n");
}

#[test]
fn test_uncommented_statement_ends_alignment_run() {
    let mut src = Src::new("a # 1\nbbb\ncc # 3\ndddd # 4\n");
    let a = src.call(&["a"]);
    let c1 = src.comment(" 1");
    let b = src.call(&["bbb"]);
    let c = src.call(&["cc"]);
    let c3 = src.comment(" 3");
    let d = src.call(&["dddd"]);
    let c4 = src.comment(" 4");
    let file = src.file(vec![a, b, c, d], vec![c1, c3, c4]);
    assert_eq!(print(&file), "a # 1\nbbb\ncc   # 3\ndddd # 4\n");
}

#[test]
fn test_continued_statement_ends_alignment_run() {
    let mut src = Src::new("foo \\\n\tbar # c1\nx   # c2\nyyy # c3\n");
    let foo = src.call(&["foo", "bar"]);
    let c1 = src.comment(" c1");
    let x = src.call(&["x"]);
    let c2 = src.comment(" c2");
    let y = src.call(&["yyy"]);
    let c3 = src.comment(" c3");
    let file = src.file(vec![foo, x, y], vec![c1, c2, c3]);
    assert_stable(&src, &file);
}

#[test]
fn test_padding_does_not_outlive_its_run() {
    let mut src = Src::new("{\n\tyyyyy # two\n\tx # one\n} # end\n");
    let lbrace = src.pos("{");
    let y = src.call(&["yyyyy"]);
    let two = src.comment(" two");
    let x = src.call(&["x"]);
    let one = src.comment(" one");
    let rbrace = src.pos("}");
    let end = src.comment(" end");
    let block = AST::stmt(lbrace, AST::block(lbrace, vec![y, x], rbrace));
    let file = src.file(vec![block], vec![two, one, end]);
    assert_eq!(print(&file), "{\n\tyyyyy # two\n\tx     # one\n} # end\n");
}

#[test]
fn test_then_follows_condition_line() {
    let mut src = Src::new("if a\nthen\n\tb\nfi\n");
    let if_pos = src.pos("if");
    let cond = src.call(&["a"]);
    let then_pos = src.pos("then");
    let body = src.call(&["b"]);
    let fi = src.pos("fi");
    let clause = Command::If(IfClause {
        if_pos,
        cond_stmts: vec![cond],
        then_pos,
        then_stmts: vec![body],
        elifs: vec![],
        else_pos: Pos::NONE,
        else_stmts: vec![],
        fi,
    });
    let file = src.file(vec![AST::stmt(if_pos, clause)], vec![]);
    assert_eq!(print(&file), "if a; then\n\tb\nfi\n");
}

#[test]
fn test_comment_before_closing_brace() {
    let mut src = Src::new("{\n\ta\n\t# c\n}\n");
    let lbrace = src.pos("{");
    let a = src.call(&["a"]);
    let c = src.comment(" c");
    let rbrace = src.pos("}");
    let block = AST::stmt(lbrace, AST::block(lbrace, vec![a], rbrace));
    let file = src.file(vec![block], vec![c]);
    assert_stable(&src, &file);
}

// =============================================================================
// HEREDOCS
// =============================================================================

#[test]
fn test_two_heredocs_in_operator_order() {
    let mut src = Src::new("cmd <<A <<B\nfoo\nA\nbar\nB\n");
    let mut s = src.call(&["cmd"]);
    let op_a = src.pos("<<");
    let word_a = src.lit("A");
    let op_b = src.pos("<<");
    let word_b = src.lit("B");
    let body_a = src.lit("foo\n");
    let body_b = src.lit("bar\n");
    s.redirs = vec![
        AST::heredoc(op_a, RedirectionOperator::DLess, word_a, body_a),
        AST::heredoc(op_b, RedirectionOperator::DLess, word_b, body_b),
    ];
    let file = src.file(vec![s], vec![]);
    assert_eq!(print(&file), "cmd <<A <<B\nfoo\nA\nbar\nB\n");
}

#[test]
fn test_heredoc_before_next_statement() {
    let mut src = Src::new("cat <<EOF\nhi\nEOF\necho\n");
    let mut cat = src.call(&["cat"]);
    let op = src.pos("<<");
    let word = src.lit("EOF");
    let body = src.lit("hi\n");
    cat.redirs.push(AST::heredoc(op, RedirectionOperator::DLess, word, body));
    src.pos("EOF");
    let echo = src.call(&["echo"]);
    let file = src.file(vec![cat, echo], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_quoted_heredoc_delimiter_is_unquoted_on_close() {
    let mut src = Src::new("cat <<'EOF'\nx\nEOF\n");
    let mut cat = src.call(&["cat"]);
    let op = src.pos("<<");
    let quote = src.pos("'");
    let word = AST::word(vec![AST::single_quoted(quote, "EOF")]);
    let body = src.lit("x\n");
    cat.redirs.push(AST::heredoc(op, RedirectionOperator::DLess, word, body));
    let file = src.file(vec![cat], vec![]);
    assert_stable(&src, &file);
}

// =============================================================================
// REDIRECTS AND WORDS
// =============================================================================

#[test]
fn test_redirect_between_arguments() {
    let mut src = Src::new("echo >out a 2>&1\n");
    let echo = src.lit("echo");
    let op = src.pos(">");
    let out = src.lit("out");
    let a = src.lit("a");
    let n = src.pos("2");
    let dup_op = src.pos(">&");
    let one = src.lit("1");
    let mut s = AST::stmt(echo.pos(), AST::call(vec![echo, a]));
    let mut dup = AST::redirect(dup_op, RedirectionOperator::GreatAnd, one);
    dup.n = Some(AST::lit(n, "2"));
    s.redirs = vec![AST::redirect(op, RedirectionOperator::Great, out), dup];
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_backslash_continuation_is_kept() {
    let mut src = Src::new("echo a \\\n\tb\n");
    let s = src.call(&["echo", "a", "b"]);
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_command_substitution() {
    let mut src = Src::new("echo $(foo)\n");
    let echo = src.lit("echo");
    let left = src.pos("$(");
    let foo = src.call(&["foo"]);
    let right = src.pos(")");
    let subst = AST::word(vec![WordPart::CmdSubst(CmdSubst {
        left,
        stmts: vec![foo],
        right,
    })]);
    let s = AST::stmt(echo.pos(), AST::call(vec![echo, subst]));
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_wrapped_array_literal() {
    let mut src = Src::new("a=(\n\tx\n\ty\n)\n");
    let name = src.pos("a");
    let lparen = src.pos("(");
    let x = src.lit("x");
    let y = src.lit("y");
    let rparen = src.pos(")");
    let array = AST::word(vec![WordPart::ArrayExpr(ArrayExpr {
        lparen,
        list: vec![x, y],
        rparen,
    })]);
    let mut s = AST::stmt(name, AST::call(vec![]));
    s.assigns.push(AST::assign(AST::lit(name, "a"), false, array));
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

// =============================================================================
// COMPOUND COMMANDS
// =============================================================================

#[test]
fn test_if_then_on_condition_line() {
    let mut src = Src::new("if true; then\n\tfoo\nfi\n");
    let if_pos = src.pos("if");
    let cond = src.call(&["true"]);
    let then_pos = src.pos("then");
    let body = src.call(&["foo"]);
    let fi = src.pos("fi");
    let clause = Command::If(IfClause {
        if_pos,
        cond_stmts: vec![cond],
        then_pos,
        then_stmts: vec![body],
        elifs: vec![],
        else_pos: Pos::NONE,
        else_stmts: vec![],
        fi,
    });
    let file = src.file(vec![AST::stmt(if_pos, clause)], vec![]);
    assert_eq!(print(&file), "if true; then\n\tfoo\nfi\n");
}

#[test]
fn test_if_elif_else() {
    let mut src = Src::new("if a; then\n\tb\nelif c; then\n\td\nelse\n\te\nfi\n");
    let if_pos = src.pos("if");
    let cond_stmts = vec![src.call(&["a"])];
    let then_pos = src.pos("then");
    let then_stmts = vec![src.call(&["b"])];
    let elif_pos = src.pos("elif");
    let elif_cond = vec![src.call(&["c"])];
    let elif_then = src.pos("then");
    let elif_body = vec![src.call(&["d"])];
    let else_pos = src.pos("else");
    let else_stmts = vec![src.call(&["e"])];
    let fi = src.pos("fi");
    let clause = Command::If(IfClause {
        if_pos,
        cond_stmts,
        then_pos,
        then_stmts,
        elifs: vec![Elif {
            elif_pos,
            cond_stmts: elif_cond,
            then_pos: elif_then,
            then_stmts: elif_body,
        }],
        else_pos,
        else_stmts,
        fi,
    });
    let file = src.file(vec![AST::stmt(if_pos, clause)], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_while_loop() {
    let mut src = Src::new("while a; do\n\tb\ndone\n");
    let keyword_pos = src.pos("while");
    let cond_stmts = vec![src.call(&["a"])];
    let do_pos = src.pos("do");
    let do_stmts = vec![src.call(&["b"])];
    let done = src.pos("done");
    let clause = Command::While(WhileClause {
        keyword_pos,
        cond_stmts,
        do_pos,
        do_stmts,
        done,
    });
    let file = src.file(vec![AST::stmt(keyword_pos, clause)], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_function_with_for_loop() {
    let mut src = Src::new("function f() {\n\tfor i in a b; do\n\t\techo $i\n\tdone\n}\n");
    let position = src.pos("function");
    let name = src.pos("f");
    let lbrace = src.pos("{");
    let for_pos = src.pos("for");
    let var = src.pos("i");
    src.pos("in");
    let list = vec![src.lit("a"), src.lit("b")];
    let do_pos = src.pos("do");
    let echo = src.lit("echo");
    let param = src.param("i");
    let done = src.pos("done");
    let rbrace = src.pos("}");

    let body = AST::stmt(echo.pos(), AST::call(vec![echo, param]));
    let for_clause = Command::For(ForClause {
        for_pos,
        loop_: Loop::WordIter(WordIter {
            name: AST::lit(var, "i"),
            list,
        }),
        do_pos,
        do_stmts: vec![body],
        done,
    });
    let block = AST::block(lbrace, vec![AST::stmt(for_pos, for_clause)], rbrace);
    let func = Command::Func(FuncDecl {
        position,
        bash_style: true,
        name: AST::lit(name, "f"),
        body: Box::new(AST::stmt(lbrace, block)),
    });
    let file = src.file(vec![AST::stmt(position, func)], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_c_style_for() {
    let mut src = Src::new("for ((i = 0; i < 3; i++)); do\n\tx\ndone\n");
    let for_pos = src.pos("for");
    let lparen = src.pos("((");
    let i = src.lit("i");
    let assign = src.pos("=");
    let zero = src.lit("0");
    let i2 = src.lit("i");
    let lss = src.pos("<");
    let three = src.lit("3");
    let i3 = src.lit("i");
    let inc = src.pos("++");
    let rparen = src.pos("))");
    let do_pos = src.pos("do");
    let x = src.call(&["x"]);
    let done = src.pos("done");

    let header = CStyleLoop {
        lparen,
        init: Some(AST::binary_expr(
            assign,
            BinaryOperator::Assign,
            ArithmExpr::Word(i),
            ArithmExpr::Word(zero),
        )),
        cond: Some(AST::binary_expr(
            lss,
            BinaryOperator::Lss,
            ArithmExpr::Word(i2),
            ArithmExpr::Word(three),
        )),
        post: Some(AST::unary_expr(inc, UnaryOperator::Inc, true, ArithmExpr::Word(i3))),
        rparen,
    };
    let clause = Command::For(ForClause {
        for_pos,
        loop_: Loop::CStyle(header),
        do_pos,
        do_stmts: vec![x],
        done,
    });
    let file = src.file(vec![AST::stmt(for_pos, clause)], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_case_terminators() {
    let mut src = Src::new("case x in\n\ta) foo ;;\n\tb)\n\t\tbar\n\t\tbaz\n\t\t;;\nesac\n");
    let case_pos = src.pos("case");
    let word = src.lit("x");
    let a = src.lit("a");
    let foo = src.call(&["foo"]);
    let a_op = src.pos(";;");
    let b = src.lit("b");
    let bar = src.call(&["bar"]);
    let baz = src.call(&["baz"]);
    let b_op = src.pos(";;");
    let esac = src.pos("esac");
    let clause = Command::Case(CaseClause {
        case_pos,
        word,
        arms: vec![
            CaseArm {
                op: CaseTerminator::DoubleSemi,
                op_pos: a_op,
                patterns: vec![a],
                stmts: vec![foo],
            },
            CaseArm {
                op: CaseTerminator::DoubleSemi,
                op_pos: b_op,
                patterns: vec![b],
                stmts: vec![bar, baz],
            },
        ],
        esac,
    });
    let file = src.file(vec![AST::stmt(case_pos, clause)], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_nested_subshell_keeps_space() {
    let mut src = Src::new("( (a))\n");
    let outer = src.pos("(");
    let inner = src.pos("(");
    let a = src.call(&["a"]);
    let inner_close = src.pos(")");
    let outer_close = src.pos(")");
    let sub = AST::stmt(inner, AST::subshell(inner, vec![a], inner_close));
    let s = AST::stmt(outer, AST::subshell(outer, vec![sub], outer_close));
    let file = src.file(vec![s], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_declaration_clause() {
    let mut src = Src::new("local -r x=1\n");
    let position = src.pos("local");
    let opt = src.lit("-r");
    let name = src.pos("x");
    let value = src.lit("1");
    let decl = Command::Decl(DeclClause {
        position,
        variant: "local".into(),
        opts: vec![opt],
        assigns: vec![AST::assign(AST::lit(name, "x"), false, value)],
    });
    let file = src.file(vec![AST::stmt(position, decl)], vec![]);
    assert_stable(&src, &file);
}

// =============================================================================
// INDENTATION
// =============================================================================

#[test]
fn test_unwrapped_nesting_adds_no_indent() {
    let mut src = Src::new("{ (\n\tfoo\n); }\n");
    let lbrace = src.pos("{");
    let lparen = src.pos("(");
    let foo = src.call(&["foo"]);
    let rparen = src.pos(")");
    let rbrace = src.pos("}");
    let sub = AST::stmt(lparen, AST::subshell(lparen, vec![foo], rparen));
    let block = AST::stmt(lbrace, AST::block(lbrace, vec![sub], rbrace));
    let file = src.file(vec![block], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_lone_statement_moves_off_opening_line() {
    let mut src = Src::new("{ a\n}\n");
    let lbrace = src.pos("{");
    let a = src.call(&["a"]);
    let rbrace = src.pos("}");
    let block = AST::stmt(lbrace, AST::block(lbrace, vec![a], rbrace));
    let file = src.file(vec![block], vec![]);
    assert_eq!(print(&file), "{\n\ta\n}\n");
}

#[test]
fn test_space_indentation() {
    let mut src = Src::new("if true; then\n\tfoo\nfi\n");
    let if_pos = src.pos("if");
    let cond = src.call(&["true"]);
    let then_pos = src.pos("then");
    let body = src.call(&["foo"]);
    let fi = src.pos("fi");
    let clause = Command::If(IfClause {
        if_pos,
        cond_stmts: vec![cond],
        then_pos,
        then_stmts: vec![body],
        elifs: vec![],
        else_pos: Pos::NONE,
        else_stmts: vec![],
        fi,
    });
    let file = src.file(vec![AST::stmt(if_pos, clause)], vec![]);
    let out = Config::with_spaces(2).sprint(&file).unwrap();
    assert_eq!(out, "if true; then\n  foo\nfi\n");
}

// =============================================================================
// BINARY COMMANDS
// =============================================================================

/// `a && b && c`, nested to the right.
fn and_chain(src: &mut Src) -> Stmt {
    let a = src.call(&["a"]);
    let op1 = src.pos("&&");
    let b = src.call(&["b"]);
    let op2 = src.pos("&&");
    let c = src.call(&["c"]);
    let y = AST::stmt(b.pos(), AST::binary_cmd(op2, BinaryCommandOperator::AndAnd, b, c));
    AST::stmt(a.pos(), AST::binary_cmd(op1, BinaryCommandOperator::AndAnd, a, y))
}

#[test]
fn test_chain_on_one_line() {
    let mut src = Src::new("a && b && c\n");
    let chain = and_chain(&mut src);
    let file = src.file(vec![chain], vec![]);
    assert_stable(&src, &file);
}

#[test]
fn test_wrapped_chain_indents_once() {
    let mut src = Src::new("a &&\n\tb &&\n\tc\n");
    let chain = and_chain(&mut src);
    let file = src.file(vec![chain], vec![]);
    assert_eq!(print(&file), "a \\\n\t&& b \\\n\t&& c\n");
}
