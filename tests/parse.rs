use anyhow::Result;
use sexptree::parse::{parse, ParseError};
use sexptree::pos::{chars_with_pos, Pos};
use sexptree::settings::{Filter, Settings, FUF_SETTINGS, NO_FILTER};
use sexptree::strip::strip_comments;
use sexptree::tokenize::{tokenize, Token, TokenWithPos};
use sexptree::value::{atom, list, Element, Parenkind};

fn p(text: &str) -> std::result::Result<Element, sexptree::parse::ParseErrorWithPos> {
    parse(text, &FUF_SETTINGS)
}

fn perr(text: &str) -> ParseError {
    match p(text) {
        Err(e) => e.err,
        Ok(v) => panic!("expected parse of {:?} to fail, got {}", text, v),
    }
}

#[test]
fn three_atoms() -> Result<()> {
    let v = p("(a b c)")?;
    assert_eq!(v, list(Parenkind::Round,
                       vec![atom("a"), atom("b"), atom("c")]));
    let n = v.as_list().expect("a list");
    assert_eq!(n.kind.opening(), '(');
    assert_eq!(n.kind.closing(), ')');
    Ok(())
}

#[test]
fn nested_list() -> Result<()> {
    let v = p("(a (b c) d)")?;
    let n = v.as_list().expect("a list");
    assert_eq!(n.children.len(), 3);
    assert_eq!(n.children[1],
               list(Parenkind::Round, vec![atom("b"), atom("c")]));
    Ok(())
}

#[test]
fn bracket_styles_are_preserved() -> Result<()> {
    let v = p("[a {b c} d]")?;
    let n = v.as_list().expect("a list");
    assert_eq!(n.kind, Parenkind::Square);
    let inner = n.children[1].as_list().expect("a list");
    assert_eq!(inner.kind, Parenkind::Curly);
    assert_eq!(v.to_string(), "[a {b c} d]");
    Ok(())
}

#[test]
fn pretty_print_round_trip() -> Result<()> {
    for text in ["(a b c)", "(a (b c) d)", "[a {b c} d]", "((x) (y) z)"] {
        assert_eq!(p(text)?.to_string(), text);
    }
    // whitespace is normalized, not preserved
    assert_eq!(p("( a\n  b )")?.to_string(), "(a b)");
    Ok(())
}

#[test]
fn quoted_atom_with_space() -> Result<()> {
    let v = p("(a \"hello world\" b)")?;
    assert_eq!(v, list(Parenkind::Round,
                       vec![atom("a"), atom("hello world"), atom("b")]));
    Ok(())
}

#[test]
fn quoted_atom_single_token() -> Result<()> {
    assert_eq!(p("(\"x\")")?,
               list(Parenkind::Round, vec![atom("x")]));
    // the two delimiting quotes are all there is
    assert_eq!(p("(\"\")")?,
               list(Parenkind::Round, vec![atom("")]));
    Ok(())
}

#[test]
fn quoted_atom_many_tokens() -> Result<()> {
    let v = p("(say \"one two three\")")?;
    assert_eq!(v, list(Parenkind::Round,
                       vec![atom("say"), atom("one two three")]));
    Ok(())
}

#[test]
fn trace_subtree_is_dropped() -> Result<()> {
    let v = p("(a (control x y) b)")?;
    assert_eq!(v, list(Parenkind::Round, vec![atom("a"), atom("b")]));
    for marker in ["control-demo", "control", ":demo", "trace"] {
        let v = p(&format!("(a ({} x) b)", marker))?;
        assert_eq!(v, list(Parenkind::Round, vec![atom("a"), atom("b")]),
                   "marker {}", marker);
    }
    Ok(())
}

#[test]
fn filtering_is_not_recursive() -> Result<()> {
    // only the list with the marker as a *direct* child goes away
    let v = p("(a (x (trace y)) b)")?;
    assert_eq!(
        v,
        list(Parenkind::Round,
             vec![atom("a"),
                  list(Parenkind::Round, vec![atom("x")]),
                  atom("b")]));
    Ok(())
}

#[test]
fn filter_markers_are_configuration() -> Result<()> {
    let keep_all = Settings { filter: &NO_FILTER };
    let v = parse("(a (control x) b)", &keep_all)?;
    let n = v.as_list().expect("a list");
    assert_eq!(n.children.len(), 3);

    let dbg_only = Filter { markers: &["dbg"] };
    let s = Settings { filter: &dbg_only };
    let v = parse("(a (dbg x) (control y) b)", &s)?;
    assert_eq!(v.to_string(), "(a (control y) b)");
    Ok(())
}

#[test]
fn percent_words_are_dropped() -> Result<()> {
    let v = p("(a %ignored b)")?;
    assert_eq!(v, list(Parenkind::Round, vec![atom("a"), atom("b")]));
    // the check runs on the quote-processed text
    let v = p("(a \"50% off\" b)")?;
    assert_eq!(v, list(Parenkind::Round, vec![atom("a"), atom("b")]));
    Ok(())
}

#[test]
fn unclosed_bracket() {
    assert_eq!(perr("(a"), ParseError::UnclosedBracket(Parenkind::Round));
    assert_eq!(perr("(a [b"), ParseError::UnclosedBracket(Parenkind::Square));
}

#[test]
fn unexpected_close() {
    assert_eq!(perr("(a))"), ParseError::UnexpectedClose(Parenkind::Round));
}

#[test]
fn mismatched_bracket() {
    match perr("(a]") {
        ParseError::MismatchedBracket(opened, openpos, got) => {
            assert_eq!(opened, Parenkind::Round);
            assert_eq!(openpos, Pos { line: 0, col: 0 });
            assert_eq!(got, Parenkind::Square);
        }
        e => panic!("wrong error: {}", e),
    }
}

#[test]
fn must_start_with_open_bracket() {
    assert_eq!(perr("a (b)"), ParseError::ExpectedOpenParen);
    assert_eq!(perr(""), ParseError::ExpectedOpenParen);
    assert_eq!(perr("; nothing but a comment\n"),
               ParseError::ExpectedOpenParen);
}

#[test]
fn empty_expression() {
    // a top-level expression that gets filtered leaves nothing behind
    assert_eq!(perr("(trace on)"), ParseError::EmptyExpression);
    // an empty list, by contrast, is a valid expression
    assert_eq!(p("()").expect("parses").to_string(), "()");
}

#[test]
fn multiple_top_level_expressions() {
    assert_eq!(perr("(a) (b)"),
               ParseError::MultipleTopLevelExpressions(2));
}

#[test]
fn broken_quote_ends_input() {
    // the closing quote never arrives; tokenization ends inside the
    // string and the still-open list is reported
    assert_eq!(perr("(a \"bc"), ParseError::UnclosedBracket(Parenkind::Round));
}

#[test]
fn comment_lines_contribute_nothing() -> Result<()> {
    assert_eq!(p("(a\n; c\nb)")?, p("(a\nb)")?);
    assert_eq!(p("(a ; trailing\nb)")?,
               list(Parenkind::Round, vec![atom("a"), atom("b")]));
    Ok(())
}

#[test]
fn escaped_semicolon_is_not_a_comment() -> Result<()> {
    let v = p(r"(a \; b)")?;
    assert_eq!(v, list(Parenkind::Round,
                       vec![atom("a"), atom(r"\;"), atom("b")]));
    Ok(())
}

#[test]
fn error_positions_refer_to_stripped_text() {
    // the comment-only line is gone, so the bad bracket sits on line 2
    // (0-based line 1) of what the tokenizer sees
    match p("(a\n; comment\n]") {
        Err(e) => {
            assert_eq!(e.pos, Pos { line: 1, col: 0 });
            assert_eq!(e.err,
                       ParseError::MismatchedBracket(
                           Parenkind::Round,
                           Pos { line: 0, col: 0 },
                           Parenkind::Square));
        }
        Ok(v) => panic!("expected failure, got {}", v),
    }
}

#[test]
fn strip_comments_drops_blank_lines() {
    assert_eq!(strip_comments("(a ;x\n;y\n\nb)\n"), "(a \nb)\n");
    assert_eq!(strip_comments(r"a \; b"), r"a \; b");
    assert_eq!(strip_comments(""), "");
}

#[test]
fn tokenizer_splits_at_brackets_and_whitespace() {
    let stripped = "ab( c]{";
    let ts: Vec<TokenWithPos> = tokenize(chars_with_pos(stripped)).collect();
    let tokens: Vec<Token> = ts.into_iter().map(|t| t.0).collect();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].to_string(), "ab");
    assert_eq!(tokens[1], Token::Open(Parenkind::Round));
    assert_eq!(tokens[2].to_string(), "c");
    assert_eq!(tokens[3], Token::Close(Parenkind::Square));
    assert_eq!(tokens[4], Token::Open(Parenkind::Curly));
}

#[test]
fn tokenizer_positions() {
    let stripped = "(ab\n cd)";
    let ts: Vec<TokenWithPos> = tokenize(chars_with_pos(stripped)).collect();
    assert_eq!(ts[0].1, Pos { line: 0, col: 0 });
    assert_eq!(ts[1].1, Pos { line: 0, col: 1 });
    assert_eq!(ts[2].1, Pos { line: 1, col: 1 });
    assert_eq!(ts[3].1, Pos { line: 1, col: 3 });
}
