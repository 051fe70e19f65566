use anyhow::Result;
use plistline::parse::parse_list;
use plistline::plist::lookup;
use plistline::value::{keyword, string, symbol, Atom};

#[test]
fn not_found() -> Result<()> {
    let l = parse_list("(:foo bar :baz 5)")?;
    assert_eq!(lookup(&l, "hello"), None);
    Ok(())
}

#[test]
fn keyword_last() -> Result<()> {
    let l = parse_list("(:foo bar :baz)")?;
    assert_eq!(lookup(&l, "baz"), None);
    assert_eq!(lookup(&l, "foo"), Some(&symbol("bar")));
    Ok(())
}

#[test]
fn symbol_value() -> Result<()> {
    let l = parse_list("(:hello there :how are :you)")?;
    assert_eq!(lookup(&l, "hello"), Some(&symbol("there")));
    assert_eq!(lookup(&l, "how"), Some(&symbol("are")));
    assert_eq!(lookup(&l, "you"), None);
    Ok(())
}

#[test]
fn number_value() -> Result<()> {
    let l = parse_list("(:foo \"hello\" :bar 7)")?;
    assert_eq!(lookup(&l, "bar"), Some(&Atom::Number(7)));
    assert_eq!(lookup(&l, "foo"), Some(&string("hello")));
    Ok(())
}

#[test]
fn first_match_wins() -> Result<()> {
    let l = parse_list("(:a 1 :a 2)")?;
    assert_eq!(l.lookup("a"), Some(&Atom::Number(1)));
    Ok(())
}

#[test]
fn only_keywords_match() -> Result<()> {
    let l = parse_list("(a 1 \"b\" 2 c :a 3)")?;
    assert_eq!(l.lookup("b"), None);
    assert_eq!(l.lookup("c"), None);
    assert_eq!(l.lookup("a"), Some(&Atom::Number(3)));
    Ok(())
}

#[test]
fn value_may_be_a_keyword() -> Result<()> {
    let l = parse_list("(:a :b c)")?;
    assert_eq!(l.lookup("a"), Some(&keyword("b")));
    assert_eq!(l.lookup("b"), Some(&symbol("c")));
    Ok(())
}

#[test]
fn typed_lookup() -> Result<()> {
    let l = parse_list("(:s \"str\" :y sym :n 0x2a :k :other)")?;
    assert_eq!(l.lookup_str("s"), Some("str"));
    assert_eq!(l.lookup_str("y"), Some("sym"));
    assert_eq!(l.lookup_str("n"), None);
    assert_eq!(l.lookup_str("k"), None);
    assert_eq!(l.lookup_number("n"), Some(42));
    assert_eq!(l.lookup_number("s"), None);
    assert_eq!(l.lookup_number("missing"), None);
    Ok(())
}

#[test]
fn pairs() -> Result<()> {
    let l = parse_list("(x :a 1 :b :c :d)")?;
    let ps: Vec<_> = l.pairs().collect();
    assert_eq!(ps, vec![("a", Some(&Atom::Number(1))),
                        ("b", Some(&keyword("c"))),
                        ("d", None)]);
    assert_eq!(parse_list("()")?.pairs().count(), 0);
    Ok(())
}
