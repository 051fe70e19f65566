use anyhow::Result;
use plistline::context::{Context, StreamContext};
use plistline::parse::Malformation;
use plistline::pos::Pos;
use plistline::read::{read_all, read_file, read_with_context, write_all, write_file,
                      ReadError};

const INPUT: &[u8] = include_bytes!("t-input.plist");
const EXPECTED: &[u8] = include_bytes!("t-expected.plist");

#[test]
fn t1() -> Result<()> {
    let lists = read_all(INPUT)?;
    assert_eq!(lists.len(), 5);
    let mut out = Vec::<u8>::new();
    write_all(&mut out, &lists)?;
    assert_eq!(String::from_utf8(out)?, String::from_utf8(EXPECTED.to_vec())?);
    Ok(())
}

#[test]
fn reread_canonical_output() -> Result<()> {
    let lists = read_all(EXPECTED)?;
    let mut out = Vec::<u8>::new();
    write_all(&mut out, &lists)?;
    assert_eq!(out, EXPECTED);
    Ok(())
}

#[test]
fn values_from_file() -> Result<()> {
    let lists = read_all(INPUT)?;
    assert_eq!(lists[0].lookup_str("host"), Some("example.org"));
    assert_eq!(lists[0].lookup_number("port"), Some(5222));
    assert_eq!(lists[1].lookup_number("mask"), Some(0o755));
    assert_eq!(lists[2].lookup_str("name"), Some(r#"say \"hi\""#));
    assert!(lists[3].is_empty());
    Ok(())
}

#[test]
fn error_position_counts_lines() {
    let input = "(a)\n\n(b\n(c)\n";
    match read_all(input.as_bytes()) {
        Err(ReadError::Malformed(e)) => {
            assert_eq!(e.reason, Malformation::MissingCloseParen);
            assert_eq!(e.pos, Pos { line: 2, col: 2 });
        }
        r => panic!("expected a malformed input error, got {:?}", r),
    }
}

#[test]
fn error_message_with_context() {
    let input = "(a)\n(1x)\n";
    let e = read_with_context(
        input.as_bytes(),
        || -> Box<dyn Context> { Box::new(StreamContext::new("test")) })
        .unwrap_err();
    assert_eq!(e.to_string(),
               "malformed input: invalid number '1x' from (test)@2.1");
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let input: &[u8] = b"(a)\n(\xff)\n";
    assert!(matches!(read_all(input), Err(ReadError::IO(_))));
}

#[test]
fn file_round_trip() -> Result<()> {
    let path = std::env::temp_dir().join(
        format!("plistline-t1-{}.plist", std::process::id()));
    let lists = read_all(INPUT)?;
    write_file(&path, &lists)?;
    let reread = read_file(&path);
    std::fs::remove_file(&path)?;
    assert_eq!(reread?, lists);
    Ok(())
}

#[test]
fn missing_file() {
    let path = std::path::Path::new("/nonexistent/plistline.plist");
    let e = read_file(path).unwrap_err();
    assert!(matches!(e.err, ReadError::IO(_)));
    assert!(e.to_string().starts_with("\"/nonexistent/plistline.plist\": "));
}
