#![expect(missing_docs)]

use std::io::{self, BufRead};

use lineargs::{Scanner, ScannerOptions, Token, args_n, split_options, tokenize, tokenize_n};

fn infield() -> ScannerOptions {
    ScannerOptions {
        infield_brackets: true,
        ..Default::default()
    }
}

#[test]
fn tokenize_strips_quotes_and_escapes() {
    assert_eq!(tokenize(r#""abc""#, ScannerOptions::default()), ["abc"]);
    assert_eq!(tokenize(r#"\"abc\""#, ScannerOptions::default()), [r#""abc""#]);
}

#[test]
fn tokenize_infield_brackets() {
    let line = r#"set x={"value":1} y=[1, 2]"#;
    assert_eq!(
        tokenize(line, infield()),
        ["set", r#"x={"value":1}"#, "y=[1, 2]"]
    );
    assert_eq!(
        tokenize(line, ScannerOptions::default()),
        ["set", r#"x={"value":1}"#, "y=[1,", "2]"]
    );
}

#[test]
fn comment_is_single_token() {
    assert_eq!(
        tokenize("#comment text", ScannerOptions::default()),
        ["#comment text"]
    );
}

#[test]
fn tokenize_n_zero_is_unbounded() {
    let (tokens, rest) = tokenize_n("a b c", 0, ScannerOptions::default());
    assert_eq!(tokens, ["a", "b", "c"]);
    assert!(rest.is_empty());
}

#[test]
fn tokenize_n_one_is_all_remainder() {
    let (tokens, rest) = tokenize_n("  a 'b c'  ", 1, ScannerOptions::default());
    assert!(tokens.is_empty());
    assert_eq!(rest, "a 'b c'");
}

#[test]
fn args_n_appends_remainder() {
    let line = r#"the   quick "brown fox" jumps"#;
    assert_eq!(
        args_n(line, 3, ScannerOptions::default()),
        ["the", "quick", r#""brown fox" jumps"#]
    );
    assert_eq!(
        args_n(line, 10, ScannerOptions::default()),
        ["the", "quick", "brown fox", "jumps"]
    );
    assert_eq!(args_n("", 3, ScannerOptions::default()), Vec::<String>::new());
}

#[test]
fn split_options_without_arguments() {
    let (options, rest) = split_options("  -a -b=c ", ScannerOptions::default());
    assert_eq!(options, ["-a", "-b=c"]);
    assert_eq!(rest, "");
}

#[test]
fn split_options_infield_value() {
    let (options, rest) = split_options(r#"--json={"a b": 1} run now"#, infield());
    assert_eq!(options, [r#"--json={"a b": 1}"#]);
    assert_eq!(rest, "run now");
}

#[test]
fn strict_helpers_stop_at_unterminated_token() {
    let options = ScannerOptions {
        reject_unterminated: true,
        ..Default::default()
    };
    assert_eq!(tokenize(r#"a b "c d"#, options), ["a", "b"]);
}

#[test]
fn scanner_per_line_of_a_reader() -> Result<(), lineargs::ScanError> {
    let input = "cd /tmp\nls -la 'my dir'\n\n# done\n";
    let mut lines = Vec::new();
    for line in io::Cursor::new(input).lines() {
        let line = line?;
        let tokens = Scanner::from_str(&line).collect::<Result<Vec<Token>, _>>()?;
        lines.push(tokens.into_iter().map(String::from).collect::<Vec<_>>());
    }
    assert_eq!(
        lines,
        [
            vec!["cd", "/tmp"],
            vec!["ls", "-la", "my dir"],
            vec![],
            vec!["# done"],
        ]
    );
    Ok(())
}

#[test]
fn token_display_and_quoting() {
    let mut scanner = Scanner::from_str(r#"'a b' c"#);
    let quoted = scanner.next_token().unwrap().unwrap();
    let plain = scanner.next_token().unwrap().unwrap();
    assert!(quoted.is_quoted());
    assert!(!plain.is_quoted());
    assert_eq!(format!("{quoted}|{plain}"), "a b|c");
}
