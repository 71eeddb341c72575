#![expect(missing_docs)]

use lineargs::{Args, ScannerOptions, Token, parse_args};

#[test]
fn options_load_from_partial_config() {
    let options: ScannerOptions = serde_json::from_str(r#"{"infield_brackets": true}"#).unwrap();
    assert!(options.infield_brackets);
    assert!(!options.reject_unterminated);

    let options: ScannerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, ScannerOptions::default());
}

#[test]
fn args_serialize_with_sorted_options() {
    let args = parse_args("--zeta=1 -alpha 'file one' two");
    insta::assert_snapshot!(
        serde_json::to_string(&args).unwrap(),
        @r#"{"options":{"alpha":"","zeta":"1"},"arguments":["file one","two"]}"#
    );

    let back: Args = serde_json::from_str(&serde_json::to_string(&args).unwrap()).unwrap();
    assert_eq!(back, args);
}

#[test]
fn token_serializes_delimiter() {
    let token = Token {
        text: "a b".to_owned(),
        delim: Some('"'),
    };
    insta::assert_snapshot!(
        serde_json::to_string(&token).unwrap(),
        @r#"{"text":"a b","delim":"\""}"#
    );
}
