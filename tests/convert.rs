// tests/convert.rs

use console_markup::markup::{tokenize, TokenKind};
use console_markup::{convert, convert_traced, ConvertOptions};

const ESC: &str = "\x1b";

#[test]
fn converts_mixed_styles_colors_and_links() {
    let input = "<bold>Build</> <bright-green>passed</> in <rgb:255:128:0>3s</>, \
                 see <link:the log:https://ci.example.com/run/42>.";
    let expected = format!(
        "{ESC}[1mBuild{ESC}[0m {ESC}[92mpassed{ESC}[0m in {ESC}[38;2;255;128;0m3s{ESC}[0m, \
         see {ESC}]8;id=https://ci.example.com/run/42;https://ci.example.com/run/42{ESC}\\the log{ESC}]8;;{ESC}\\."
    );
    assert_eq!(convert(input), expected);
}

#[test]
fn background_and_hex_tags() {
    assert_eq!(
        convert("<bg-bright-black><hex:#FFFFFF>x</>"),
        format!("{ESC}[100m{ESC}[38;2;255;255;255mx{ESC}[0m")
    );
}

#[test]
fn malformed_markup_never_aborts() {
    let inputs = [
        "<rgb:x:y:z>",
        "<rgb:999:0:0>",
        "<hex:#12345g>",
        "<link:>",
        "<<",
        ">>",
        "<",
        ">",
        "<<<>>>",
        "<a <b <c",
        "unterminated <bold",
    ];
    for input in inputs {
        assert_eq!(convert(input), input, "input {:?}", input);
    }
}

#[test]
fn tokens_reassemble_input() {
    let input = "one <two:three four> <<five>> six</>\n";
    let rebuilt: String = tokenize(input).map(|t| t.text).collect();
    assert_eq!(rebuilt, input);
    assert_eq!(
        tokenize(input).filter(|t| t.kind == TokenKind::Tag).count(),
        2
    );
}

#[test]
fn diagnostics_are_written_per_token() {
    let options = ConvertOptions {
        diagnostics: true,
        ..ConvertOptions::default()
    };
    let mut trace = Vec::new();
    convert_traced("a <b> c", &options, &mut trace);
    let trace = String::from_utf8(trace).unwrap();
    assert_eq!(trace.lines().count(), tokenize("a <b> c").count());
}
