//! One parser shared by many threads

use ipa_parser::IpaParser;
use std::sync::Arc;
use std::thread;

const INPUTS: &[&str] = &[
    "/a(b)c/",
    "[ˈt\u{0361}ʃa]",
    "˧˥˩",
    "/mà.pʰá/",
    "{a(ː)(b)}",
    "/a/b",
];

#[test]
fn shared_parser_gives_the_same_answers() {
    let parser = Arc::new(IpaParser::standard());
    let expected: Vec<_> = INPUTS.iter().map(|input| parser.parse(input)).collect();

    let handles: Vec<_> = (0..8)
        .map(|offset| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                (0..INPUTS.len())
                    .map(|i| {
                        let index = (i + offset) % INPUTS.len();
                        (index, parser.parse(INPUTS[index]))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (index, result) in handle.join().unwrap() {
            assert_eq!(result, expected[index], "input {}", INPUTS[index]);
        }
    }
}
