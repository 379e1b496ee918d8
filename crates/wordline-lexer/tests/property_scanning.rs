use proptest::prelude::*;
use wordline_lexer::{count_words, words, Scanner};

const MAX_INPUT_CHARS: usize = 128;

fn spaced_text() -> impl Strategy<Value = String> {
    let alphabet = prop_oneof![
        Just(' '),
        Just('a'),
        Just('Z'),
        Just('!'),
        Just('\t'),
        Just('é'),
    ];
    proptest::collection::vec(alphabet, 0..=MAX_INPUT_CHARS)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn scanner_matches_maximal_non_space_runs(input in spaced_text()) {
        let expected: Vec<&str> = input.split(' ').filter(|run| !run.is_empty()).collect();
        let scanned: Vec<&str> = words(&input).map(|w| w.text).collect();
        prop_assert_eq!(scanned, expected);
    }

    #[test]
    fn count_words_agrees_with_scanner(input in spaced_text()) {
        prop_assert_eq!(count_words(&input), Scanner::new(&input).count());
    }

    #[test]
    fn words_never_contain_spaces_and_are_non_empty(input in spaced_text()) {
        for word in words(&input) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.text.contains(' '));
            prop_assert_eq!(&input[word.span.range()], word.text);
        }
    }

    #[test]
    fn spans_are_strictly_increasing(input in spaced_text()) {
        let spans: Vec<_> = words(&input).map(|w| w.span).collect();
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn scanner_terminates_on_arbitrary_input(input in ".{0,128}") {
        let mut scanner = Scanner::new(&input);
        let mut steps = 0;
        while scanner.next_word().is_some() {
            steps += 1;
            prop_assert!(steps <= input.len());
        }
        prop_assert!(scanner.next_word().is_none());
    }
}
