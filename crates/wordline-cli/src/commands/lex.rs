//! Lex command - list the words found in the text.

use wordline_lexer::Scanner;

pub(crate) fn run(text: &str) -> miette::Result<()> {
    print!("{}", listing(text));
    Ok(())
}

fn listing(text: &str) -> String {
    let mut out = String::new();
    let mut word_count = 0;

    for word in Scanner::new(text) {
        out.push_str(&format!(
            "{}..{}  {:?}\n",
            word.span.start, word.span.end, word.text
        ));
        word_count += 1;
    }

    out.push_str(&format!("\n{} words\n", word_count));
    out
}
