use crate::Error;

fn not_consumed(input: &str, offset: usize) -> Error {
    Error::InputIsNotConsumed {
        input: input.to_owned(),
        offset,
        payload: "()".to_owned(),
    }
}

#[test]
fn error_display() {
    let error = Error::NoMatchingParsers {
        input: "?".to_owned(),
    };
    insta::assert_snapshot!(error.to_string(), @"no matching parsers");
    insta::assert_snapshot!(not_consumed("1 +", 1).to_string(), @"input is not consumed at offset 1");
}

#[test]
fn printer_unconsumed_input() {
    let result = not_consumed("1 + 2 )", 6).render();
    insta::assert_snapshot!(result, @r"
    error: input is not consumed
      |
    1 | 1 + 2 )
      |       ^ unconsumed input
    ");
}

#[test]
fn printer_no_matching_parsers() {
    let error = Error::NoMatchingParsers {
        input: "?1".to_owned(),
    };
    insta::assert_snapshot!(error.render(), @r"
    error: no matching parsers
      |
    1 | ?1
      | ^ no parser matches here
    ");
}

#[test]
fn printer_with_path() {
    let error = not_consumed("[1, 2],", 6);
    let result = error.printer().path("input.json").render();
    insta::assert_snapshot!(result, @r"
    error: input is not consumed
     --> input.json:1:7
      |
    1 | [1, 2],
      |       ^ unconsumed input
    ");
}

#[test]
fn printer_multibyte_caret() {
    let result = not_consumed("ab→c", 2).render();
    insta::assert_snapshot!(result, @r"
    error: input is not consumed
      |
    1 | ab→c
      |   ^ unconsumed input
    ");
}

#[test]
fn error_accessors() {
    let error = not_consumed("12 x", 3);
    assert_eq!(error.input(), "12 x");
    assert_eq!(error.offset(), 3);

    let error = Error::NoMatchingParsers {
        input: String::new(),
    };
    assert_eq!(error.offset(), 0);
}
