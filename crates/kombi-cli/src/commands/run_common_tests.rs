use indoc::indoc;
use kombi_lib::{CacheStats, Colors};

use super::run_common::{format_stats, to_json};

#[test]
fn json_output_modes() {
    let rows = vec![vec!["a", "b"], vec!["c"]];

    insta::assert_snapshot!(to_json(&rows, true).unwrap(), @r#"[["a","b"],["c"]]"#);
    assert_eq!(
        to_json(&rows, false).unwrap(),
        indoc! {r#"
            [
              [
                "a",
                "b"
              ],
              [
                "c"
              ]
            ]"#}
    );
}

#[test]
fn stats_line() {
    let stats = CacheStats { hits: 3, misses: 7 };
    insta::assert_snapshot!(format_stats(stats, Colors::OFF), @"cache: 3 hits, 7 misses");
    assert_eq!(
        format_stats(stats, Colors::ON),
        "\x1b[2mcache: 3 hits, 7 misses\x1b[0m"
    );
}
