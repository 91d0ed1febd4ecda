use engine::{reflow_text, ReflowStats};

struct Case {
    name: &'static str,
    input: &'static str,
    expected_text: &'static str,
    expected_stats: ReflowStats,
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "wrapped_prose_with_page_number",
            input: "It was the best of times, it was the worst of times, it\n\
                    was the age of wisdom, it was the age of foolishness, it\n\
                    42\n\
                    was the epoch of belief, it was the epoch of incredulity.\n",
            expected_text: "It was the best of times, it was the worst of times, it \
                            was the age of wisdom, it was the age of foolishness, it \
                            was the epoch of belief, it was the epoch of incredulity.",
            expected_stats: ReflowStats {
                blank_lines: 0,
                short_lines: 1,
                substantial_lines: 3,
                space_joins: 2,
                hyphen_joins: 0,
            },
        },
        Case {
            name: "hyphenated_word_across_lines",
            input: "    The committee reached an extraordinarily contro-    \n\
                    \tversial decision late on the evening of the vote.\t\n",
            expected_text: "The committee reached an extraordinarily controversial \
                            decision late on the evening of the vote.",
            expected_stats: ReflowStats {
                blank_lines: 0,
                short_lines: 0,
                substantial_lines: 2,
                space_joins: 0,
                hyphen_joins: 1,
            },
        },
        Case {
            name: "two_paragraphs_crlf",
            input: "CHAPTER I\r\n\
                    \r\n\
                    The first paragraph of the chapter is long enough to keep.\r\n\
                    \r\n\
                    The second paragraph of the chapter is long enough as well.\r\n",
            expected_text: "\nThe first paragraph of the chapter is long enough to keep.\n\
                            The second paragraph of the chapter is long enough as well.",
            expected_stats: ReflowStats {
                blank_lines: 2,
                short_lines: 1,
                substantial_lines: 2,
                space_joins: 0,
                hyphen_joins: 0,
            },
        },
        Case {
            name: "non_bmp_and_accents_count_as_one",
            input: "Ünïcödé line with enough characters to pass the limit\n\
                    \u{1F600}\u{1F600}\u{1F600} short emoji line\n\
                    Ünïcödé continues after the dropped emoji fragment line\n",
            expected_text: "Ünïcödé line with enough characters to pass the limit \
                            Ünïcödé continues after the dropped emoji fragment line",
            expected_stats: ReflowStats {
                blank_lines: 0,
                short_lines: 1,
                substantial_lines: 2,
                space_joins: 1,
                hyphen_joins: 0,
            },
        },
    ];

    for case in cases {
        let doc = reflow_text(case.input);
        assert_eq!(
            doc.text, case.expected_text,
            "text mismatch for {}",
            case.name
        );
        assert_eq!(
            doc.stats, case.expected_stats,
            "stats mismatch for {}",
            case.name
        );
    }
}

#[test]
fn short_line_elision_anywhere() {
    let lines = [
        "A first line that is comfortably longer than forty chars.",
        "A second line that is also comfortably over the threshold-",
        "",
        "A third line, opening the next paragraph, long enough too.",
    ];
    let baseline = reflow_text(&lines.join("\n")).text;

    for gap in 0..=lines.len() {
        let mut noisy: Vec<&str> = lines.to_vec();
        noisy.insert(gap, "  iv  ");
        let out = reflow_text(&noisy.join("\n")).text;
        assert_eq!(out, baseline, "short line inserted at {gap} changed output");
    }
}
