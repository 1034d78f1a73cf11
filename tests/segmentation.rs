// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::env;

use textseg::config::AMBIGUOUS_WIDTH_VAR;
use textseg::{
    AmbiguousWidth, Boundaries, Config, Graphemes, State, first_line_segment, first_sentence,
    first_word, grapheme_cluster_count, reverse_string, rune_width, string_width,
    string_width_with,
};

const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
const FLAG_US: &str = "\u{1F1FA}\u{1F1F8}";

/// Texts whose word, sentence and line boundaries all fall on cluster boundaries.
fn samples() -> Vec<String> {
    let texts = [
        "",
        "Hello",
        "Hello, 世界",
        "U.S.A. yesterday. Mr. Smith left!\r\nNew paragraph\u{2029}End",
        "$(12) costs 3.5% of 1,000,000 (roughly).",
        concat!(
            "e\u{0301}t\u{00E9} caf\u{00E9}\u{0301}s ",
            "\u{0928}\u{092E}\u{0938}\u{094D}\u{0924}\u{0947}",
        ),
        concat!(
            "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8} ",
            "\u{30AB}\u{30BF}\u{30AB}\u{30CA}",
        ),
        "\u{05E6}\u{05D4}\"\u{05DC} can't stop\u{00A0}now \u{1F44B}\u{1F3FD}",
        concat!(
            "\u{65E5}\u{672C}\u{8A9E}\u{3002}\u{300C}\u{5F15}\u{7528}\u{300D}\u{3001}",
            "a\u{200D}b",
        ),
    ];
    let mut samples: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
    samples.push(format!("{FAMILY} and {FLAG_US}\u{1F1E9}\u{1F1EA} flags"));
    samples
}

fn steps(text: &str) -> Vec<(&str, Boundaries, usize)> {
    Graphemes::with_config(text, Config::new())
        .map(|s| (s.segment, s.boundaries, s.width))
        .collect()
}

/// Glues consecutive steps together until one ends on `flag`.
fn join_by(steps: &[(&str, Boundaries, usize)], flag: Boundaries) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    for &(segment, boundaries, _) in steps {
        current.push_str(segment);
        if boundaries.contains(flag) {
            result.push(std::mem::take(&mut current));
        }
    }
    assert!(current.is_empty(), "the last step must end on every boundary");
    result
}

fn words(mut text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut state = State::INITIAL;
    while let Some(w) = first_word(text, state) {
        result.push(w.segment);
        text = w.rest;
        state = w.state;
    }
    result
}

fn sentences(mut text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut state = State::INITIAL;
    while let Some(s) = first_sentence(text, state) {
        result.push(s.segment);
        text = s.rest;
        state = s.state;
    }
    result
}

fn lines(mut text: &str) -> Vec<(&str, bool)> {
    let mut result = Vec::new();
    let mut state = State::INITIAL;
    while let Some(l) = first_line_segment(text, state) {
        result.push((l.segment, l.must_break));
        text = l.rest;
        state = l.state;
    }
    result
}

#[test]
fn step_agrees_with_single_family_functions() {
    for text in samples() {
        let steps = steps(&text);
        assert_eq!(join_by(&steps, Boundaries::WORD), words(&text), "words of {text:?}");
        assert_eq!(
            join_by(&steps, Boundaries::SENTENCE),
            sentences(&text),
            "sentences of {text:?}"
        );

        let line_segments = lines(&text);
        let from_lines: Vec<_> = line_segments.iter().map(|&(s, _)| s).collect();
        assert_eq!(join_by(&steps, Boundaries::LINE), from_lines, "lines of {text:?}");

        let mandatory: Vec<_> = line_segments.iter().map(|&(_, m)| m).collect();
        let from_steps: Vec<_> = steps
            .iter()
            .filter(|(_, b, _)| b.contains(Boundaries::LINE))
            .map(|(_, b, _)| b.contains(Boundaries::LINE_MANDATORY))
            .collect();
        assert_eq!(from_steps, mandatory, "mandatory breaks of {text:?}");
    }
}

#[test]
fn resuming_reproduces_the_rest() {
    for text in samples() {
        let all = steps(&text);
        for skip in 0..all.len() {
            let mut iter = Graphemes::with_config(text.as_str(), Config::new());
            for _ in 0..skip {
                iter.next();
            }
            let resumed: Vec<_> =
                iter.clone().map(|s| (s.segment, s.boundaries, s.width)).collect();
            assert_eq!(resumed, all[skip..], "resuming {text:?} after {skip} clusters");
        }
    }
}

#[test]
fn bytes_and_strings_agree() {
    for text in samples() {
        let from_str: Vec<_> = steps(&text).iter().map(|&(s, b, w)| (s.as_bytes(), b, w)).collect();
        let from_bytes: Vec<_> = Graphemes::with_config(text.as_bytes(), Config::new())
            .map(|s| (s.segment, s.boundaries, s.width))
            .collect();
        assert_eq!(from_bytes, from_str);
    }
}

#[test]
fn width_adds_up_at_cluster_boundaries() {
    let config = Config::new();
    for text in samples() {
        let total = string_width_with(text.as_str(), &config);
        let mut offset = 0;
        for (segment, _, _) in steps(&text) {
            offset += segment.len();
            let (a, b) = text.split_at(offset);
            assert_eq!(
                string_width_with(a, &config) + string_width_with(b, &config),
                total,
                "{text:?} split at {offset}"
            );
        }
    }

    // Inside a ZWJ sequence the parts are measured as separate emoji.
    let (a, b) = FAMILY.split_at(FAMILY.find('\u{1F469}').unwrap_or_default());
    assert_ne!(
        string_width_with(a, &config) + string_width_with(b, &config),
        string_width_with(FAMILY, &config)
    );
}

#[test]
fn reversal_is_an_involution() {
    for text in samples() {
        assert_eq!(reverse_string(&reverse_string(&text)), text);
    }
    assert_eq!(reverse_string(&format!("a{FAMILY}b")), format!("b{FAMILY}a"));
}

#[test]
fn cluster_count_is_bounded_by_code_points() {
    for text in samples() {
        let count = grapheme_cluster_count(text.as_str());
        let code_points = text.chars().count();
        let longest = steps(&text).iter().map(|(s, _, _)| s.chars().count()).max().unwrap_or(1);
        assert!(count <= code_points);
        assert!(count >= code_points / longest);
    }
}

#[test]
fn scenarios() {
    assert_eq!(grapheme_cluster_count(""), 0);
    assert_eq!(grapheme_cluster_count("Hello"), 5);
    assert_eq!(grapheme_cluster_count(FAMILY), 1);
    assert_eq!(string_width(FAMILY), 2);
    assert_eq!(string_width("Hello, 世界"), 11);
    assert_eq!(grapheme_cluster_count(FLAG_US), 1);
    assert_eq!(string_width(FLAG_US), 2);
}

#[test]
fn abbreviations() {
    assert_eq!(words("U.S.A."), ["U.S.A", "."]);
    assert_eq!(sentences("U.S.A. yesterday. Then"), ["U.S.A. yesterday. ", "Then"]);
    assert_eq!(sentences("Mr. smith went home. He slept."), ["Mr. smith went home. ", "He slept."]);
}

#[test]
fn config_from_env_and_global() {
    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { env::set_var(AMBIGUOUS_WIDTH_VAR, "wide") };
    assert_eq!(Config::from_env().map(|c| c.ambiguous_width()).ok(), Some(AmbiguousWidth::Wide));
    unsafe { env::set_var(AMBIGUOUS_WIDTH_VAR, "7") };
    assert!(Config::from_env().is_err());
    unsafe { env::remove_var(AMBIGUOUS_WIDTH_VAR) };
    assert_eq!(Config::from_env().ok(), Some(Config::new()));

    // U+00B1 is East Asian Ambiguous. Nothing else in this file measures one via the global.
    Config::new().with_ambiguous_width(AmbiguousWidth::Wide).install();
    assert_eq!(Config::global().ambiguous_width(), AmbiguousWidth::Wide);
    assert_eq!(rune_width('\u{00B1}'), 2);
    Config::new().install();
    assert_eq!(rune_width('\u{00B1}'), 1);
}
