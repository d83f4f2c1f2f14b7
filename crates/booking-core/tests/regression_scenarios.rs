// crates/booking-core/tests/regression_scenarios.rs
use booking_core::BookingEngine;
use booking_protocol::line_codec::{format_output_line, parse_input_line};

const INPUT: &str = include_str!("data/scenarios.txt");
const EXPECTED: &str = include_str!("data/expected_output.txt");

fn replay(input: &str) -> Vec<String> {
    let mut engine = BookingEngine::new();
    input
        .lines()
        .filter_map(parse_input_line)
        .map(|msg| format_output_line(&engine.process_message(msg)))
        .collect()
}

#[test]
fn full_input_matches_reference_output() {
    let actual = replay(INPUT);
    let expected: Vec<&str> = EXPECTED.lines().filter(|l| !l.trim().is_empty()).collect();

    for (i, (got, want)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(got, want, "output line {} differs", i + 1);
    }
    assert_eq!(actual.len(), expected.len(), "number of output lines differs");
}

#[test]
fn every_scenario_line_produces_one_output() {
    let commands = INPUT
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count();

    assert_eq!(replay(INPUT).len(), commands);
}

#[test]
fn scenarios_are_deterministic() {
    assert_eq!(replay(INPUT), replay(INPUT));
}
