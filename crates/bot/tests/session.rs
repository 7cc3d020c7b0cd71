use std::time::Duration;

use pursuit_bot::{BotConfig, ProtocolError, session};

const LAYOUT: &str = "5 5\n     \n     \n     \n     \n     \n";

fn play(input: &str) -> anyhow::Result<(String, session::SessionSummary)> {
    let mut output = Vec::new();
    let config = BotConfig {
        turn_budget: Duration::from_secs(60),
        ..BotConfig::default()
    };
    let summary = session::run(input.as_bytes(), &mut output, &config)?;
    Ok((String::from_utf8(output)?, summary))
}

#[test]
fn open_grid_agent_heads_for_rare_item() {
    let input = format!("{LAYOUT}0 0\n1\n0 1 0 0 ROCK 0 0\n1\n4 4 10\n");
    let (output, summary) = play(&input).unwrap();

    assert_eq!(output, "MOVE 0 4 4\n");
    assert_eq!(summary.turns, 1);
}

#[test]
fn one_line_per_turn_in_id_order() {
    let input = format!(
        "{LAYOUT}\
         0 0\n2\n3 1 2 2 PAPER 0 0\n1 1 0 0 ROCK 0 0\n0\n\
         1 0\n2\n3 1 2 3 PAPER 0 0\n1 1 0 1 ROCK 0 0\n0\n"
    );
    let (output, summary) = play(&input).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(summary.turns, 2);
    for line in lines {
        let commands: Vec<&str> = line.split('|').collect();
        assert_eq!(commands.len(), 2);
        assert!(commands[0].starts_with("MOVE 1 "));
        assert!(commands[1].starts_with("MOVE 3 "));
    }
}

#[test]
fn eliminated_agent_drops_out_of_output() {
    let input = format!(
        "{LAYOUT}\
         0 0\n2\n0 1 0 0 ROCK 0 0\n1 1 2 2 ROCK 0 0\n0\n\
         0 0\n1\n0 1 0 1 ROCK 0 0\n0\n"
    );
    let (output, _) = play(&input).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0].split('|').count(), 2);
    assert_eq!(lines[1].split('|').count(), 1);
    assert!(lines[1].starts_with("MOVE 0 "));
}

#[test]
fn no_living_agents_means_no_output() {
    let input = format!("{LAYOUT}0 0\n1\n0 0 2 2 SCISSORS 0 0\n0\n");
    let (output, summary) = play(&input).unwrap();

    assert!(output.is_empty());
    assert_eq!(summary.turns, 1);
}

#[test]
fn layout_only_input_ends_cleanly() {
    let (output, summary) = play(LAYOUT).unwrap();
    assert!(output.is_empty());
    assert_eq!(summary.turns, 0);
}

#[test]
fn truncated_turn_is_an_error() {
    let input = format!("{LAYOUT}0 0\n2\n0 1 0 0 ROCK 0 0\n");
    let error = play(&input).unwrap_err();

    let protocol = error.downcast_ref::<ProtocolError>().unwrap();
    assert!(matches!(
        protocol,
        ProtocolError::UnexpectedEof { line: 10, .. }
    ));
}

#[test]
fn out_of_bounds_agent_is_rejected() {
    let input = format!("{LAYOUT}0 0\n1\n0 1 9 0 ROCK 0 0\n0\n");
    let error = play(&input).unwrap_err();

    assert!(error.to_string().contains("turn 1"));
}
