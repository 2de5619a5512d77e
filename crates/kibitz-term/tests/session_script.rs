//! Scripted shell sessions: commands in, rendered text out.

use kibitz_term::{Shell, TermConfig};

fn run(script: &str) -> String {
    let config = TermConfig {
        seed: Some(11),
        ..TermConfig::default()
    };
    let mut out = Vec::new();
    Shell::with_config(config).run_with(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn fools_mate_by_clicks() {
    let script = "\
click f2
click f3
click e7
click e5
click g2
click g4
click d8
click h4
status
click e1
";
    let output = run(script);
    assert!(output.contains("moved f2-f3"));
    assert!(output.contains("moved d8-h4"));
    assert!(output.contains("DEFEAT: white is checkmated"));
    assert!(output.contains("e1 cannot save the king"));
}

#[test]
fn check_restricts_selection_to_saving_moves() {
    let script = "\
position 4k3/8/8/8/8/8/3PP3/r3K3 w
click d2
click e1
";
    let output = run(script);
    assert!(output.contains("white to move, in check"));
    assert!(output.contains("d2 cannot save the king"));
    assert!(output.contains("selected e1: f2"));
    assert!(output.contains("check: king on e1 is attacked"));
}

#[test]
fn bad_input_keeps_the_shell_alive() {
    let script = "\
position 8/8/8 w
set colour blue
set legality sideways
click 6 4
moves
";
    let output = run(script);
    assert!(output.contains("error: invalid placement"));
    assert!(output.contains("error: unknown option: colour"));
    assert!(output.contains("error: invalid value for legality: sideways"));
    assert!(output.contains("e2: e3 e4"));
}

#[test]
fn new_game_restores_start() {
    let output = run("click e2\nclick e4\nnew\nstatus\n");
    assert!(output.ends_with("white to move\n"));
}
