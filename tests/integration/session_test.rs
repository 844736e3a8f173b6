//! Transcript tests for the command loop.

use pretty_assertions::assert_eq;
use route_store::config::ConsoleConfig;
use route_store::session::{ExitReason, Session, SessionOptions};
use std::io::Cursor;

fn transcript(input: &str) -> (ExitReason, String) {
    let mut session = Session::new(SessionOptions::default());
    let mut out = Vec::new();
    let reason = session.run(Cursor::new(input), &mut out).unwrap();
    (reason, String::from_utf8(out).unwrap())
}

#[test]
fn test_reference_scenario() {
    let input = "\
addroute Clementi BuonaVista 12
getdistance clementi buonavista
getdistance Clementi JurongWest
exit
";
    let (reason, out) = transcript(input);

    assert_eq!(reason, ExitReason::ExitCommand);
    assert_eq!(
        out,
        "\
Route from Clementi to BuonaVista with distance 12km added
Distance from clementi to buonavista is 12
No route exists from Clementi to JurongWest!
"
    );
}

#[test]
fn test_full_interaction_with_prompts() {
    let input = "\
addroute Clementi BuonaVista 12
getdistance Clementi BuonaVista
getdistance clementi buonavista
getdistance Clementi JurongWest
addroute Clementi JurongWest 24
getdistance Clementi JurongWest
exit
";
    let options = SessionOptions::from_config(&ConsoleConfig::default(), false);
    let mut session = Session::new(options);
    let mut out = Vec::new();
    session.run(Cursor::new(input), &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\
Welcome to SimpleRouteStore!
Enter command:Route from Clementi to BuonaVista with distance 12km added
Enter command:Distance from Clementi to BuonaVista is 12
Enter command:Distance from clementi to buonavista is 12
Enter command:No route exists from Clementi to JurongWest!
Enter command:Route from Clementi to JurongWest with distance 24km added
Enter command:Distance from Clementi to JurongWest is 24
Enter command:"
    );
}

#[test]
fn test_malformed_addroute_never_mutates() {
    let input = "\
addroute A B
addroute A B x
addroute A B 0
addroute A B -5
addroute A
addroute
getdistance A B
";
    let (reason, out) = transcript(input);

    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(
        out,
        "\
invalid command format :addroute A B
invalid command format :addroute A B x
invalid command format :addroute A B 0
invalid command format :addroute A B -5
invalid command format :addroute A
invalid command format :addroute
No route exists from A to B!
"
    );
}

#[test]
fn test_invalid_lines_echo_original() {
    let input = "\n   \nhello there\n  getdistance   onlyone  \n";
    let (_, out) = transcript(input);

    assert_eq!(
        out,
        concat!(
            "invalid command format :\n",
            "invalid command format :\n",
            "invalid command format :hello there\n",
            "invalid command format :  getdistance   onlyone  \n",
        )
    );
}

#[test]
fn test_overwrite_reports_latest_distance() {
    let input = "\
addroute Changi Bedok 10
addroute BEDOK changi 7
getdistance changi bedok
";
    let (_, out) = transcript(input);

    assert_eq!(
        out,
        "\
Route from Changi to Bedok with distance 10km added
Route from BEDOK to changi with distance 7km added
Distance from changi to bedok is 7
"
    );
}

#[test]
fn test_capacity_exhaustion_is_reported() {
    let mut input = String::new();
    for i in 0..11 {
        input.push_str(&format!("addroute Hub Stop{i} {}\n", i + 1));
    }
    input.push_str("getdistance Hub Stop10\n");
    input.push_str("getdistance stop0 hub\n");
    input.push_str("addroute Hub Stop3 30\n");

    let (_, out) = transcript(&input);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 14);
    assert_eq!(lines[9], "Route from Hub to Stop9 with distance 10km added");
    assert_eq!(lines[10], "No more space to store locations");
    assert_eq!(lines[11], "No route exists from Hub to Stop10!");
    assert_eq!(lines[12], "Distance from stop0 to hub is 1");
    assert_eq!(lines[13], "Route from Hub to Stop3 with distance 30km added");
}

#[test]
fn test_distance_reads_back_as_typed() {
    let input = "\
addroute A B 007
getdistance A B
addroute C D +8
getdistance d c
";
    let (_, out) = transcript(input);

    assert_eq!(
        out,
        "\
Route from A to B with distance 007km added
Distance from A to B is 007
Route from C to D with distance +8km added
Distance from d to c is +8
"
    );
}

#[test]
fn test_keywords_are_case_insensitive() {
    let (reason, out) = transcript("AddRoute a b 4\nGETDISTANCE B A\nExIt\n");

    assert_eq!(reason, ExitReason::ExitCommand);
    assert_eq!(
        out,
        "\
Route from a to b with distance 4km added
Distance from B to A is 4
"
    );
}
