//! End-to-end round tests through the public API.

use std::io::Cursor;

use hmac_rps::{
    CommittedMove, GameRules, Outcome, Reveal, Round, RoundResult, SecretKey, Signer, Tag,
};

fn play_fixed(moves: &[&str], computer: &str, input: &str) -> (RoundResult, String, Tag) {
    let rules = GameRules::new(moves.iter().copied()).unwrap();
    let committed = CommittedMove::commit(computer, SecretKey::from_bytes([42u8; 32])).unwrap();
    let round = Round::with_commitment(&rules, committed).unwrap();
    let tag = round.commitment().tag.clone();

    let mut output = Vec::new();
    let result = round.play(Cursor::new(input.to_string()), &mut output).unwrap();
    (result, String::from_utf8(output).unwrap(), tag)
}

#[test]
fn classic_scenarios() {
    let moves = ["Rock", "Paper", "Scissors"];

    let (_, output, _) = play_fixed(&moves, "Scissors", "1\n");
    assert!(output.contains("You win!"));

    let (_, output, _) = play_fixed(&moves, "Paper", "1\n");
    assert!(output.contains("You lose("));

    let (_, output, _) = play_fixed(&moves, "Rock", "1\n");
    assert!(output.contains("It's a draw!"));
}

#[test]
fn third_party_can_verify_from_printed_text() {
    let (result, output, _) = play_fixed(&["Rock", "Paper", "Scissors", "Lizard", "Spock"], "Lizard", "5\n");

    // Everything a verifier needs is on stdout
    let tag_text = output
        .lines()
        .find_map(|l| l.strip_prefix("HMAC: "))
        .unwrap();
    let key_text = output
        .lines()
        .find_map(|l| l.strip_prefix("HMAC key: "))
        .unwrap();
    let computer = output
        .lines()
        .find_map(|l| l.strip_prefix("Computer's move: "))
        .unwrap();

    let tag = Tag::from_base64(tag_text).unwrap();
    let signer = Signer::new(SecretKey::from_base64(key_text).unwrap()).unwrap();
    assert_eq!(signer.sign(computer), tag);
    assert!(!signer.verify("Rock", &tag));

    // Spock (index 4) vs Lizard (index 3): Lizard precedes Spock, so Spock wins
    assert!(matches!(result, RoundResult::Resolved { outcome: Outcome::Win, .. }));
}

#[test]
fn reveal_matches_published_tag() {
    let (result, _, tag) = play_fixed(&["a", "b", "c"], "c", "?\n1\n");

    let reveal = match result {
        RoundResult::Resolved { reveal, .. } => reveal,
        other => panic!("unexpected result: {:?}", other),
    };

    let published = hmac_rps::Commitment { tag };
    assert!(reveal.verify(&published).is_ok());

    let forged = Reveal {
        move_name: "a".to_string(),
        ..reveal
    };
    assert!(forged.verify(&published).is_err());
}

#[test]
fn help_table_printed_once_per_request() {
    let (_, output, _) = play_fixed(&["Rock", "Paper", "Scissors"], "Rock", "?\n?\n0\n");
    assert_eq!(output.matches("1st Player \\ 2nd Player").count(), 2);
    assert!(!output.contains("HMAC key:"));
}
