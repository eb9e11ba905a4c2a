use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use std::path::PathBuf;
use wordle_helper::core::{GuessRecord, Word, mark};
use wordle_helper::output::Renderer;
use wordle_helper::session::{Repl, Session};
use wordle_helper::wordlists::{Dictionaries, Language};

fn play(script: &str, dictionaries: Dictionaries) -> (Session, String) {
    let mut output = Vec::new();
    let session = Repl::new(
        Cursor::new(script.to_string()),
        &mut output,
        StdRng::seed_from_u64(2024),
        Session::default(),
        dictionaries,
        Renderer::plain(),
    )
    .run()
    .unwrap();
    (session, String::from_utf8(output).unwrap())
}

fn temp_dictionary(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "wordle_helper_{name}_{}.txt",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn narrows_to_the_target() {
    let (session, output) = play(
        "adieu YY---\nrecord -bGoGaGrGd\nsuggest\nquit\n",
        Dictionaries::default(),
    );

    assert!(output.contains("1 candidate (EN):\n  hoard"));
    assert_eq!(session.guesses().len(), 2);
    assert!(!session.is_running());
}

#[test]
fn undo_restores_previous_candidates() {
    let (_, output) = play(
        "adieu YY---\ns\nboard -GGGG\ns\nundo\ns\nq\n",
        Dictionaries::default(),
    );

    let counts: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("(EN):"))
        .collect();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[0], counts[2]);
    assert_eq!(counts[1], "> 1 candidate (EN):");
    assert!(output.contains("Removed BOARD -GGGG"));
}

#[test]
fn undo_on_fresh_session_is_noop() {
    let (session, output) = play("undo\nshow\nq\n", Dictionaries::default());
    assert!(output.contains("Nothing to undo."));
    assert!(output.contains("Guesses: 0 recorded"));
    assert!(session.guesses().is_empty());
}

#[test]
fn spanish_dictionary_handles_enye() {
    let path = temp_dictionary("es", "señor\nniños\nsueño\nperro\n");
    let dictionaries = Dictionaries::new(None, Some(path.clone()));

    let (session, output) = play("lang es\nniños --GGY\nsuggest\nq\n", dictionaries);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(session.language(), Language::Es);
    assert!(output.contains("Language set to ES."));
    assert!(output.contains("1 candidate (ES):\n  señor"));
}

#[test]
fn file_dictionary_is_reread_on_every_suggest() {
    let path = temp_dictionary("reread", "crane\nslate\n");
    let dictionaries = Dictionaries::new(Some(path.clone()), None);

    let mut session = Session::default();
    let first = session.handle_line("s", &dictionaries).unwrap();
    std::fs::write(&path, "crane\nslate\nirate\n").unwrap();
    let second = session.handle_line("s", &dictionaries).unwrap();
    std::fs::remove_file(&path).unwrap();

    let render = |reply| Renderer::plain().render(&reply);
    assert!(render(first).starts_with("2 candidates"));
    assert!(render(second).starts_with("3 candidates"));
}

#[test]
fn missing_dictionary_reports_and_continues() {
    let dictionaries = Dictionaries::new(Some(PathBuf::from("/nonexistent/en.txt")), None);
    let (session, output) = play("adieu YY---\nsuggest\nshow\nq\n", dictionaries);

    assert!(output.contains("Error: cannot open dictionary /nonexistent/en.txt"));
    assert!(output.contains("1. ADIEU YY---"));
    assert_eq!(session.guesses().len(), 1);
}

#[test]
fn feedback_from_real_target_always_keeps_it() {
    let dictionaries = Dictionaries::default();
    let target = Word::new("grate").unwrap();

    let mut session = Session::default();
    for guess in ["adieu", "slate", "crate"] {
        let guess = Word::new(guess).unwrap();
        let feedback = mark(&guess, &target);
        let record = GuessRecord::new(guess, feedback);
        session
            .handle_line(&format!("record {record}"), &dictionaries)
            .unwrap();
    }

    let out = Renderer::plain().render(&session.handle_line("suggest", &dictionaries).unwrap());
    assert!(out.contains("grate"), "{out}");
}
