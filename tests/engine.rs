//! End-to-end checks through the public API: picker, game and hints together

use pretty_assertions::assert_eq;
use wordle_engine::core::{Game, GameState, GuessError, GuessHint, NewGameError};
use wordle_engine::session::Session;
use wordle_engine::wordlists::{PickerError, RandomWordPicker, SequentialWordPicker, WordPicker};

use wordle_engine::core::LetterHint::{Correct as C, Incorrect as I, PlacementIncorrect as P};

#[test]
fn picked_word_plays_to_a_win() {
    let mut picker = RandomWordPicker::from_list(["hello"]).unwrap();
    let mut game = Game::classic(&picker.pick_word()).unwrap();

    assert_eq!(
        game.guess("world"),
        Ok(GameState::Pending {
            attempts_remaining: Some(5)
        })
    );
    assert_eq!(
        game.last_guess_hint().unwrap().letter_hints(),
        vec![I, P, I, C, I]
    );
    assert_eq!(game.guess("hello"), Ok(GameState::Won { attempts: 2 }));
    assert_eq!(
        game.guess("help"),
        Err(GuessError::GameOver(GameState::Won { attempts: 2 }))
    );
}

#[test]
fn speed_erase_hint() {
    let mut game = Game::new("SPEED", None).unwrap();
    game.guess("ERASE").unwrap();
    let hint: &GuessHint = game.last_guess_hint().unwrap();
    assert_eq!(
        hint.letters(),
        &[('E', P), ('R', I), ('A', I), ('S', P), ('E', P)]
    );
}

#[test]
fn rejected_guesses_leave_history_untouched() {
    let mut game = Game::new("speed", Some(3)).unwrap();
    game.guess("crane").unwrap();
    let before = game.clone();

    assert!(matches!(
        game.guess("cranes"),
        Err(GuessError::LengthInvalid {
            given: 6,
            expected: 5
        })
    ));
    assert_eq!(game.guess("CRANE"), Err(GuessError::AlreadyPlayed));
    assert_eq!(game, before);
}

#[test]
fn limit_three_loses_after_three_misses() {
    let mut game = Game::new("speed", Some(3)).unwrap();
    let states: Vec<GameState> = ["crane", "slate", "audio"]
        .into_iter()
        .map(|guess| game.guess(guess).unwrap())
        .collect();

    assert_eq!(
        states,
        vec![
            GameState::Pending {
                attempts_remaining: Some(2)
            },
            GameState::Pending {
                attempts_remaining: Some(1)
            },
            GameState::Lost,
        ]
    );
    assert_eq!(game.guess_hints().len(), 3);
}

#[test]
fn empty_target_is_rejected() {
    assert_eq!(Game::new("", Some(6)), Err(NewGameError::EmptyTarget));
}

#[test]
fn file_picker_single_word() {
    let path = std::env::temp_dir().join(format!("wordle_engine_it_{}.txt", std::process::id()));
    std::fs::write(&path, "HELLO\n").unwrap();

    let mut picker = RandomWordPicker::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(picker.picks().take(25).all(|word| word == "HELLO"));
}

#[test]
fn file_picker_unreadable() {
    let path = std::env::temp_dir().join("wordle_engine_it_missing_word_list.txt");
    assert!(matches!(
        RandomWordPicker::from_path(path),
        Err(PickerError::Io(_))
    ));
}

#[test]
fn session_runs_consecutive_games() {
    let picker = SequentialWordPicker::from_list(["speed", "crane"]).unwrap();
    let mut session = Session::new(picker, Some(6)).unwrap();

    session.guess("speed").unwrap();
    session.new_game().unwrap();
    assert_eq!(session.game().target(), "CRANE");
    assert_eq!(session.guess("crane"), Ok(GameState::Won { attempts: 1 }));

    let stats = session.statistics();
    assert_eq!(stats.games_played, 2);
    assert_eq!(stats.games_won, 2);
    assert_eq!(stats.guess_distribution.get(&1), Some(&2));
}
