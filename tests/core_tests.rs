//! Integration tests for settings and save-file handling
//!
//! Exercises the configuration layer and the JSON gateway together the way the
//! binary wires them: settings pick the save path, the session writes to it.

use std::fs;
use std::path::PathBuf;

use chessboard::core::settings::{load_settings, save_settings};
use chessboard::persistence::{JsonFileStore, PersistenceGateway, SavedGame};
use chessboard::{EngineSettings, GameSession, Position};

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("chessboard-core-{}", uuid::Uuid::new_v4()))
}

#[test]
fn test_settings_choose_save_location() {
    //! A session started from saved settings writes its snapshot where the settings point
    let dir = temp_dir();
    let settings_file = dir.join("settings.json");
    let settings = EngineSettings {
        save_path: Some(dir.join("games").join("current.json")),
        ..EngineSettings::default()
    };
    save_settings(&settings, &settings_file).unwrap();

    let loaded = load_settings(&settings_file);
    let store = JsonFileStore::new(loaded.resolved_save_path());
    let session = GameSession::start(store, loaded).unwrap();

    let on_disk = JsonFileStore::new(dir.join("games").join("current.json"))
        .load()
        .unwrap();
    assert_eq!(on_disk, Some(session.snapshot()));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_corrupt_save_stops_session_start() {
    //! A save file that cannot be parsed is reported instead of silently replaced
    let dir = temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("savegame.json");
    fs::write(&path, "{ \"alive_pieces\": [").unwrap();

    let result = GameSession::start(JsonFileStore::new(path.clone()), EngineSettings::default());
    assert!(result.is_err(), "Corrupt save must not start a session");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{ \"alive_pieces\": [",
        "Corrupt save must be left in place"
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_hand_written_layout_without_round() {
    //! Layout documents may omit the round and still start with White to move
    let dir = temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("savegame.json");
    fs::write(
        &path,
        r#"{
            "alive_pieces": [
                {"row": 0, "column": 4, "kind": "King", "color": "White", "alive": true, "move_count": 0},
                {"row": 7, "column": 4, "kind": "King", "color": "Black", "alive": true, "move_count": 0}
            ],
            "dead_pieces": []
        }"#,
    )
    .unwrap();

    let session = GameSession::start(JsonFileStore::new(path), EngineSettings::default()).unwrap();
    assert_eq!(session.round(), 1);
    assert_eq!(session.executor().board().len(), 2);
    assert_eq!(
        session.executor().possible_moves_at(Position::new(0, 4)).len(),
        5,
        "King on the back rank has five neighbours"
    );

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_starting_layout_matches_new_session() {
    let dir = temp_dir();
    let session =
        GameSession::start(JsonFileStore::new(dir.join("savegame.json")), EngineSettings::default())
            .unwrap();

    let mut expected = SavedGame::starting_position().unwrap();
    expected.alive_pieces.sort_by_key(|record| record.position());
    assert_eq!(session.snapshot(), expected);

    let _ = fs::remove_dir_all(dir);
}
