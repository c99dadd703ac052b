use roam_engine::*;

use std::path::PathBuf;

fn hall_and_kitchen() -> Game {
    let text = r#"{
        "start": "Hall",
        "rooms": [
            {"name": "Hall", "desc": "A long hall.", "exits": {"north": "Kitchen"}, "items": ["umbrella"]},
            {"name": "Kitchen", "desc": "Smells of bread.", "exits": {"south": "Hall"}, "items": ["key"]}
        ]
    }"#;
    Game::new(load_world_from_str(text, MapFormat::Json).expect("valid map"))
}

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Every item in the world, wherever it is: (item, place) pairs.
fn item_places(game: &Game) -> Vec<(String, String)> {
    let mut places: Vec<(String, String)> = game
        .world()
        .rooms()
        .flat_map(|room| room.contents.iter().map(|item| (item.clone(), room.name.clone())))
        .chain(game.inventory().iter().map(|item| (item.clone(), "<inventory>".to_string())))
        .collect();
    places.sort();
    places
}

#[test]
fn test_move_success() {
    let mut game = hall_and_kitchen();
    let room = game.move_to("north").expect("north leads somewhere");
    assert_eq!(room.name, "Kitchen");
    assert_eq!(game.current_room().name, "Kitchen");
}

#[test]
fn test_move_failure_leaves_player_in_place() {
    let mut game = hall_and_kitchen();
    let err = game.move_to("south").unwrap_err();
    assert_eq!(err.to_string(), "There's no way to go south.");
    assert_eq!(game.current_room().name, "Hall");
}

#[test]
fn test_pickup_and_drop_in_kitchen() {
    let mut game = hall_and_kitchen();
    game.move_to("north").unwrap();
    assert!(game.pick_up("key").is_ok());
    assert_eq!(game.inventory(), ["key"]);
    assert!(game.current_room().contents.is_empty());

    assert!(game.drop_item("key").is_ok());
    assert!(game.inventory().is_empty());
    assert_eq!(game.current_room().contents, ["key"]);
}

#[test]
fn test_look_is_idempotent() {
    let game = hall_and_kitchen();
    let first = game.look();
    assert_eq!(first, game.look());
    assert_eq!(first, "Hall\n\nA long hall.\n\nExits: north\nItems: umbrella");
}

#[test]
fn test_pickup_then_drop_round_trips() {
    let mut game = data_game();
    game.move_to("north").unwrap();
    game.pick_up("key").unwrap();
    let room_before = game.current_room().contents.clone();
    let inventory_before = game.inventory().to_vec();

    game.pick_up("red key").unwrap();
    game.drop_item("red key").unwrap();

    assert_eq!(game.current_room().contents, room_before);
    assert_eq!(game.inventory(), inventory_before.as_slice());
}

#[test]
fn test_round_trip_from_middle_of_list_appends() {
    let mut game = data_game();
    game.move_to("north").unwrap();
    game.pick_up("key").unwrap();
    game.drop_item("key").unwrap();
    assert_eq!(game.current_room().contents, ["red key", "key"]);
    assert!(game.inventory().is_empty());
}

#[test]
fn test_items_stay_in_exactly_one_place() {
    let mut game = data_game();
    let expected = item_places(&game)
        .into_iter()
        .map(|(item, _)| item)
        .collect::<Vec<_>>();

    let steps: &[(&str, &str)] = &[
        ("get", "umbrella"),
        ("go", "north"),
        ("get", "key"),
        ("get", "key"),
        ("drop", "umbrella"),
        ("drop", "umbrella"),
        ("get", "red key"),
        ("go", "south"),
        ("go", "east"),
        ("drop", "key"),
        ("get", "letter"),
        ("get", "umbrella"),
        ("go", "west"),
        ("go", "down"),
        ("drop", "red key"),
        ("drop", "letter"),
    ];
    for (verb, arg) in steps {
        let _ = match *verb {
            "get" => game.pick_up(arg),
            "drop" => game.drop_item(arg),
            _ => game.move_to(arg).map(|_| ()),
        };
        let mut seen: Vec<String> = item_places(&game).into_iter().map(|(item, _)| item).collect();
        seen.sort();
        assert_eq!(seen, expected, "after {verb} {arg}");
    }
    assert_eq!(game.current_room().name, "Cellar");
    assert_eq!(game.current_room().contents, ["red key", "letter"]);
    assert!(game.inventory().is_empty());
}

#[test]
fn test_failed_operations_change_nothing() {
    let mut game = hall_and_kitchen();
    let before = item_places(&game);
    assert!(game.pick_up("key").is_err());
    assert!(game.drop_item("umbrella").is_err());
    assert!(game.move_to("North").is_err());
    assert_eq!(item_places(&game), before);
    assert_eq!(game.current_room().name, "Hall");
}

#[test]
fn test_exits_point_at_existing_rooms() {
    let game = data_game();
    for room in game.world().rooms() {
        for exit in &room.exits {
            let target = game.world().room(exit.to);
            assert!(game.world().room_named(&target.name).is_some());
        }
    }
}

#[test]
fn test_loader_rejects_dangling_exit() {
    let text = r#"{"start": "Hall", "rooms": [{"name": "Hall", "desc": "A hall.", "exits": {"north": "Kitchen"}}]}"#;
    let err = load_world_from_str(text, MapFormat::Json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "map failed validation:\n- room 'Hall' exit 'north' leads to missing room 'Kitchen'"
    );
}

#[test]
fn test_loader_rejects_duplicate_rooms() {
    let text = r#"{"start": "Hall", "rooms": [
        {"name": "Hall", "desc": "A hall.", "exits": {}},
        {"name": "Hall", "desc": "Another hall.", "exits": {}}
    ]}"#;
    let err = load_world_from_str(text, MapFormat::Json).unwrap_err();
    assert!(matches!(err, MapFormatError::Invalid(_)));
    assert!(err.to_string().contains("duplicate room name 'Hall'"));
}

#[test]
fn test_help_marks_argument_verbs() {
    let game = hall_and_kitchen();
    let usages: Vec<String> = game.help().into_iter().map(|line| line.usage).collect();
    assert_eq!(
        usages,
        ["go ...", "look", "get ...", "inventory", "quit", "help", "drop ..."]
    );
}

#[test]
fn test_lib_version() {
    assert!(!ROAM_VERSION.is_empty());
}

fn data_game() -> Game {
    Game::new(load_world(&data_file("house.json")).expect("bundled map loads"))
}
