use battleship_hotseat::{
    pass_move, place_fleet, run_game, take_turn, Board, BoardPhase, GameSession, PlayerId,
    ScriptedConsole, ShipType, ShotResult, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Placement lines for the standard fleet, one ship per odd row.
const FLEET_A: [&str; 5] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];
/// Same layout on the right-hand side, endpoints reversed and lower case.
const FLEET_B: [&str; 5] = ["a10 a6", "c10 c7", "e10 e8", "g10 g8", "i10 i9"];

/// Every cell of `FLEET_B`, ship by ship.
fn fleet_b_cells() -> Vec<String> {
    let rows = [('A', 5), ('C', 4), ('E', 3), ('G', 3), ('I', 2)];
    rows.iter()
        .flat_map(|&(row, len)| (0..len).map(move |i| format!("{}{}", row, 10 - i)))
        .collect()
}

#[test]
fn test_place_fleet_reprompts_on_errors() {
    let mut console = ScriptedConsole::new([
        "A1",          // malformed
        "A1 K5",       // out of range
        "A1 B2",       // not straight
        "A1 A4",       // wrong length
        "A1 A5",       // carrier
        "B1 B4",       // too close
        "C1 C4",
        "E1 E3",
        "G1 G3",
        "I1 I2",
    ]);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    place_fleet(&mut console, &mut rng, &mut board, PlayerId::One).unwrap();

    assert_eq!(board.phase(), BoardPhase::Playing);
    assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(console.pending(), 0);

    let out = console.output();
    assert!(out.starts_with("Player 1, place your ships on the game field"));
    assert!(out.contains("Enter the coordinates of the Carrier (5 cells):"));
    assert!(out.contains("Enter the coordinates of the Destroyer (2 cells):"));
    assert!(out.contains("Error! Please enter valid coordinates. Try again:"));
    assert!(out.contains("Error! Please enter coordinates within range. Try again:"));
    assert!(out.contains("Error! Wrong ship location. Try again:"));
    assert!(out.contains("Error! Wrong length of the ship"));
    assert!(out.contains("Error! You placed it too close to another one. Try again:"));
}

#[test]
fn test_empty_line_places_at_random() {
    let mut console = ScriptedConsole::new(["", "", "", "", ""]);
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = Board::new();
    place_fleet(&mut console, &mut rng, &mut board, PlayerId::Two).unwrap();
    assert_eq!(board.ship_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_pass_move_clears_screen() {
    let mut console = ScriptedConsole::new([""]);
    pass_move(&mut console).unwrap();
    let out = console.output();
    assert!(out.contains("Press Enter and pass the move to another player"));
    assert!(out.ends_with(&"\n".repeat(99)));
}

#[test]
fn test_take_turn_reprompts_until_resolved() {
    let mut p1 = Board::with_fleet(&[ShipType::new("Destroyer", 2)]);
    p1.place_ship(0, "A1".parse().unwrap(), "A2".parse().unwrap()).unwrap();
    let mut p2 = Board::with_fleet(&[ShipType::new("Destroyer", 2)]);
    p2.place_ship(0, "J1".parse().unwrap(), "J2".parse().unwrap()).unwrap();
    let mut session = GameSession::with_boards(p1, p2);
    session.fire("D4".parse().unwrap()).unwrap();
    session.fire("H8".parse().unwrap()).unwrap();

    let mut console = ScriptedConsole::new(["zz", "D4", "J1"]);
    let result = take_turn(&mut console, &mut session, PlayerId::One).unwrap();
    assert_eq!(result, ShotResult::Hit);

    let out = console.output();
    // own board unfogged below the separator, opponent's hit/miss above it
    let (top, bottom) = out.split_once("---------------------\n").unwrap();
    assert!(top.contains("D ~ ~ ~ M"));
    assert!(!top.contains('O'));
    assert!(bottom.contains("A O O"));
    assert!(out.contains("Player 1, it's your turn:"));
    assert!(out.contains("Error! You entered the wrong coordinates! Try again:"));
    assert!(out.contains("Coordinate has been entered before! Try again:"));
    assert!(out.contains("You hit a ship!"));
}

#[test]
fn test_full_game_player_one_wins() {
    let mut script: Vec<String> = Vec::new();
    script.extend(FLEET_A.iter().map(|s| s.to_string()));
    script.push(String::new());
    script.extend(FLEET_B.iter().map(|s| s.to_string()));
    script.push(String::new());

    // player 1 shoots player 2's fleet, player 2 shoots the empty middle column
    let misses: Vec<String> = ('A'..='J')
        .flat_map(|r| [6, 7].map(move |c| format!("{}{}", r, c)))
        .collect();
    let targets = fleet_b_cells();
    for (i, target) in targets.iter().enumerate() {
        script.push(target.clone());
        if i + 1 < targets.len() {
            script.push(String::new());
            script.push(misses[i].clone());
            script.push(String::new());
        }
    }

    let mut console = ScriptedConsole::new(script);
    let mut rng = SmallRng::seed_from_u64(5);
    let winner = run_game(&mut console, &mut rng).unwrap();

    assert_eq!(winner, PlayerId::One);
    assert_eq!(console.pending(), 0);
    let out = console.output();
    assert!(out.contains("Player 2, place your ships on the game field"));
    assert!(out.contains("You sank a ship!"));
    assert!(out.contains("You missed!"));
    assert!(out.trim_end().ends_with("You sank the last ship. You won. Congratulations!"));
}

#[test]
fn test_run_game_fails_when_input_ends() {
    let mut console = ScriptedConsole::new(FLEET_A);
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(run_game(&mut console, &mut rng).is_err());
}
