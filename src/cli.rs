#![cfg(feature = "std")]

//! Hot-seat game flow on a shared terminal.
//!
//! Each player places a fleet, then the players alternate shots until one
//! fleet is gone. A hand-over screen between turns keeps each player's
//! board private.

use rand::Rng;

use crate::{
    board::Board,
    common::{PlacementError, ShotError, ShotResult},
    console::Console,
    coord::{parse_placement, Coordinate},
    game::{GameError, GameSession, PlayerId},
};

const SEPARATOR: &str = "---------------------\n";
const CLEAR_LINES: usize = 99;

/// Ask `player` for a position for every ship still off `board`.
///
/// An empty line places the current ship at random.
pub fn place_fleet<C: Console, R: Rng>(
    console: &mut C,
    rng: &mut R,
    board: &mut Board,
    player: PlayerId,
) -> anyhow::Result<()> {
    console.display(&format!(
        "{}, place your ships on the game field\n\n",
        player
    ))?;
    console.display(&board.render(false))?;

    while let Some(index) = board.next_unplaced() {
        let (name, size) = match board.ship(index) {
            Some(ship) => (ship.name(), ship.size()),
            None => break,
        };
        let mut prompt = format!("\nEnter the coordinates of the {} ({} cells):\n\n", name, size);
        loop {
            let line = console.read_line(&prompt)?;
            let placed = if line.trim().is_empty() {
                board
                    .random_placement(rng, index)
                    .and_then(|p| board.place_ship(index, p.start, p.end))
            } else {
                parse_placement(&line).and_then(|(a, b)| board.place_ship(index, a, b))
            };
            match placed {
                Ok(_) => break,
                Err(PlacementError::Ship(e)) => {
                    log::warn!("fleet bookkeeping failed for {}: {}", name, e);
                    return Err(PlacementError::Ship(e).into());
                }
                Err(e) => prompt = format!("\n{}. Try again:\n\n", e),
            }
        }
        console.display("\n")?;
        console.display(&board.render(false))?;
    }
    Ok(())
}

/// Blank the screen behind a prompt so the next player cannot see the
/// previous one's board.
pub fn pass_move<C: Console>(console: &mut C) -> anyhow::Result<()> {
    console.read_line("\nPress Enter and pass the move to another player\n")?;
    console.display(&"\n".repeat(CLEAR_LINES))?;
    Ok(())
}

/// Message shown to the shooter for a resolved shot.
pub fn shot_message(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "You missed!",
        ShotResult::Hit => "You hit a ship!",
        ShotResult::Sunk(_) => "You sank a ship!",
        ShotResult::SunkLastShip(_) => "You sank the last ship. You won. Congratulations!",
    }
}

/// Both boards as seen by `player`: the opponent's under fog, then their own.
pub fn player_view(session: &GameSession, player: PlayerId) -> String {
    let mut view = session.board(player.opponent()).render(true);
    view.push_str(SEPARATOR);
    view.push_str(&session.board(player).render(false));
    view
}

/// Prompt the active player until one shot resolves.
pub fn take_turn<C: Console>(
    console: &mut C,
    session: &mut GameSession,
    player: PlayerId,
) -> anyhow::Result<ShotResult> {
    console.display(&player_view(session, player))?;
    let mut prompt = format!("\n{}, it's your turn:\n\n", player);
    loop {
        let line = console.read_line(&prompt)?;
        let target = match line.parse::<Coordinate>() {
            Ok(target) => target,
            Err(_) => {
                prompt = String::from("\nError! You entered the wrong coordinates! Try again:\n\n");
                continue;
            }
        };
        match session.fire(target) {
            Ok(result) => {
                log::debug!("{} fired at {}: {:?}", player, target, result);
                console.display(&format!("\n{}\n", shot_message(result)))?;
                return Ok(result);
            }
            Err(GameError::Shot(ShotError::AlreadyTargeted(_))) => {
                prompt = String::from("\nCoordinate has been entered before! Try again:\n\n");
            }
            Err(e) => {
                log::warn!("turn of {} aborted: {}", player, e);
                return Err(e.into());
            }
        }
    }
}

/// Play one full game and return the winner.
pub fn run_game<C: Console, R: Rng>(console: &mut C, rng: &mut R) -> anyhow::Result<PlayerId> {
    let mut session = GameSession::new();
    log::info!("new game");

    for player in PlayerId::BOTH {
        place_fleet(console, rng, session.board_mut(player), player)?;
        pass_move(console)?;
    }

    loop {
        if let Some(winner) = session.winner() {
            log::info!("{} won", winner);
            console.display("\n")?;
            return Ok(winner);
        }
        let Some(player) = session.active_player() else {
            anyhow::bail!("no active player while the game is running");
        };
        take_turn(console, &mut session, player)?;
        if session.winner().is_none() {
            pass_move(console)?;
        }
    }
}
