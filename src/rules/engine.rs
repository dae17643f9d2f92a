//! The turn/round state machine.
//!
//! `Game` owns the whole table: roster, boards, the turn in progress, the
//! roll history and the dice generator. Presentation drives it through
//! named transitions and reads it back through [`Game::snapshot`].
//!
//! ## Phases
//!
//! ```text
//! Setup --start_game--> Playing --roll--> Playing (miss, rolls left)
//!                                    \--> Placing (green/red triple)
//!                                    \--> WildMenu (yellow triple)
//!                                    \--> RoundEnd | GameOver (third miss)
//! Placing --place_cell--> CheckingWin --> RoundEnd | GameOver
//! WildMenu --choose_wild--> Playing (pending) --place_cell--> RoundEnd | GameOver
//! RoundEnd --next_turn--> Playing
//! GameOver --acknowledge_game_over--> Setup
//! ```
//!
//! ## Notes
//!
//! - Transitions are atomic: on `Err` nothing changed.
//! - Placements that do not fit the target cell are absorbed as no-ops.
//! - A wild green placement is scored like a regular one.
//! - Eliminated players keep their seat in the rotation.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::error::IllegalAction;
use super::wild::{apply_to_board, is_available, wild_options, wild_target, WildOption};
use crate::board::{Board, CellIndex};
use crate::core::{
    Action, ActionKind, DiceRng, GameConfig, GamePhase, GameSnapshot, PlayerId, PlayerMap,
    RollRecord, Roster, RoundState, WildAction, MAX_ROLLS,
};
use crate::dice::{classify, DiceColor, Die, Outcome};
use crate::events::{Events, GameEvent};

/// Result of a transition.
pub type TransitionResult = Result<Events, IllegalAction>;

/// The rules engine for one table.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    roster: Roster,
    boards: PlayerMap<Board>,
    round: RoundState,
    roll_history: Vector<RollRecord>,
    rng: DiceRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a table in the setup phase.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, DiceRng::from_entropy())
    }

    fn with_rng(config: GameConfig, rng: DiceRng) -> Self {
        let player_count = config.player_count();
        Self {
            config,
            phase: GamePhase::Setup,
            roster: Roster::new(player_count),
            boards: PlayerMap::with_default(player_count),
            round: RoundState::default(),
            roll_history: Vector::new(),
            rng,
        }
    }

    // === Observation ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.round.current_player
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn roll_history(&self) -> &Vector<RollRecord> {
        &self.roll_history
    }

    /// The wild menu for the current player, while it is open.
    #[must_use]
    pub fn wild_options(&self) -> Option<[WildOption; 4]> {
        (self.phase == GamePhase::WildMenu).then(|| {
            let actor = self.round.current_player;
            wild_options(&self.boards[actor], actor, self.player_count())
        })
    }

    /// Copy of everything presentation renders.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            current_player: self.round.current_player,
            players: self.roster.iter().cloned().collect(),
            boards: self.boards.clone(),
            roll_count: self.round.roll_count,
            dice: self.round.dice.clone(),
            last_wild_color: self.round.last_wild_color,
            pending_wild: self.round.pending_wild,
            round_winner: self.round.round_winner,
            roll_history: self.roll_history.clone(),
        }
    }

    /// Action kinds the current state accepts.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        let mut kinds = match self.phase {
            GamePhase::Setup => vec![ActionKind::SetPlayerCount, ActionKind::StartGame],
            GamePhase::Playing if self.round.pending_wild.is_some() => vec![ActionKind::PlaceCell],
            GamePhase::Playing if self.round.dice.is_empty() => vec![ActionKind::Roll],
            GamePhase::Playing => vec![ActionKind::Roll, ActionKind::ToggleKept],
            GamePhase::Placing => vec![ActionKind::PlaceCell],
            GamePhase::CheckingWin => vec![],
            GamePhase::RoundEnd => vec![ActionKind::NextTurn],
            GamePhase::GameOver => vec![ActionKind::AcknowledgeGameOver],
            GamePhase::WildMenu => vec![ActionKind::ChooseWild],
        };
        kinds.push(ActionKind::SetPlayerName);
        kinds.push(ActionKind::Reset);
        kinds
    }

    // === Dispatch ===

    /// Apply an [`Action`] by routing it to the matching transition.
    pub fn apply(&mut self, action: Action) -> TransitionResult {
        trace!(kind = %action.kind(), phase = %self.phase, "applying action");
        match action {
            Action::SetPlayerCount(count) => self.set_player_count(count),
            Action::SetPlayerName(player, name) => {
                self.set_player_name(player, name);
                Ok(Events::new())
            }
            Action::StartGame => self.start_game(),
            Action::Roll => self.roll(),
            Action::RollDice(colors) => self.roll_dice(colors),
            Action::ToggleKept(die) => self.toggle_kept(die),
            Action::PlaceCell(cell) => self.place_cell(cell),
            Action::ChooseWild(wild) => self.choose_wild(wild),
            Action::NextTurn => self.next_turn(),
            Action::AcknowledgeGameOver => self.acknowledge_game_over(),
            Action::Reset => Ok(self.reset()),
        }
    }

    // === Setup ===

    /// Change the number of seats. Names are reset to their defaults.
    pub fn set_player_count(&mut self, requested: usize) -> TransitionResult {
        self.expect_phase(GamePhase::Setup, ActionKind::SetPlayerCount)?;

        self.config = self.config.clone().with_player_count(requested);
        let player_count = self.config.player_count();
        self.roster = Roster::new(player_count);
        self.boards = PlayerMap::with_default(player_count);
        debug!(requested, player_count, "player count set");
        Ok(Events::new())
    }

    /// Rename a player. Allowed in every phase.
    pub fn set_player_name(&mut self, player: PlayerId, name: impl Into<String>) {
        self.roster.set_name(player, name);
    }

    /// Leave setup: pick a random first player and clear the table.
    pub fn start_game(&mut self) -> TransitionResult {
        self.expect_phase(GamePhase::Setup, ActionKind::StartGame)?;

        let player_count = self.player_count();
        let first_player = self.rng.pick_player(player_count);
        for (_, board) in self.boards.iter_mut() {
            board.clear();
        }
        self.round = RoundState::default();
        self.round.begin_turn(first_player);
        self.roll_history = Vector::new();

        info!(%first_player, player_count, "game started");
        let mut events = Events::new();
        events.push(GameEvent::GameStarted { first_player, player_count });
        self.set_phase(GamePhase::Playing, &mut events);
        events.push(GameEvent::TurnStarted { player: first_player });
        Ok(events)
    }

    // === Rolling ===

    /// Roll with the table's own dice. Kept dice keep their color.
    pub fn roll(&mut self) -> TransitionResult {
        self.check_can_roll()?;

        let mut colors = [DiceColor::Green; 3];
        let mut kept = [false; 3];
        for (i, slot) in colors.iter_mut().enumerate() {
            match self.round.dice.get(i) {
                Some(die) if die.kept => {
                    *slot = die.color;
                    kept[i] = true;
                }
                _ => *slot = self.rng.roll_die(),
            }
        }
        Ok(self.apply_roll(colors, kept))
    }

    /// Apply three externally rolled dice. All dice arrive unkept.
    pub fn roll_dice(&mut self, colors: [DiceColor; 3]) -> TransitionResult {
        self.check_can_roll()?;
        Ok(self.apply_roll(colors, [false; 3]))
    }

    fn check_can_roll(&self) -> Result<(), IllegalAction> {
        self.expect_phase(GamePhase::Playing, ActionKind::Roll)?;
        if self.round.pending_wild.is_some() {
            return Err(IllegalAction::AwaitingWildPlacement);
        }
        debug_assert!(self.round.roll_count < MAX_ROLLS, "playing phase with no rolls left");
        Ok(())
    }

    fn apply_roll(&mut self, colors: [DiceColor; 3], kept: [bool; 3]) -> Events {
        let player = self.round.current_player;
        self.round.roll_count += 1;
        let roll = self.round.roll_count;

        self.round.dice = colors
            .iter()
            .zip(kept)
            .map(|(&color, kept)| Die { color, kept })
            .collect::<SmallVec<_>>();
        self.roll_history.push_back(RollRecord { player, roll, colors });

        let outcome = classify(&colors);
        debug!(%player, roll, ?colors, ?outcome, "dice rolled");

        let mut events = Events::new();
        events.push(GameEvent::DiceRolled { player, roll, colors, outcome });

        self.round.last_wild_color = outcome.color().filter(|c| c.is_wild());
        match outcome {
            Outcome::Triple(DiceColor::Green | DiceColor::Red) => {
                self.set_phase(GamePhase::Placing, &mut events);
            }
            Outcome::Triple(DiceColor::Yellow) => {
                self.set_phase(GamePhase::WildMenu, &mut events);
            }
            Outcome::NoMatch if roll < MAX_ROLLS => {}
            Outcome::NoMatch => {
                let hearts_left = self.roster.lose_heart(player);
                debug!(%player, hearts_left, "out of rolls");
                events.push(GameEvent::HeartLost { player, hearts_left });

                let last_standing = {
                    let mut survivors = self.roster.survivors();
                    match (survivors.next(), survivors.next()) {
                        (Some(only), None) => Some(Some(only)),
                        (None, _) => Some(None),
                        _ => None,
                    }
                };
                match last_standing {
                    Some(winner) => self.end_game(winner, &mut events),
                    None => self.set_phase(GamePhase::RoundEnd, &mut events),
                }
            }
        }
        events
    }

    /// Flip the kept flag of die `die` (0..3).
    pub fn toggle_kept(&mut self, die: usize) -> TransitionResult {
        self.expect_phase(GamePhase::Playing, ActionKind::ToggleKept)?;
        if self.round.pending_wild.is_some() {
            return Err(IllegalAction::AwaitingWildPlacement);
        }
        if self.round.dice.is_empty() {
            return Err(IllegalAction::NoDiceToKeep);
        }
        assert!(die < self.round.dice.len(), "die index {} out of range", die);

        let entry = &mut self.round.dice[die];
        entry.kept = !entry.kept;
        let kept = entry.kept;
        trace!(die, kept, "die kept toggled");

        let mut events = Events::new();
        events.push(GameEvent::DieKept { die, kept });
        Ok(events)
    }

    // === Wild menu ===

    /// Pick an entry of the wild menu. The table then waits for a cell.
    pub fn choose_wild(&mut self, action: WildAction) -> TransitionResult {
        self.expect_phase(GamePhase::WildMenu, ActionKind::ChooseWild)?;

        let player = self.round.current_player;
        if !is_available(action, &self.boards[player]) {
            return Err(IllegalAction::WildActionUnavailable(action));
        }

        debug!(%player, %action, "wild action chosen");
        self.round.pending_wild = Some(action);
        let mut events = Events::new();
        events.push(GameEvent::WildChosen { player, action });
        self.set_phase(GamePhase::Playing, &mut events);
        Ok(events)
    }

    // === Placement ===

    /// Tap a cell: place the green chip earned by a triple, or carry out
    /// the pending wild action.
    pub fn place_cell(&mut self, cell: CellIndex) -> TransitionResult {
        let mut events = Events::new();
        let player = self.round.current_player;

        match self.phase {
            GamePhase::Placing => {
                self.mutate_board(player, cell, &mut events, |board| board.place_green(cell));
                self.score_placement(&mut events);
            }
            GamePhase::Playing => {
                let action = self
                    .round
                    .pending_wild
                    .take()
                    .ok_or(IllegalAction::NoWildActionPending)?;
                let target = wild_target(action, player, self.player_count());
                self.mutate_board(target, cell, &mut events, |board| apply_to_board(action, board, cell));

                match action {
                    WildAction::PlaceGreen => self.score_placement(&mut events),
                    WildAction::PlaceRed | WildAction::RemoveRed | WildAction::RestoreRed => {
                        self.set_phase(GamePhase::RoundEnd, &mut events);
                    }
                }
            }
            GamePhase::Setup
            | GamePhase::CheckingWin
            | GamePhase::RoundEnd
            | GamePhase::GameOver
            | GamePhase::WildMenu => {
                return Err(IllegalAction::WrongPhase {
                    action: ActionKind::PlaceCell,
                    phase: self.phase,
                });
            }
        }
        Ok(events)
    }

    fn mutate_board(
        &mut self,
        owner: PlayerId,
        cell: CellIndex,
        events: &mut Events,
        op: impl FnOnce(&mut Board) -> bool,
    ) {
        let board = &mut self.boards[owner];
        let from = board.cell(cell);
        if op(board) {
            let to = board.cell(cell);
            debug!(%owner, %cell, ?from, ?to, "board changed");
            events.push(GameEvent::BoardChanged { owner, cell, from, to });
        } else {
            debug!(%owner, %cell, ?from, "placement ignored");
            events.push(GameEvent::PlacementIgnored { owner, cell });
        }
    }

    /// Check the current player's board after a green placement.
    fn score_placement(&mut self, events: &mut Events) {
        self.set_phase(GamePhase::CheckingWin, events);

        let winner = self.round.current_player;
        let Some(line) = self.boards[winner].winning_line() else {
            self.set_phase(GamePhase::RoundEnd, events);
            return;
        };

        self.round.round_winner = Some(winner);
        let wins = self.roster.record_win(winner);
        info!(%winner, wins, "round won");
        events.push(GameEvent::RoundWon { winner, line, wins });

        let losers: Vec<PlayerId> = self.roster.survivors().filter(|&p| p != winner).collect();
        for player in losers {
            let hearts_left = self.roster.lose_heart(player);
            events.push(GameEvent::HeartLost { player, hearts_left });
        }

        if self.roster.others_eliminated(winner) {
            self.end_game(Some(winner), events);
        } else {
            self.set_phase(GamePhase::RoundEnd, events);
        }
    }

    // === Turn and game flow ===

    /// Pass the dice to the next seat. Boards are cleared when the round
    /// that just ended was won.
    pub fn next_turn(&mut self) -> TransitionResult {
        self.expect_phase(GamePhase::RoundEnd, ActionKind::NextTurn)?;

        if self.round.round_winner.is_some() {
            for (_, board) in self.boards.iter_mut() {
                board.clear();
            }
            debug!("boards cleared for a new round");
        }

        let next = self.round.current_player.next(self.player_count());
        self.round.begin_turn(next);

        let mut events = Events::new();
        self.set_phase(GamePhase::Playing, &mut events);
        events.push(GameEvent::TurnStarted { player: next });
        Ok(events)
    }

    /// Dismiss the game-over screen and return to setup.
    pub fn acknowledge_game_over(&mut self) -> TransitionResult {
        self.expect_phase(GamePhase::GameOver, ActionKind::AcknowledgeGameOver)?;
        Ok(self.reset())
    }

    /// Abandon whatever is going on and return to setup. Hearts and wins
    /// are restored; names and seat count are kept.
    pub fn reset(&mut self) -> Events {
        self.roster.reset_hearts_and_wins();
        for (_, board) in self.boards.iter_mut() {
            board.clear();
        }
        self.round = RoundState::default();
        self.roll_history = Vector::new();

        info!("returned to setup");
        let mut events = Events::new();
        self.set_phase(GamePhase::Setup, &mut events);
        events.push(GameEvent::ReturnedToSetup);
        events
    }

    fn end_game(&mut self, winner: Option<PlayerId>, events: &mut Events) {
        info!(winner = ?winner, "game over");
        self.set_phase(GamePhase::GameOver, events);
        events.push(GameEvent::GameOver { winner });
    }

    // === Helpers ===

    fn expect_phase(&self, expected: GamePhase, action: ActionKind) -> Result<(), IllegalAction> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(IllegalAction::WrongPhase { action, phase: self.phase })
        }
    }

    fn set_phase(&mut self, to: GamePhase, events: &mut Events) {
        let from = self.phase;
        if from == to {
            return;
        }
        trace!(%from, %to, "phase changed");
        self.phase = to;
        events.push(GameEvent::PhaseChanged { from, to });
    }
}
