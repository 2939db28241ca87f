//! Crazy Eights game state machine.

use crate::cards::{Card, Pile};
use crate::core::{GameConfig, GameRng, Player, ScoringVariant};
use crate::error::{GameError, Result, SetupError};
use crate::rules;

/// Reserved account name. It administers a game but never sits at the table.
pub const ADMIN: &str = "admin";

/// Where the current turn stands.
///
/// ```text
/// AwaitingMove --draw--> AwaitingMoveAfterDraw
///      |                        |
///    play                  play | pass
///      v                        v
///  (next player) AwaitingMove   or   Finished
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Current player has not drawn this turn.
    AwaitingMove,
    /// Current player has drawn and may play or pass.
    AwaitingMoveAfterDraw,
    /// Someone emptied their hand or the draw pile ran out.
    Finished,
}

/// Result of a successful `draw`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card now in the current player's hand.
    Drew(Card),
    /// The draw pile was already empty. The game is now finished.
    PileExhausted,
}

/// An in-progress (or finished) game.
///
/// Owns its players and both piles. Every rejected operation returns an error
/// before touching any state, so a caller never has to roll anything back.
///
/// ## Example
///
/// ```
/// use crazy_eights::games::crazy_eights::{GameBuilder, Phase};
///
/// let mut game = GameBuilder::new()
///     .players(["alice", "bob"])
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.phase(), Phase::AwaitingMove);
/// assert_eq!(game.current_player().name(), "alice");
/// assert_eq!(game.card_count(), 52);
///
/// game.draw().unwrap();
/// assert_eq!(game.phase(), Phase::AwaitingMoveAfterDraw);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    current: usize,
    draw_pile: Pile,
    discard_pile: Pile,
    /// Honored by turn rotation; no rule currently sets it.
    reverse_direction: bool,
    game_over: bool,
}

impl Game {
    /// Seat the players, shuffle a fresh deck and deal.
    ///
    /// Shuffles with the config seed when one is set.
    pub fn start<I, S>(names: I, config: GameConfig) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::start_with_rng(names, config, &mut rng)
    }

    /// Like [`Game::start`], shuffling with the given RNG.
    pub fn start_with_rng<I, S>(
        names: I,
        config: GameConfig,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        log::debug!("shuffling with seed {}", rng.seed());
        let mut deck = Pile::standard();
        deck.shuffle(rng);
        Self::start_with_deck(names, config, deck)
    }

    /// Deal from `deck` exactly as given, without shuffling.
    ///
    /// Each player receives `initial_hand_size` cards (at least one) in seat
    /// order, then one card is flipped to start the discard pile. Fails with
    /// `TooManyPlayers` if `deck` cannot cover every hand plus that card.
    /// Used for prepared decks in tests and replays.
    pub fn start_with_deck<I, S>(
        names: I,
        config: GameConfig,
        mut deck: Pile,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players = seat_players(names, config.min_players)?;

        // An empty opening hand would be an instant win.
        let hand_size = config.initial_hand_size.max(1);
        let max = max_players(deck.len(), hand_size);
        if players.len() > max {
            return Err(SetupError::TooManyPlayers {
                found: players.len(),
                max,
            });
        }

        for player in &mut players {
            player.clear_hand();
            player.set_drawn(false);
            player.add_cards(deck.deal_front(hand_size));
        }

        let mut discard_pile = Pile::new();
        let first = deck.draw_top().ok_or(SetupError::TooManyPlayers {
            found: players.len(),
            max,
        })?;
        discard_pile.push_top(first);

        log::info!(
            "game started: players={:?} top={}",
            players.iter().map(Player::name).collect::<Vec<_>>(),
            first.code()
        );

        Ok(Self {
            config,
            players,
            current: 0,
            draw_pile: deck,
            discard_pile,
            reverse_direction: false,
            game_over: false,
        })
    }

    /// Reassemble a game from stored parts.
    ///
    /// The current player is given by name and resolved to a seat here.
    /// Card-level validation is the snapshot loader's job.
    pub(crate) fn from_parts(
        config: GameConfig,
        players: Vec<Player>,
        current_player: &str,
        draw_pile: Pile,
        discard_pile: Pile,
        reverse_direction: bool,
        game_over: bool,
    ) -> Result<Self> {
        let current = players
            .iter()
            .position(|p| p.name() == current_player)
            .ok_or_else(|| GameError::UnknownPlayer(current_player.to_string()))?;

        Ok(Self {
            config,
            players,
            current,
            draw_pile,
            discard_pile,
            reverse_direction,
            game_over,
        })
    }

    // === Actions ===

    /// Play a card from the current player's hand onto the discard pile.
    ///
    /// On success the turn passes to the next player, unless the play ended
    /// the game.
    pub fn play(&mut self, card: Card) -> Result<()> {
        self.ensure_running()?;

        let player = &self.players[self.current];
        if !player.has_card(card) {
            log::debug!("{} rejected play of {}: not held", player.name(), card.code());
            return Err(GameError::NotHeld(card));
        }
        if let Some(top) = self.discard_pile.top() {
            if !rules::is_valid_play(card, top) {
                log::debug!("{} rejected play of {} on {}", player.name(), card.code(), top.code());
                return Err(GameError::IllegalPlay { card, top });
            }
        }

        let player = &mut self.players[self.current];
        let played = player.play(card).ok_or(GameError::NotHeld(card))?;
        self.discard_pile.push_top(played);
        log::debug!("{} played {}", player.name(), played.code());

        if rules::is_game_over(&self.players[self.current], &self.draw_pile) {
            self.finish();
        } else {
            self.advance_turn();
        }
        Ok(())
    }

    /// Draw one card for the current player.
    ///
    /// Allowed once per turn. Drawing from an already-empty pile ends the
    /// game and returns [`DrawOutcome::PileExhausted`]. The turn never
    /// advances on a draw.
    pub fn draw(&mut self) -> Result<DrawOutcome> {
        self.ensure_running()?;

        if self.players[self.current].has_drawn() {
            return Err(GameError::AlreadyDrawn);
        }

        let Some(card) = self.draw_pile.draw_top() else {
            log::debug!("draw pile exhausted");
            self.finish();
            return Ok(DrawOutcome::PileExhausted);
        };

        let player = &mut self.players[self.current];
        player.add_card(card);
        player.set_drawn(true);
        log::debug!("{} drew a card", player.name());

        Ok(DrawOutcome::Drew(card))
    }

    /// End the current player's turn without playing.
    ///
    /// Only allowed after drawing this turn, and only when no card in hand
    /// can be played.
    pub fn pass(&mut self) -> Result<()> {
        self.ensure_running()?;

        let player = &self.players[self.current];
        if !player.has_drawn() {
            return Err(GameError::MustDrawFirst);
        }
        if let Some(top) = self.discard_pile.top() {
            if rules::can_make_valid_move(player, top) {
                return Err(GameError::ValidMoveAvailable);
            }
        }

        log::debug!("{} passed", player.name());
        self.advance_turn();
        Ok(())
    }

    fn ensure_running(&self) -> Result<()> {
        if self.game_over {
            Err(GameError::GameFinished)
        } else {
            Ok(())
        }
    }

    /// Hand the turn to the next seat.
    ///
    /// The drawn flag is cleared on the way out and on the way in, so only
    /// the current player can ever carry it.
    fn advance_turn(&mut self) {
        self.players[self.current].set_drawn(false);
        let total = self.players.len();
        self.current = rules::next_player_index(self.current, total, self.reverse_direction);
        self.players[self.current].set_drawn(false);
        log::debug!("turn passes to {}", self.players[self.current].name());
    }

    fn finish(&mut self) {
        self.game_over = true;
        if let Some(winner) = self.winner() {
            log::info!("game over: winner={}", winner.name());
        }
    }

    // === Outcome ===

    /// Seat index of the winner, if the game is finished.
    ///
    /// A player with an empty hand wins outright; otherwise the lowest hand
    /// total wins, ties going to the earlier seat.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        if !self.game_over {
            return None;
        }
        self.players
            .iter()
            .position(Player::has_won)
            .or_else(|| rules::winner_by_points(&self.players, self.config.scoring))
    }

    /// The winner, if the game is finished.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner_index().map(|idx| &self.players[idx])
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Finished
        } else if self.players[self.current].has_drawn() {
            Phase::AwaitingMoveAfterDraw
        } else {
            Phase::AwaitingMove
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Player names starting with the current player, once around the table.
    #[must_use]
    pub fn turn_order(&self) -> Vec<&str> {
        let total = self.players.len();
        std::iter::successors(Some(self.current), |&idx| {
            Some(rules::next_player_index(idx, total, self.reverse_direction))
        })
        .take(total)
        .map(|idx| self.players[idx].name())
        .collect()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Make the named player current.
    pub fn set_current_player(&mut self, name: &str) -> Result<()> {
        self.current = self
            .players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
        Ok(())
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.top()
    }

    /// Cards the current player could legally play right now.
    #[must_use]
    pub fn playable_cards(&self) -> Vec<Card> {
        match self.discard_pile.top() {
            Some(top) => rules::playable_cards(self.current_player(), top),
            None => self.current_player().hand().to_vec(),
        }
    }

    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn draw_pile(&self) -> &Pile {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Pile {
        &self.discard_pile
    }

    #[must_use]
    pub fn reverse_direction(&self) -> bool {
        self.reverse_direction
    }

    /// Flip turn rotation. No rule in the base game calls this.
    pub fn set_reverse_direction(&mut self, reverse: bool) {
        self.reverse_direction = reverse;
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn scoring(&self) -> ScoringVariant {
        self.config.scoring
    }

    /// Cards across all hands and both piles. Always 52 for a started game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.players.iter().map(Player::hand_size).sum::<usize>()
            + self.draw_pile.len()
            + self.discard_pile.len()
    }
}

/// Most players a deck of `deck_len` cards can seat, leaving one card to flip.
fn max_players(deck_len: usize, hand_size: usize) -> usize {
    deck_len.saturating_sub(1) / hand_size.max(1)
}

/// Validate names and build empty-handed players in seat order.
///
/// The player minimum never drops below [`rules::MIN_PLAYERS`], whatever
/// `min_players` says. Deck capacity is checked only when dealing.
pub(crate) fn seat_players<I, S>(names: I, min_players: usize) -> Result<Vec<Player>, SetupError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut players: Vec<Player> = Vec::new();
    for name in names {
        let name: String = name.into();
        if name.eq_ignore_ascii_case(ADMIN) {
            return Err(SetupError::ReservedName);
        }
        if players.iter().any(|p| p.name() == name) {
            return Err(SetupError::DuplicatePlayer(name));
        }
        players.push(Player::new(name));
    }

    let required = min_players.max(rules::MIN_PLAYERS);
    if players.len() < required {
        return Err(SetupError::NotEnoughPlayers {
            found: players.len(),
            required,
        });
    }

    Ok(players)
}

/// Builder for starting a game.
///
/// Mirrors `GameConfig` with a fluent interface and collects the seating.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    config: GameConfig,
    deck: Option<Pile>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat one player. Seat order is turn order.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Seat several players in order.
    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scoring(mut self, scoring: ScoringVariant) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn initial_hand_size(mut self, size: usize) -> Self {
        self.config.initial_hand_size = size;
        self
    }

    /// Deal from this deck as-is instead of shuffling a fresh one.
    pub fn deck(mut self, deck: Pile) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Seat, shuffle (unless a deck was given) and deal.
    pub fn build(self) -> Result<Game, SetupError> {
        match self.deck {
            Some(deck) => Game::start_with_deck(self.names, self.config, deck),
            None => Game::start(self.names, self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(code: &str) -> Card {
        Card::from_code(code).unwrap()
    }

    /// Two players, no draw pile left to speak of, hands fixed.
    fn fixed_game(hands: &[&[&str]], draw: &[&str], discard: &[&str]) -> Game {
        let players = hands
            .iter()
            .enumerate()
            .map(|(i, codes)| {
                Player::with_hand(format!("p{i}"), codes.iter().map(|c| card(c)), false)
            })
            .collect();
        Game::from_parts(
            GameConfig::default(),
            players,
            "p0",
            Pile::from_codes(draw).unwrap(),
            Pile::from_codes(discard).unwrap(),
            false,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_start_deals_and_seeds_discard() {
        let game = GameBuilder::new().players(["a", "b", "c"]).seed(1).build().unwrap();

        for p in game.players() {
            assert_eq!(p.hand_size(), 5);
            assert!(!p.has_drawn());
        }
        assert_eq!(game.discard_pile().len(), 1);
        assert_eq!(game.draw_pile().len(), 52 - 15 - 1);
        assert_eq!(game.card_count(), 52);
        assert_eq!(game.current_player().name(), "a");
        assert_eq!(game.phase(), Phase::AwaitingMove);
        assert!(!game.reverse_direction());
    }

    #[test]
    fn test_start_deals_in_seat_order_from_front() {
        let deck = Pile::standard();
        let game = Game::start_with_deck(["a", "b"], GameConfig::default(), deck).unwrap();

        assert_eq!(game.players()[0].hand_codes(), vec!["AH", "2H", "3H", "4H", "5H"]);
        assert_eq!(game.players()[1].hand_codes(), vec!["6H", "7H", "8H", "9H", "10H"]);
        assert_eq!(game.top_discard(), Some(card("JH")));
        assert_eq!(game.draw_pile().front(), Some(card("QH")));
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = GameBuilder::new().players(["a", "b"]).seed(99).build().unwrap();
        let b = GameBuilder::new().players(["a", "b"]).seed(99).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_start_rejects_too_few() {
        let err = GameBuilder::new().player("solo").build().unwrap_err();
        assert_eq!(err, SetupError::NotEnoughPlayers { found: 1, required: 2 });

        let err = Game::start(Vec::<String>::new(), GameConfig::default()).unwrap_err();
        assert_eq!(err, SetupError::NotEnoughPlayers { found: 0, required: 2 });
    }

    #[test]
    fn test_start_rejects_admin_and_duplicates() {
        assert_eq!(
            GameBuilder::new().players(["a", "admin"]).build().unwrap_err(),
            SetupError::ReservedName
        );
        assert_eq!(
            GameBuilder::new().players(["a", "Admin"]).build().unwrap_err(),
            SetupError::ReservedName
        );
        assert_eq!(
            GameBuilder::new().players(["a", "b", "a"]).build().unwrap_err(),
            SetupError::DuplicatePlayer("a".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let game = GameBuilder::new().players(["bob", "Bob"]).seed(3).build().unwrap();
        assert_eq!(game.turn_order(), vec!["bob", "Bob"]);
    }

    #[test]
    fn test_short_deck_rejected_before_dealing() {
        let deck = Pile::from_codes(&["2H", "3H", "4H", "5H", "6H"]).unwrap();
        let config = GameConfig::default().with_initial_hand_size(2);
        let err = Game::start_with_deck(["a", "b", "c"], config, deck).unwrap_err();
        assert_eq!(err, SetupError::TooManyPlayers { found: 3, max: 2 });
    }

    #[test]
    fn test_zero_hand_size_deals_one() {
        let config = GameConfig::default().with_initial_hand_size(0);
        let game = Game::start_with_deck(["a", "b"], config, Pile::standard()).unwrap();
        assert_eq!(game.players()[0].hand_codes(), vec!["AH"]);
        assert_eq!(game.top_discard(), Some(card("3H")));
        assert!(!game.is_over());
    }

    #[test]
    fn test_min_players_floor_holds_for_literal_config() {
        let config = GameConfig {
            min_players: 0,
            ..GameConfig::default()
        };
        let err = Game::start(Vec::<String>::new(), config.clone()).unwrap_err();
        assert_eq!(err, SetupError::NotEnoughPlayers { found: 0, required: 2 });

        let err = Game::start(["solo"], config).unwrap_err();
        assert_eq!(err, SetupError::NotEnoughPlayers { found: 1, required: 2 });
    }

    #[test]
    fn test_min_players_above_floor() {
        let config = GameConfig::default().with_min_players(3);
        let err = Game::start(["a", "b"], config).unwrap_err();
        assert_eq!(err, SetupError::NotEnoughPlayers { found: 2, required: 3 });
    }

    #[test]
    fn test_start_rejects_too_many() {
        let names: Vec<String> = (0..11).map(|i| format!("p{i}")).collect();
        let err = GameBuilder::new().players(names).build().unwrap_err();
        assert_eq!(err, SetupError::TooManyPlayers { found: 11, max: 10 });
    }

    #[test]
    fn test_play_rejects_unheld_card() {
        let mut game = fixed_game(&[&["9C"], &["2S"]], &["3D"], &["5D"]);
        let before = game.clone();

        assert_eq!(game.play(card("5C")), Err(GameError::NotHeld(card("5C"))));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_rejects_illegal_card() {
        let mut game = fixed_game(&[&["9C", "KH"], &["2S"]], &["3D"], &["5D"]);
        let before = game.clone();

        assert_eq!(
            game.play(card("9C")),
            Err(GameError::IllegalPlay { card: card("9C"), top: card("5D") })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_advances_turn() {
        let mut game = fixed_game(&[&["9D", "KH"], &["2S"]], &["3D"], &["5D"]);

        game.play(card("9D")).unwrap();

        assert_eq!(game.top_discard(), Some(card("9D")));
        assert_eq!(game.current_player().name(), "p1");
        assert_eq!(game.players()[0].hand_codes(), vec!["KH"]);
        assert!(!game.is_over());
    }

    #[test]
    fn test_wild_eight_always_playable() {
        let mut game = fixed_game(&[&["8S", "KH"], &["2S"]], &["3D"], &["5D"]);
        game.play(card("8S")).unwrap();
        assert_eq!(game.top_discard(), Some(card("8S")));
    }

    #[test]
    fn test_emptying_hand_finishes_without_advancing() {
        let mut game = fixed_game(&[&["5C"], &["2S", "3S"]], &["3D"], &["5D"]);

        game.play(card("5C")).unwrap();

        assert!(game.is_over());
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.current_player().name(), "p0");
        assert_eq!(game.winner().map(Player::name), Some("p0"));
    }

    #[test]
    fn test_play_with_empty_draw_pile_finishes() {
        let mut game = fixed_game(&[&["5C", "KH"], &["2S"]], &[], &["5D"]);
        game.play(card("5C")).unwrap();
        assert!(game.is_over());
        assert_eq!(game.current_player().name(), "p0");
    }

    #[test]
    fn test_draw_once_per_turn() {
        let mut game = fixed_game(&[&["9C"], &["2S"]], &["3D", "4D"], &["5D"]);

        assert_eq!(game.draw(), Ok(DrawOutcome::Drew(card("3D"))));
        assert_eq!(game.phase(), Phase::AwaitingMoveAfterDraw);
        assert_eq!(game.current_player().name(), "p0");

        let before = game.clone();
        assert_eq!(game.draw(), Err(GameError::AlreadyDrawn));
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_from_empty_pile_finishes() {
        let mut game = fixed_game(&[&["9C", "KC"], &["2S"]], &[], &["5D"]);

        assert_eq!(game.draw(), Ok(DrawOutcome::PileExhausted));
        assert!(game.is_over());
        assert_eq!(game.players()[0].hand_size(), 2);
        // p0 holds 19 points, p1 holds 2.
        assert_eq!(game.winner().map(Player::name), Some("p1"));
    }

    #[test]
    fn test_pass_requires_draw() {
        let mut game = fixed_game(&[&["9C"], &["2S"]], &["3H"], &["5D"]);
        assert_eq!(game.pass(), Err(GameError::MustDrawFirst));
    }

    #[test]
    fn test_pass_rejected_with_valid_move() {
        let mut game = fixed_game(&[&["9C"], &["2S"]], &["3D"], &["5D"]);
        game.draw().unwrap();

        let before = game.clone();
        assert_eq!(game.pass(), Err(GameError::ValidMoveAvailable));
        assert_eq!(game, before);
    }

    #[test]
    fn test_pass_advances_and_clears_flag() {
        let mut game = fixed_game(&[&["9C"], &["2S"]], &["3H", "4H"], &["5D"]);
        game.draw().unwrap();
        game.pass().unwrap();

        assert_eq!(game.current_player().name(), "p1");
        assert!(!game.players()[0].has_drawn());
        assert_eq!(game.phase(), Phase::AwaitingMove);
    }

    #[test]
    fn test_play_after_draw_clears_flag() {
        let mut game = fixed_game(&[&["9C", "QS"], &["2S"]], &["5H", "4H"], &["5D"]);
        game.draw().unwrap();
        game.play(card("5H")).unwrap();

        assert_eq!(game.current_player().name(), "p1");
        assert!(!game.players()[0].has_drawn());
    }

    #[test]
    fn test_finished_game_rejects_actions() {
        let mut game = fixed_game(&[&["5C"], &["2S"]], &["3D"], &["5D"]);
        game.play(card("5C")).unwrap();

        let before = game.clone();
        assert_eq!(game.play(card("2S")), Err(GameError::GameFinished));
        assert_eq!(game.draw(), Err(GameError::GameFinished));
        assert_eq!(game.pass(), Err(GameError::GameFinished));
        assert_eq!(game, before);
    }

    #[test]
    fn test_winner_none_while_running() {
        let game = fixed_game(&[&["5C"], &["2S"]], &["3D"], &["5D"]);
        assert!(game.winner().is_none());
        assert!(game.winner_index().is_none());
    }

    #[test]
    fn test_turn_order() {
        let mut game = fixed_game(&[&["5C"], &["2S"], &["3S"]], &["3D"], &["5D"]);
        assert_eq!(game.turn_order(), vec!["p0", "p1", "p2"]);

        game.set_current_player("p1").unwrap();
        assert_eq!(game.turn_order(), vec!["p1", "p2", "p0"]);

        game.set_reverse_direction(true);
        assert_eq!(game.turn_order(), vec!["p1", "p0", "p2"]);
    }

    #[test]
    fn test_reverse_direction_pass() {
        let mut game = fixed_game(&[&["9C"], &["2S"], &["3S"]], &["3H"], &["5D"]);
        game.set_reverse_direction(true);
        game.draw().unwrap();
        game.pass().unwrap();
        assert_eq!(game.current_player().name(), "p2");
    }

    #[test]
    fn test_set_current_player_unknown() {
        let mut game = fixed_game(&[&["5C"], &["2S"]], &["3D"], &["5D"]);
        assert_eq!(
            game.set_current_player("zed"),
            Err(GameError::UnknownPlayer("zed".to_string()))
        );
        assert_eq!(game.current_index(), 0);
    }

    #[test]
    fn test_playable_cards_for_current() {
        let game = fixed_game(&[&["9C", "5S", "8H"], &["2S"]], &["3D"], &["5D"]);
        assert_eq!(game.playable_cards(), vec![card("5S"), card("8H")]);
    }

    #[test]
    fn test_player_by_name() {
        let game = fixed_game(&[&["5C"], &["2S"]], &["3D"], &["5D"]);
        assert_eq!(game.player_by_name("p1").map(Player::hand_size), Some(1));
        assert!(game.player_by_name("P1").is_none());
    }

    #[test]
    fn test_flat_scoring_changes_winner() {
        let players = vec![
            Player::with_hand("a", [card("8C")], false),
            Player::with_hand("b", [card("9C")], false),
        ];
        let config = GameConfig::default().with_scoring(ScoringVariant::Flat);
        let discard = Pile::from_codes(&["KD"]).unwrap();
        let mut game =
            Game::from_parts(config, players, "a", Pile::new(), discard, false, false).unwrap();

        game.draw().unwrap();
        assert_eq!(game.winner().map(Player::name), Some("a"));
    }
}
