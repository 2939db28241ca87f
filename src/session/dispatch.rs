//! One action, one snapshot round-trip.
//!
//! `Session::dispatch` is the whole lifecycle of an external request:
//! 1. Authorize the user with the identity provider
//! 2. Load the named game's snapshot (except for `Start`)
//! 3. Check the user may perform this action now
//! 4. Apply it to the in-memory `Game`
//! 5. Save the snapshot if the action mutated state
//!
//! A rejected action returns before step 5, so storage is never touched.
//! The session holds no game between calls.

use crate::cards::Card;
use crate::core::GameConfig;
use crate::error::{SessionError, StorageError};
use crate::games::crazy_eights::{DrawOutcome, Game, ADMIN};
use crate::persist::SnapshotStore;
use crate::rules;

use super::action::{Action, HandView, Outcome};
use super::identity::IdentityProvider;
use super::roster::Roster;

/// Dispatches actions against stored games.
///
/// ## Example
///
/// ```
/// use crazy_eights::persist::MemoryStore;
/// use crazy_eights::session::{Action, AllowAll, Outcome, Roster, Session};
/// use crazy_eights::GameConfig;
///
/// let config = GameConfig::new().with_seed(7);
/// let mut session = Session::with_config(MemoryStore::new(), AllowAll, config);
/// let roster: Roster = ["alice", "bob"].into_iter().collect();
///
/// session.dispatch("table", "admin", "", Action::Start(roster)).unwrap();
/// let order = session.dispatch("table", "bob", "", Action::Order).unwrap();
/// assert_eq!(order, Outcome::Order(vec!["alice".into(), "bob".into()]));
/// ```
pub struct Session<S, I> {
    store: S,
    identity: I,
    config: GameConfig,
}

impl<S: SnapshotStore, I: IdentityProvider> Session<S, I> {
    /// Create a session with the default game configuration.
    pub fn new(store: S, identity: I) -> Self {
        Self::with_config(store, identity, GameConfig::default())
    }

    pub fn with_config(store: S, identity: I, config: GameConfig) -> Self {
        Self {
            store,
            identity,
            config,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run one action for `user` against the game called `game_name`.
    pub fn dispatch(
        &mut self,
        game_name: &str,
        user: &str,
        credential: &str,
        action: Action,
    ) -> Result<Outcome, SessionError> {
        if !self.identity.authorize(user, credential) {
            log::warn!("{game_name}: rejected credentials for {user:?}");
            return Err(SessionError::Unauthorized(user.to_string()));
        }

        match action {
            Action::Start(roster) => self.start(game_name, user, &roster),
            Action::Order => {
                let game = self.load(game_name)?;
                let order = game.turn_order().into_iter().map(str::to_string).collect();
                Ok(Outcome::Order(order))
            }
            Action::Cards(player) => {
                if user != player && user != ADMIN {
                    return Err(SessionError::Forbidden);
                }
                let game = self.load(game_name)?;
                Ok(Outcome::Hand(hand_view(&game, &player)?))
            }
            Action::Play(code) => {
                let card = Card::from_code(&code)?;
                self.take_turn(game_name, user, |game| {
                    game.play(card)?;
                    let (next, winner) = if game.is_over() {
                        (None, winner_name(game))
                    } else {
                        (Some(game.current_player().name().to_string()), None)
                    };
                    Ok(Outcome::Played { card, next, winner })
                })
            }
            Action::Draw => self.take_turn(game_name, user, |game| match game.draw()? {
                DrawOutcome::Drew(card) => Ok(Outcome::Drew {
                    card,
                    hand: hand_view(game, user)?,
                }),
                DrawOutcome::PileExhausted => Ok(Outcome::PileExhausted {
                    winner: winner_name(game),
                }),
            }),
            Action::Pass => self.take_turn(game_name, user, |game| {
                game.pass()?;
                Ok(Outcome::Passed {
                    next: game.current_player().name().to_string(),
                })
            }),
        }
    }

    /// Deal a fresh game, replacing any stored one of the same name.
    fn start(
        &mut self,
        game_name: &str,
        user: &str,
        roster: &Roster,
    ) -> Result<Outcome, SessionError> {
        if user != ADMIN {
            return Err(SessionError::Forbidden);
        }

        let game = Game::start(roster.players(), self.config.clone())?;
        self.store.save(game_name, &game.to_snapshot())?;
        log::info!("{game_name}: started with {} players", game.players().len());

        Ok(Outcome::Started {
            players: game.players().iter().map(|p| p.name().to_string()).collect(),
            current: game.current_player().name().to_string(),
            top_discard: game.top_discard(),
        })
    }

    fn load(&self, game_name: &str) -> Result<Game, SessionError> {
        let snapshot = self.store.load(game_name)?;
        let game = Game::from_snapshot(snapshot, self.config.clone()).map_err(StorageError::from)?;
        Ok(game)
    }

    /// Load, check it is `user`'s turn, apply `f`, and save on success.
    fn take_turn<F>(&mut self, game_name: &str, user: &str, f: F) -> Result<Outcome, SessionError>
    where
        F: FnOnce(&mut Game) -> Result<Outcome, SessionError>,
    {
        let mut game = self.load(game_name)?;

        let current = game.current_player().name();
        if current != user {
            return Err(SessionError::NotYourTurn {
                user: user.to_string(),
                current: current.to_string(),
            });
        }

        let outcome = f(&mut game)?;
        self.store.save(game_name, &game.to_snapshot())?;
        log::debug!("{game_name}: saved after {user}'s action");
        Ok(outcome)
    }
}

fn winner_name(game: &Game) -> Option<String> {
    game.winner().map(|p| p.name().to_string())
}

/// A player's hand, each card marked playable or not.
fn hand_view(game: &Game, player: &str) -> Result<HandView, SessionError> {
    let p = game
        .player_by_name(player)
        .ok_or_else(|| SessionError::UnknownPlayer(player.to_string()))?;
    let top = game.top_discard();
    let cards = p
        .hand()
        .iter()
        .map(|&c| (c, top.map_or(true, |t| rules::is_valid_play(c, t))))
        .collect();

    Ok(HandView {
        player: player.to_string(),
        cards,
        top_discard: top,
    })
}
