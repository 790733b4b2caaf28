use core::fmt::Debug;
use core::time::Duration;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Idle,
    Playing,
    AwaitingInput,
    Validating,
    Succeeded,
    Failed,
}

impl RoundState {
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::AwaitingInput)
    }

    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What the renderer needs to redraw after a state change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: RoundState,
    pub score: Score,
    pub pattern_len: usize,
    pub started: bool,
    pub background: Rgb,
}

/// Continuation to run once the effect the engine waits on completes.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Step {
    /// Pacing gap before the symbol at this index elapsed.
    PlaybackGap(usize),
    /// Symbol at this index finished flashing.
    PlaybackFlash(usize),
    Acknowledge,
    Advance,
    GameOver,
    Restart,
    Begin,
}

/// Owns the game state and decides which effect to play next.
///
/// The engine never waits by itself: each transition leaves at most one [`EffectRequest`] behind
/// (see [`RoundEngine::take_effect`]) and progress only resumes when the host reports that
/// request's ticket through [`RoundEngine::complete`]. A completion for any other ticket is stale
/// and changes nothing, which is how a mismatch stops playback that is already scheduled.
#[derive(Debug)]
pub struct RoundEngine<S, G> {
    config: EngineConfig,
    generator: G,
    rng: SmallRng,
    state: RoundState,
    started: bool,
    pattern: Pattern<S>,
    cursor: usize,
    pending: VecDeque<S>,
    cancel_acks: bool,
    score: Score,
    background: Rgb,
    last_ticket: Ticket,
    waiting: Option<(Ticket, Step)>,
    outbox: Option<EffectRequest<S>>,
}

impl<S, G> RoundEngine<S, G>
where
    S: Clone + PartialEq + Debug,
    G: PatternGenerator<S>,
{
    /// # Panics
    ///
    /// When `config` does not pass [`EngineConfig::validate`].
    pub fn new(config: EngineConfig, generator: G) -> Self {
        if let Err(err) = config.validate() {
            panic!("invalid engine config: {err}");
        }

        Self {
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            generator,
            state: Default::default(),
            started: false,
            pattern: Pattern::new(),
            cursor: 0,
            pending: VecDeque::new(),
            cancel_acks: false,
            score: 0,
            background: Rgb::BLACK,
            last_ticket: Ticket(0),
            waiting: None,
            outbox: None,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn pattern(&self) -> &Pattern<S> {
        &self.pattern
    }

    /// Number of correct selections made so far this round.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selections accepted but not yet acknowledged with a flash.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ticket of the effect the engine is currently waiting on.
    pub fn waiting_on(&self) -> Option<Ticket> {
        self.waiting.map(|(ticket, _)| ticket)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.state,
            score: self.score,
            pattern_len: self.pattern.len(),
            started: self.started,
            background: self.background,
        }
    }

    /// Effect requested by the latest transition, if it has not been taken yet.
    pub fn take_effect(&mut self) -> Option<EffectRequest<S>> {
        self.outbox.take()
    }

    /// Starts the first round. Only the first call has any effect.
    pub fn start(&mut self) -> StartOutcome {
        if self.started {
            log::trace!("start ignored, game already running");
            return StartOutcome::AlreadyStarted;
        }

        self.started = true;
        log::debug!("game started");
        self.deal_new_pattern();
        StartOutcome::Started
    }

    /// Checks one player selection against the pattern.
    ///
    /// # Panics
    ///
    /// When `symbol` is not part of the generator's alphabet.
    pub fn select(&mut self, symbol: S) -> SelectOutcome {
        use SelectOutcome::*;

        if !self.state.accepts_input() {
            log::trace!("selection {:?} ignored in {:?}", symbol, self.state);
            return Ignored;
        }

        assert!(
            self.generator.alphabet().contains(&symbol),
            "selected symbol {symbol:?} is not part of the alphabet"
        );

        if self.pattern[self.cursor] != symbol {
            log::debug!(
                "mismatch at {}: expected {:?}, got {:?}",
                self.cursor,
                self.pattern[self.cursor],
                symbol
            );
            self.fail();
            return Mismatch;
        }

        self.pending.push_back(symbol);
        self.cursor += 1;

        let outcome = if self.cursor == self.pattern.len() {
            self.state = RoundState::Validating;
            log::debug!("pattern of {} reproduced", self.pattern.len());
            RoundComplete
        } else {
            Matched
        };

        if !self.is_draining() {
            self.drain_step();
        }

        outcome
    }

    /// Reports that the effect issued with `ticket` has finished.
    pub fn complete(&mut self, ticket: Ticket) -> StepOutcome {
        let step = match self.waiting {
            Some((expected, step)) if expected == ticket => step,
            _ => {
                log::trace!("stale completion {:?}, waiting on {:?}", ticket, self.waiting);
                return StepOutcome::Stale;
            }
        };
        self.waiting = None;

        match step {
            Step::PlaybackGap(index) => {
                let symbol = self.pattern[index].clone();
                self.issue(
                    Effect::PlaySymbol {
                        symbol,
                        highlight: self.config.highlight,
                    },
                    Step::PlaybackFlash(index),
                );
            }
            Step::PlaybackFlash(index) if index + 1 < self.pattern.len() => {
                self.issue(Effect::Pause(self.config.pace), Step::PlaybackGap(index + 1));
            }
            Step::PlaybackFlash(_) => self.open_input(),
            Step::Acknowledge => self.drain_step(),
            Step::Advance => {
                self.pattern = self.generator.extend(&self.pattern);
                self.begin_playback();
            }
            Step::GameOver => {
                self.score = 0;
                self.background = Rgb::random(&mut self.rng);
                self.issue(
                    Effect::Background {
                        color: self.background,
                        duration: self.config.fade,
                        delay: self.config.restart_delay,
                    },
                    Step::Restart,
                );
            }
            Step::Restart => {
                self.issue(Effect::Pause(self.config.restart_pause), Step::Begin);
            }
            Step::Begin => self.deal_new_pattern(),
        }

        StepOutcome::Advanced
    }

    fn is_draining(&self) -> bool {
        matches!(self.waiting, Some((_, Step::Acknowledge)))
    }

    fn issue(&mut self, effect: Effect<S>, step: Step) {
        let ticket = self.last_ticket.next();
        self.last_ticket = ticket;
        log::trace!("request {:?}: {:?}", ticket, effect);
        self.waiting = Some((ticket, step));
        self.outbox = Some(EffectRequest { ticket, effect });
    }

    fn deal_new_pattern(&mut self) {
        self.pattern = self.generator.initial_pattern(self.config.initial_length);
        self.begin_playback();
    }

    fn begin_playback(&mut self) {
        log::debug!("playing pattern of {}", self.pattern.len());
        self.state = RoundState::Playing;
        self.cursor = 0;
        self.pending.clear();
        self.issue(Effect::Pause(self.config.pace), Step::PlaybackGap(0));
    }

    fn open_input(&mut self) {
        log::debug!("awaiting input");
        self.state = RoundState::AwaitingInput;
        self.cursor = 0;
        self.pending.clear();
        self.cancel_acks = false;
    }

    fn drain_step(&mut self) {
        if self.cancel_acks {
            return;
        }

        if let Some(symbol) = self.pending.pop_front() {
            self.issue(
                Effect::PlaySymbol {
                    symbol,
                    highlight: self.config.highlight,
                },
                Step::Acknowledge,
            );
        } else if matches!(self.state, RoundState::Validating) {
            self.succeed();
        }
    }

    fn succeed(&mut self) {
        self.state = RoundState::Succeeded;
        self.score = self.score.saturating_add(1);
        self.background = Rgb::random(&mut self.rng);
        log::debug!("round won, score {}", self.score);
        self.issue(
            Effect::Background {
                color: self.background,
                duration: self.config.fade,
                delay: Duration::ZERO,
            },
            Step::Advance,
        );
    }

    fn fail(&mut self) {
        self.state = RoundState::Failed;
        self.cancel_acks = true;
        self.pending.clear();
        self.issue(
            Effect::Failure {
                highlight: self.config.failure_highlight,
                background: self.background,
                cycles: self.config.failure_cycles,
                cycle: self.config.failure_cycle,
                chord: self.generator.alphabet().to_vec(),
            },
            Step::GameOver,
        );
    }
}
