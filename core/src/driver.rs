use core::fmt::Debug;
use futures_util::future::{self, Either, FutureExt, LocalBoxFuture};
use futures_util::stream::{Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::*;

/// Event delivered by the host's input layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Input<S> {
    /// First interaction with the surface.
    Start,
    /// Player activated a tile.
    Select(S),
}

/// Carries out effects for the driver.
pub trait EffectPlayer<S> {
    /// Begins `effect`; the returned future resolves once it is over.
    ///
    /// Implementations should resolve even when the effect could not be rendered or heard, since
    /// resolution is the only thing that lets the game move on.
    fn play(&mut self, effect: &Effect<S>) -> LocalBoxFuture<'static, ()>;
}

fn apply<S, G>(engine: &mut RoundEngine<S, G>, input: Input<S>) -> bool
where
    S: Clone + PartialEq + Debug,
    G: PatternGenerator<S>,
{
    match input {
        Input::Start => engine.start().has_update(),
        Input::Select(symbol) => engine.select(symbol).has_update(),
    }
}

/// Runs a game session until `inputs` ends, then hands the engine back.
///
/// Only one effect is in flight at a time and its completion is reported before anything else is
/// started. The one exception is a mismatch, whose failure effect replaces a still running
/// acknowledgment; the replaced future is dropped. `on_change` sees a snapshot after every state
/// change.
pub async fn run<S, G, P, I, F>(
    mut engine: RoundEngine<S, G>,
    player: &mut P,
    mut inputs: I,
    mut on_change: F,
) -> RoundEngine<S, G>
where
    S: Clone + PartialEq + Debug,
    G: PatternGenerator<S>,
    P: EffectPlayer<S>,
    I: Stream<Item = Input<S>> + Unpin,
    F: FnMut(&GameSnapshot),
{
    let mut in_flight: Option<LocalBoxFuture<'static, Ticket>> = None;
    on_change(&engine.snapshot());

    loop {
        if let Some(EffectRequest { ticket, effect }) = engine.take_effect() {
            if in_flight.is_some() {
                log::debug!("{:?} supersedes the running effect", ticket);
            }
            in_flight = Some(player.play(&effect).map(move |()| ticket).boxed_local());
        }

        let updated = match in_flight.take() {
            Some(effect) => match future::select(inputs.next(), effect).await {
                Either::Left((Some(input), effect)) => {
                    in_flight = Some(effect);
                    apply(&mut engine, input)
                }
                Either::Left((None, _)) => break,
                Either::Right((ticket, _)) => engine.complete(ticket).has_update(),
            },
            None => match inputs.next().await {
                Some(input) => apply(&mut engine, input),
                None => break,
            },
        };

        if updated {
            on_change(&engine.snapshot());
        }
    }

    log::debug!("input closed, session over");
    engine
}
