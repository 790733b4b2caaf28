use core::time::Duration;
use echotiles_core::{Effect, EffectPlayer, Rgb, Tile};
use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::Callback;

use crate::game::Msg;
use crate::utils::millis;

fn sleep(duration: Duration) -> TimeoutFuture {
    TimeoutFuture::new(millis(duration))
}

/// Turns the tile light off when dropped, whether the flash ran out or was superseded.
struct LitTile {
    notify: Callback<Msg>,
    tile: Tile,
}

impl Drop for LitTile {
    fn drop(&mut self) {
        log::trace!("{} light off", self.tile);
        self.notify.emit(Msg::Light(None));
    }
}

fn lit_while<F>(notify: Callback<Msg>, tile: Tile, until: F) -> LocalBoxFuture<'static, ()>
where
    F: Future<Output = ()> + 'static,
{
    notify.emit(Msg::Light(Some(tile)));
    let lit = LitTile { notify, tile };
    async move {
        until.await;
        drop(lit);
    }
    .boxed_local()
}

/// Plays effects by messaging the game view and driving `<audio>` tones.
pub(crate) struct DomEffects {
    notify: Callback<Msg>,
    tones: [Option<HtmlAudioElement>; 4],
}

impl DomEffects {
    pub(crate) fn new(notify: Callback<Msg>) -> Self {
        let tones = Tile::ALL.map(|tile| match HtmlAudioElement::new_with_src(tile.tone()) {
            Ok(audio) => Some(audio),
            Err(err) => {
                log::warn!("could not load tone for {}: {:?}", tile, err);
                None
            }
        });
        Self { notify, tones }
    }

    fn beep(&self, tile: Tile) {
        let Some(audio) = &self.tones[usize::from(tile.index())] else {
            return;
        };

        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("tone for {} did not play: {:?}", tile, err);
                }
            }),
            Err(err) => log::warn!("tone for {} did not play: {:?}", tile, err),
        }
    }

    fn backdrop(&self, color: Rgb, fade: Duration, delay: Duration) {
        self.notify.emit(Msg::Backdrop { color, fade, delay });
    }
}

impl EffectPlayer<Tile> for DomEffects {
    fn play(&mut self, effect: &Effect<Tile>) -> LocalBoxFuture<'static, ()> {
        use Effect::*;

        match effect.clone() {
            Pause(duration) => sleep(duration).boxed_local(),
            PlaySymbol { symbol, highlight } => {
                self.beep(symbol);
                lit_while(self.notify.clone(), symbol, sleep(highlight))
            }
            Background {
                color,
                duration,
                delay,
            } => {
                self.backdrop(color, duration, delay);
                sleep(delay + duration).boxed_local()
            }
            Failure {
                highlight,
                background,
                cycles,
                cycle,
                chord,
            } => {
                for tile in chord {
                    self.beep(tile);
                }
                let notify = self.notify.clone();
                let half = cycle / 2;
                async move {
                    for _ in 0..cycles {
                        notify.emit(Msg::Backdrop {
                            color: highlight,
                            fade: half,
                            delay: Duration::ZERO,
                        });
                        sleep(half).await;
                        notify.emit(Msg::Backdrop {
                            color: background,
                            fade: half,
                            delay: Duration::ZERO,
                        });
                        sleep(half).await;
                    }
                }
                .boxed_local()
            }
        }
    }
}
