use core::time::Duration;
use echotiles_core as game;
use futures_channel::mpsc;
use game::{GameSnapshot, Input, Rgb, Tile};
use yew::prelude::*;

use crate::effects::DomEffects;
use crate::utils::{MouseButtons, millis};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Select(Tile),
    Snapshot(GameSnapshot),
    Light(Option<Tile>),
    Backdrop {
        color: Rgb,
        fade: Duration,
        delay: Duration,
    },
}

fn tile_style(tile: Tile, lit: bool) -> String {
    let color = if lit {
        tile.flash_color()
    } else {
        tile.color()
    };
    format!("background: {};", color)
}

fn backdrop_style(color: Rgb, fade: Duration, delay: Duration) -> String {
    format!(
        "background: {}; transition: background {}ms ease-in-out {}ms;",
        color,
        millis(fade),
        millis(delay)
    )
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    tile: Tile,
    #[prop_or_default]
    lit: bool,
    onselect: Callback<Tile>,
}

#[function_component(TileView)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps {
        tile,
        lit,
        onselect,
    } = props.clone();

    let class = classes!("tile", tile.name(), lit.then_some("lit"));
    let style = tile_style(tile, lit);

    let onpointerdown = Callback::from(move |e: PointerEvent| {
        if MouseButtons::is_primary(e.buttons()) {
            log::trace!("{} pointer down", tile);
            onselect.emit(tile);
        }
    });

    html! {
        <div {class} {style} {onpointerdown}/>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
}

pub(crate) struct GameView {
    snapshot: GameSnapshot,
    lit: Option<Tile>,
    backdrop: (Rgb, Duration, Duration),
    inputs: mpsc::UnboundedSender<Input<Tile>>,
}

impl GameView {
    fn spawn_session(ctx: &Context<Self>) -> (GameSnapshot, mpsc::UnboundedSender<Input<Tile>>) {
        let seed = ctx.props().seed;
        let engine = game::RoundEngine::new(
            game::EngineConfig::default().with_seed(seed),
            game::RandomPatternGenerator::tiles(seed.wrapping_add(1)),
        );
        let snapshot = engine.snapshot();

        let (inputs, rx) = mpsc::unbounded();
        let mut effects = DomEffects::new(ctx.link().callback(|msg: Msg| msg));
        let on_change = ctx.link().callback(Msg::Snapshot);

        wasm_bindgen_futures::spawn_local(async move {
            game::run(engine, &mut effects, rx, move |snapshot| {
                on_change.emit(*snapshot)
            })
            .await;
            log::debug!("session ended");
        });

        (snapshot, inputs)
    }

    fn send(&self, input: Input<Tile>) {
        if let Err(err) = self.inputs.unbounded_send(input) {
            log::warn!("game session is gone: {:?}", err);
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (snapshot, inputs) = Self::spawn_session(ctx);
        Self {
            backdrop: (snapshot.background, Duration::ZERO, Duration::ZERO),
            snapshot,
            lit: None,
            inputs,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                if !self.snapshot.started {
                    log::debug!("first interaction, starting");
                    self.send(Input::Start);
                }
                false
            }
            Select(tile) => {
                log::debug!("select {}", tile);
                self.send(Input::Select(tile));
                false
            }
            Snapshot(snapshot) => {
                let updated = self.snapshot != snapshot;
                self.snapshot = snapshot;
                updated
            }
            Light(tile) => {
                let updated = self.lit != tile;
                self.lit = tile;
                updated
            }
            Backdrop { color, fade, delay } => {
                self.backdrop = (color, fade, delay);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let (color, fade, delay) = self.backdrop;
        let onpointerdown = ctx.link().batch_callback(|e: PointerEvent| {
            MouseButtons::is_primary(e.buttons()).then_some(Msg::Start)
        });
        let onselect = ctx.link().callback(Msg::Select);

        html! {
            <div class="page" {onpointerdown}>
                <div class="bg" style={backdrop_style(color, fade, delay)}/>
                <div class="score-container">{format!("score: {}", self.snapshot.score)}</div>
                <div class="tiles-container">
                    <div class="tiles">
                        {
                            for Tile::ALL.into_iter().map(|tile| {
                                let lit = self.lit == Some(tile);
                                let onselect = onselect.clone();
                                html! {
                                    <TileView {tile} {lit} {onselect}/>
                                }
                            })
                        }
                    </div>
                </div>
                <p class="instruction">{"Match the pattern by clicking on the tiles"}</p>
            </div>
        }
    }
}
