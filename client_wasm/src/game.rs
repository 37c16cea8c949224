//! The handle JavaScript drives from `requestAnimationFrame`

use crate::clock::TickClock;
use crate::input::Controls;
use crate::renderer::Renderer;
use game_core::{Config, Control, GameRng, GameState, Params, RenderError};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A running local game: simulation, held keys and the WebGPU surface
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    renderer: Option<Renderer>,
    controls: Controls,
    clock: TickClock,
}

/// Start a game on `canvas`. Resolves to a `Game`.
#[wasm_bindgen]
pub fn start_game(canvas: HtmlCanvasElement) -> js_sys::Promise {
    crate::logging::init();
    wasm_bindgen_futures::future_to_promise(async move {
        let game = Game::new(canvas).await?;
        Ok(JsValue::from(game))
    })
}

impl Game {
    async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let state = GameState::new(Config::default(), GameRng::from_entropy()).map_err(to_js)?;

        let renderer = Renderer::new(canvas, state.config.arena_side)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "renderer init failed");
                to_js(e)
            })?;

        Ok(Self {
            state,
            renderer: Some(renderer),
            controls: Controls::new(),
            clock: TickClock::new(Params::TICK_RATE, Params::MAX_TICKS_PER_FRAME),
        })
    }
}

#[wasm_bindgen]
impl Game {
    /// Returns true if the key is bound, so the page can suppress scrolling
    pub fn key_down(&mut self, key: &str) -> bool {
        self.controls.key_down(key)
    }

    pub fn key_up(&mut self, key: &str) {
        self.controls.key_up(key);
    }

    /// Window lost focus: key-up events will not arrive
    pub fn blur(&mut self) {
        self.controls.release_all();
    }

    /// Stop at the next frame, as if `Q` was pressed
    pub fn quit(&mut self) {
        self.controls.quit();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.resize(width, height);
        }
    }

    /// Advance and draw one animation frame.
    /// Returns false once the game has quit; the GPU resources are gone then.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        let renderer = self
            .renderer
            .as_mut()
            .ok_or_else(|| to_js(RenderError::Closed))?;

        let ticks = self.clock.ticks(now_ms);
        let events = self.controls.take_events();

        let control = self
            .state
            .run_frame(events, &self.controls.held, ticks, now_ms, renderer)
            .map_err(to_js)?;

        match control {
            Control::Continue => Ok(true),
            Control::Quit => {
                self.renderer = None;
                self.controls.close();
                tracing::info!(
                    wasd = self.state.score.wasd,
                    arrows = self.state.score.arrows,
                    "game closed"
                );
                Ok(false)
            }
        }
    }
}
