//! WebGPU browser client for four-paddle Pong
//!
//! Runs the `game_core` simulation locally at a fixed tick rate and draws it
//! with wgpu 24.0 through the "webgpu" feature. Only the pure helpers build
//! for native targets, so they can be tested without a browser.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod clock;
mod input;
mod mesh;
mod renderer;
mod text;

#[cfg(target_arch = "wasm32")]
mod game;
#[cfg(target_arch = "wasm32")]
mod logging;

#[cfg(target_arch = "wasm32")]
pub use game::{start_game, Game};
