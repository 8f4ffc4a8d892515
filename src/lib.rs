/// Circle overlap tests and the bullet/enemy and player/enemy passes.
pub mod collision;
/// Per-tick simulation: spawning, difficulty and the frame orchestrator.
pub mod compute;
/// Runtime configuration, read from a TOML file.
pub mod config;
/// Terminal front-end implementing the render seam with crossterm.
pub mod display;
/// Game entities and the state they live in.
pub mod entities;
pub mod error;
/// Held-control state and the key tracker.
pub mod input;
/// Ordered entity pools with in-place removal.
pub mod pool;
/// The render seam between the simulation and any front-end.
pub mod render;
/// Session lifecycle: start, playing and game-over.
pub mod session;
