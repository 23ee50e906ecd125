//! Platformer main entry point.
//!
//! A small 2D platformer with a built-in level editor, written in Rust using:
//! - **raylib** for windowing, input, content and drawing
//! - **bevy_ecs** for resources, systems and observers
//!
//! # Main Loop
//!
//! 1. Read `config.ini`, open a 1200×800 window, build the world
//! 2. Load textures and fonts, generate debug and FPS textures
//! 3. Every frame:
//!    - turn the frame time into whole 1/60 s update steps
//!    - each step: rotate input snapshots, handle hotkeys and camera pan,
//!      then (unless paused) run the editor and the world
//!    - draw world, editor and the FPS overlay
//!
//! # Controls
//!
//! Escape quits, G toggles the debug grid, P pauses, arrow keys pan the
//! camera. Left mouse paints blocs, right mouse erases them.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use platformer::game;
use platformer::resources::fixedtimestep::FixedTimestep;
use platformer::resources::framecounter::FrameCounter;
use platformer::resources::gameconfig::GameConfig;
use platformer::resources::gamestate::{GameState, GameStates};
use platformer::resources::input::{InputLatch, KeyBindings};
use platformer::systems::input::poll_input;
use platformer::systems::render::draw_frame;

/// Platformer with a tile editor
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Terrain seed, overrides the config file.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Platformer");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the controls system
    rl.set_exit_key(None);

    // --------------- ECS world + content ---------------
    let mut world = game::init_world(&config, seed);
    if let Err(e) = game::setup(&mut world, &mut rl, &thread) {
        error!("{}", e);
        std::process::exit(1);
    }
    game::enter_play(&mut world);

    let mut update = game::build_update_schedule();
    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    let mut timestep = FixedTimestep::from_rate(config.target_fps);
    let keys = *world.resource::<KeyBindings>();
    let mut latch = InputLatch::new();

    // --------------- Main loop ---------------
    while !rl.window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let frame_dt = rl.get_frame_time();

        let (keyboard, mouse) = poll_input(&rl, &keys);
        latch.record(keyboard, mouse);

        let steps = timestep.advance(frame_dt);
        if steps > 0 {
            let (keyboard, mouse) = latch.take();
            game::run_update_steps(
                &mut world,
                &mut update,
                keyboard,
                mouse,
                steps,
                timestep.step(),
            );
        }
        world.clear_trackers();

        world.resource_mut::<FrameCounter>().update(frame_dt);
        let drawn = {
            let mut d = rl.begin_drawing(&thread);
            draw_frame(&mut world, &mut d)
        };
        if let Err(e) = drawn {
            error!("{}", e);
            std::process::exit(1);
        }
    }
    info!("Bye!");
}
