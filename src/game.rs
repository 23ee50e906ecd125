//! Game setup and the fixed-step update pipeline.
//!
//! Split so the simulation can run without a window:
//! - [`init_world`] builds every logic resource and the observers
//! - [`setup`] loads content and generated textures through raylib, then
//!   spawns the player
//! - [`build_update_schedule`] / [`run_update_steps`] drive the update half
//!   of the frame loop
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchpause::switch_pause_observer;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::content::{
    ContentManifest, DEBUG_BACKGROUND_SIZE, DEBUG_BACKGROUND_TEXTURE, DEBUG_GRID_TEXTURE,
    FONT_SPACING, FPS_FONT_SIZE, MONO_FONT, PLAYER_TEXTURE, debug_grid_cells,
};
use crate::resources::editor::EditorState;
use crate::resources::framecounter::FrameCounter;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{InputState, KeyBindings, KeyboardSnapshot, MouseSnapshot};
use crate::resources::screensize::ScreenSize;
use crate::resources::tilegrid::{BLOC_SIZE, TileGrid};
use crate::resources::worldtime::WorldTime;
use crate::systems::content::{
    generate_filled_rectangle, generate_fps_rects, generate_grid_texture, load_content,
};
use crate::systems::controls::controls;
use crate::systems::editor::editor_update;
use crate::systems::gamestate::state_is_playing;
use crate::systems::input::apply_input;
use crate::systems::time::update_world_time;
use crate::systems::world::{surface_y, world_update};

/// Column the player starts on.
pub const PLAYER_START_COLUMN: u32 = 5;

/// Build the ECS world with every resource the update schedule needs.
///
/// The terrain is generated from `seed`; the state is left at
/// [`GameStates::Setup`] until [`enter_play`].
pub fn init_world(config: &GameConfig, seed: u64) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize::from_window(
        config.window_width,
        config.window_height,
    ));
    world.insert_resource(GameState::new());
    world.insert_resource(InputState::default());
    world.insert_resource(KeyBindings::default());
    world.insert_resource(Camera2DRes::default());
    world.insert_resource(EditorState::new());
    world.insert_resource(FrameCounter::new());

    let mut rng = fastrand::Rng::with_seed(seed);
    let grid = TileGrid::generate(config.world_columns, config.world_rows, BLOC_SIZE, &mut rng);
    info!(
        "Generated {}x{} world with {} blocs (seed {})",
        grid.columns(),
        grid.rows(),
        grid.filled_count(),
        seed
    );
    world.insert_resource(grid);
    world.insert_resource(config.clone());

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(switch_pause_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
    world
}

/// Systems run once per fixed step. Controls always run; the editor and the
/// world are frozen while paused.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(controls);
    update.add_systems(editor_update.run_if(state_is_playing).after(controls));
    update.add_systems(world_update.run_if(state_is_playing).after(editor_update));
    update
}

/// Run `steps` fixed update steps of `step_dt` seconds with one frame's input.
///
/// Every step rotates the input snapshots, so a key pressed this frame is a
/// fresh press on the first step only. Wheel movement is likewise delivered
/// to the first step.
pub fn run_update_steps(
    world: &mut World,
    schedule: &mut Schedule,
    keyboard: KeyboardSnapshot,
    mouse: MouseSnapshot,
    steps: u32,
    step_dt: f32,
) {
    for i in 0..steps {
        let mouse = if i == 0 {
            mouse
        } else {
            MouseSnapshot { wheel: 0.0, ..mouse }
        };
        apply_input(world, keyboard.clone(), mouse);
        update_world_time(world, step_dt);
        schedule.run(world);
    }
}

/// Spawn the player standing on the start column.
pub fn spawn_player(world: &mut World, width: f32, height: f32) -> Entity {
    let grid = world.resource::<TileGrid>();
    let col = PLAYER_START_COLUMN.min(grid.columns().saturating_sub(1));
    let x = (col as f32 + 0.5) * grid.bloc_size() as f32;
    let y = surface_y(grid, x).unwrap_or(0.0);
    world
        .spawn((
            Player,
            MapPosition::new(x, y),
            Sprite::anchored_at_feet(PLAYER_TEXTURE, width, height),
        ))
        .id()
}

/// Load the content registry, build generated textures and spawn the player.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
) -> Result<(), String> {
    let config = world.resource::<GameConfig>().clone();
    let screen = *world.resource::<ScreenSize>();

    let (mut textures, fonts) =
        load_content(rl, th, &config.content_root, &ContentManifest::default())?;

    let bloc = BLOC_SIZE as i32;
    let (cells_w, cells_h) = debug_grid_cells(screen.w, screen.h, bloc);
    let grid_tex = generate_grid_texture(rl, th, cells_w, cells_h, bloc, Color::WHITE)?;
    textures.insert(DEBUG_GRID_TEXTURE, grid_tex);
    let (bg_w, bg_h) = DEBUG_BACKGROUND_SIZE;
    let background = generate_filled_rectangle(rl, th, bg_w, bg_h, Color::WHITE)?;
    textures.insert(DEBUG_BACKGROUND_TEXTURE, background);

    generate_fps_rects(
        rl,
        th,
        &mut textures,
        fonts.require(MONO_FONT)?,
        FPS_FONT_SIZE,
        FONT_SPACING,
    )?;

    let player = textures.require(PLAYER_TEXTURE)?;
    let (player_w, player_h) = (player.width as f32, player.height as f32);

    world.insert_resource(textures);
    world.insert_non_send_resource(fonts);
    spawn_player(world, player_w, player_h);
    Ok(())
}

/// Leave setup and start the simulation.
pub fn enter_play(world: &mut World) {
    world.resource_mut::<GameState>().set(GameStates::Playing);
    info!("Entering play");
}
