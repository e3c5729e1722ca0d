//! Windowed demo: the same seeded board drawn with macroquad.

use life_demo::{
    DemoConfig, Simulation, application,
    rendering::window::{draw_board, draw_status, window_extent},
};
use log::error;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    let (width, height) = window_extent(DemoConfig::default().board_size);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DemoConfig::default();
    let mut simulation: Simulation = match application::simulation_from_config(&config) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!("failed to seed the board: {err}");
            return;
        }
    };

    let interval = config.frame_delay().as_secs_f32();
    let mut timer = 0.0;
    let mut paused = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }

        timer += get_frame_time();
        if !paused && timer >= interval {
            simulation.tick();
            timer = 0.0;
        }

        clear_background(BLACK);
        draw_board(simulation.board());
        draw_status(simulation.board(), simulation.generation());

        next_frame().await;
    }
}
