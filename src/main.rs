mod app;
mod camera;
mod cli;
mod clock;
mod config;
mod event;
mod logging;
mod report;
mod watch;

use std::process::ExitCode;

use clap::Parser;
use hyperview_hypercube::Hypercube;

use crate::app::App;
use crate::cli::Cli;
use crate::config::ViewerConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let (mut cfg, config_path) = match ViewerConfig::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    cli.apply_overrides(&mut cfg);
    if let Some(path) = &config_path {
        log::info!("config loaded from {}", path.display());
    }

    if cli.headless {
        return run_headless(&cfg, cli.time);
    }

    let mut app = match App::new(cfg, config_path, cli.watch_config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (mut rl, thread) = raylib::init()
        .size(app.cfg.window.width, app.cfg.window.height)
        .title(&app.cfg.window.title)
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(app.cfg.window.target_fps);

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&rl, dt);
        app.render(&mut rl, &thread);
    }
    ExitCode::SUCCESS
}

fn run_headless(cfg: &ViewerConfig, time: f64) -> ExitCode {
    let params = match cfg.projection_params() {
        Ok(p) => p,
        Err(e) => {
            log::error!("config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let dimension = cfg.viewer.dimension;
    let cube = Hypercube::new(dimension, params);
    let geometry = cube.frame(time);
    print!("{}", report::catalog_entry(dimension));
    println!();
    print!("{}", report::frame_summary(&geometry, time));
    println!();
    print!("{}", report::stats_table());
    ExitCode::SUCCESS
}
