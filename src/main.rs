mod cli;

use std::error::Error;

use clipsy::prelude::*;
use log::info;

use cli::CLIOptions;

const SNAPSHOT_PATH: &str = "snapshot.png";

fn window_title(engine: &Engine) -> String {
    format!("Clipsy - {} / {}", engine.algorithm(), engine.line_drawer())
}

fn main() -> Result<(), Box<dyn Error>> {
    let options: CLIOptions = argh::from_env();

    env_logger::Builder::new()
        .filter_level(options.verbose.unwrap_or(log::LevelFilter::Info))
        .parse_default_env()
        .init();

    let config = Config::from(&options);
    config.validate()?;

    let mut engine = Engine::new(&config);

    // Headless: one frame to disk
    if let Some(path) = &options.snapshot {
        engine.update();
        engine.render();
        engine.save_snapshot(path)?;
        return Ok(());
    }

    let mut window = Window::new(&window_title(&engine), config.width, config.height)?;
    let mut frame_limiter = FrameLimiter::new(&window);
    info!("window {}x{} open", window.width(), window.height());

    loop {
        match window.poll_events() {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h);
            }
            WindowEvent::ToggleAlgorithm => {
                engine.toggle_algorithm();
                window.set_title(&window_title(&engine))?;
            }
            WindowEvent::ToggleLineDrawer => {
                engine.toggle_line_drawer();
                window.set_title(&window_title(&engine))?;
            }
            WindowEvent::Regenerate => engine.regenerate(),
            WindowEvent::Snapshot => engine.save_snapshot(SNAPSHOT_PATH)?,
            WindowEvent::None => {}
        }

        engine.update();
        engine.render();
        window.present(engine.frame_buffer())?;

        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
