/// wire3d Terminal Demo - Four Wireframe Cubes
///
/// Controls:
///   - Left click: select the cube under the cursor
///   - T/R/E then move the mouse: translate/rotate/scale the selection
///   - Right drag: orbit the camera
///   - Wheel: dolly
///   - WASD: move the camera, Arrow keys: pan
///   - Q/ESC: Quit
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wire3d_core::SceneConfig;
use wire3d_terminal::TerminalApp;

#[derive(Parser, Debug)]
#[command(name = "wire3d-terminal", version, about = "Interactive wireframe cubes in the terminal")]
struct Args {
    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    fov_degrees: f64,

    /// Near clip plane distance
    #[arg(long, default_value_t = 0.1)]
    near: f64,

    /// Far clip plane distance
    #[arg(long, default_value_t = 100.0)]
    far: f64,

    /// Initial camera dolly, clamped to [-10, 10]
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    dolly: f64,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Keep every cube still
    #[arg(long)]
    no_auto_rotate: bool,

    /// Write logs here; the screen itself is owned by the renderer
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            fov: self.fov_degrees.to_radians(),
            near: self.near,
            far: self.far,
            dolly: self.dolly,
            auto_rotate: !self.no_auto_rotate,
            ..SceneConfig::default()
        }
    }
}

fn init_logging(path: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = args.scene_config();
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing::info!(?config, "starting wire3d terminal");

    // Run the terminal app
    let mut app = TerminalApp::new(config, args.fps)?;
    app.run()?;

    println!("Thank you for using wire3d!");
    Ok(())
}
