use argh::FromArgs;
use clipsy::config::{self, Config};
use clipsy::render::LineDrawer;
use clipsy::{ClipAlgorithm, Viewport};

/// Draws random line segments clipped to a rectangular viewport.
///
/// Keys: C toggles the clipping algorithm, L the line drawer, R regenerates
/// the lines, S saves snapshot.png, Esc quits.
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// clipping algorithm: cohen-sutherland (cs) or liang-barsky (lb)
    #[argh(option, default = "ClipAlgorithm::default()")]
    pub algorithm: ClipAlgorithm,
    /// line drawer: bresenham or dda
    #[argh(option, default = "LineDrawer::default()")]
    pub line_drawer: LineDrawer,
    /// number of random line segments
    #[argh(option, default = "config::DEFAULT_LINE_COUNT")]
    pub lines: usize,
    /// seed for the random scene
    #[argh(option)]
    pub seed: Option<u64>,
    /// window width in pixels
    #[argh(option, default = "config::WINDOW_WIDTH")]
    pub width: u32,
    /// window height in pixels
    #[argh(option, default = "config::WINDOW_HEIGHT")]
    pub height: u32,
    /// left edge of the viewport in NDC
    #[argh(option, default = "-0.5")]
    pub x_min: f64,
    /// right edge of the viewport in NDC
    #[argh(option, default = "0.5")]
    pub x_max: f64,
    /// bottom edge of the viewport in NDC
    #[argh(option, default = "-0.5")]
    pub y_min: f64,
    /// top edge of the viewport in NDC
    #[argh(option, default = "0.5")]
    pub y_max: f64,
    /// leave out the two shaded triangles
    #[argh(switch)]
    pub no_triangles: bool,
    /// draw a background grid
    #[argh(switch)]
    pub grid: bool,
    /// render a single frame to this image file and exit
    #[argh(option)]
    pub snapshot: Option<String>,
}

impl From<&CLIOptions> for Config {
    fn from(opts: &CLIOptions) -> Self {
        Config {
            width: opts.width,
            height: opts.height,
            // Bounds are validated by Config::validate before use
            viewport: Viewport {
                x_min: opts.x_min,
                x_max: opts.x_max,
                y_min: opts.y_min,
                y_max: opts.y_max,
            },
            algorithm: opts.algorithm,
            line_drawer: opts.line_drawer,
            line_count: opts.lines,
            seed: opts.seed,
            triangles: !opts.no_triangles,
            draw_grid: opts.grid,
        }
    }
}
