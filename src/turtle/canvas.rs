use parking_lot::Mutex;

/// A point in screen space: origin at the top-left corner, `y` growing
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One replayable drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A straight segment in the current color.
    Line {
        from: Point,
        to:   Point,
    },
    /// Changes the color of every following line.
    Color {
        red:   u8,
        green: u8,
        blue:  u8,
    },
}

/// The cursor outline: a nose point followed by two wing points.
pub type CursorPose = [Point; 3];

#[derive(Debug, Default)]
struct Surface {
    commands: Vec<DrawCommand>,
    pose:     CursorPose,
}

/// A shared, append-only log of drawing primitives plus the current cursor
/// pose.
///
/// The interpreter thread appends through a [`Turtle`](super::cursor::Turtle)
/// while a renderer reads snapshots or replays the log. Every access holds a
/// single lock, so a replay never observes a half-appended command. The pose
/// is overwritten in place and never logged.
///
/// # Example
/// ```
/// use turtle_logo::turtle::canvas::{Canvas, DrawCommand, Point};
///
/// let canvas = Canvas::new(600, 600);
/// canvas.add_command(DrawCommand::Line { from: Point::new(0.0, 0.0),
///                                        to:   Point::new(10.0, 0.0), });
///
/// let mut lines = 0;
/// canvas.replay(|command| {
///           if matches!(command, DrawCommand::Line { .. }) {
///               lines += 1;
///           }
///       });
/// assert_eq!(lines, 1);
///
/// canvas.clear();
/// assert!(canvas.commands().is_empty());
/// ```
#[derive(Debug)]
pub struct Canvas {
    width:   u32,
    height:  u32,
    surface: Mutex<Surface>,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width,
               height,
               surface: Mutex::new(Surface::default()) }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Appends `command` to the log.
    pub fn add_command(&self, command: DrawCommand) {
        self.surface.lock().commands.push(command);
    }

    /// Empties the log. The pose is kept.
    pub fn clear(&self) {
        self.surface.lock().commands.clear();
    }

    /// A copy of the log, oldest first.
    #[must_use]
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.surface.lock().commands.clone()
    }

    /// Calls `paint` with every logged command in order while holding the
    /// lock.
    pub fn replay(&self, mut paint: impl FnMut(&DrawCommand)) {
        let surface = self.surface.lock();
        for command in &surface.commands {
            paint(command);
        }
    }

    pub fn set_pose(&self, pose: CursorPose) {
        self.surface.lock().pose = pose;
    }

    #[must_use]
    pub fn pose(&self) -> CursorPose {
        self.surface.lock().pose
    }
}
