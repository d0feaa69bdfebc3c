use std::sync::Arc;

use crate::turtle::{
    actuator::Actuator,
    canvas::{Canvas, CursorPose, DrawCommand, Point},
};

const NOSE_LENGTH: f64 = 12.0;
const WING_LENGTH: f64 = 6.0;
const WING_ANGLE: f64 = 135.0;

/// The reference [`Actuator`]: a cursor that records its trail on a shared
/// [`Canvas`].
///
/// Position is kept in screen space. The heading is measured in degrees
/// clockwise from east, which is the visual direction on a screen whose `y`
/// axis points down, and is always within `[0, 360)`.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use turtle_logo::turtle::{Actuator, Canvas, DrawCommand, Turtle};
///
/// let canvas = Arc::new(Canvas::new(200, 200));
/// let mut turtle = Turtle::new(Arc::clone(&canvas));
///
/// turtle.set_heading(90.0);
/// turtle.forward(50.0);
/// assert!((turtle.current_y() - 50.0).abs() < 1e-9);
///
/// turtle.pen_up();
/// turtle.home();
/// turtle.forward(10.0);
/// assert_eq!(canvas.commands().len(), 1);
/// ```
#[derive(Debug)]
pub struct Turtle {
    canvas:   Arc<Canvas>,
    position: Point,
    heading:  f64,
    pen_down: bool,
}

impl Turtle {
    /// Creates a turtle at the center of `canvas`, facing east with the pen
    /// down.
    #[must_use]
    pub fn new(canvas: Arc<Canvas>) -> Self {
        let mut turtle = Self { canvas,
                                position: Point::default(),
                                heading: 0.0,
                                pen_down: true };
        turtle.home();
        turtle
    }

    #[must_use]
    pub fn canvas(&self) -> &Arc<Canvas> {
        &self.canvas
    }

    /// The position in screen space.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// The heading in degrees clockwise from east.
    #[must_use]
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub const fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    fn center(&self) -> Point {
        Point::new(f64::from(self.canvas.width()) / 2.0, f64::from(self.canvas.height()) / 2.0)
    }

    fn set_heading_raw(&mut self, degrees: f64) {
        self.heading = normalize(degrees);
        self.refresh_pose();
    }

    /// Publishes the cursor outline for the current position and heading.
    fn refresh_pose(&self) {
        let nose = offset(self.position, NOSE_LENGTH, self.heading);
        let left = offset(self.position, WING_LENGTH, self.heading - WING_ANGLE);
        let right = offset(self.position, WING_LENGTH, self.heading + WING_ANGLE);
        let pose: CursorPose = [nose, left, right];
        self.canvas.set_pose(pose);
    }
}

impl Actuator for Turtle {
    fn forward(&mut self, distance: f64) {
        let target = offset(self.position, distance, self.heading);
        if self.pen_down {
            self.canvas.add_command(DrawCommand::Line { from: self.position,
                                                        to:   target, });
        }
        self.position = target;
        self.refresh_pose();
    }

    fn turn_right(&mut self, degrees: f64) {
        self.set_heading_raw(self.heading + degrees);
    }

    fn turn_left(&mut self, degrees: f64) {
        self.set_heading_raw(self.heading - degrees);
    }

    fn set_heading(&mut self, degrees: f64) {
        self.set_heading_raw(-degrees);
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
    }

    fn home(&mut self) {
        self.position = self.center();
        self.set_heading_raw(0.0);
    }

    fn jump_to(&mut self, x: f64, y: f64) {
        let center = self.center();
        self.position = Point::new(center.x + x, center.y - y);
        self.refresh_pose();
    }

    fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        self.canvas.add_command(DrawCommand::Color { red, green, blue });
    }

    fn current_x(&self) -> f64 {
        self.position.x - self.center().x
    }

    fn current_y(&self) -> f64 {
        self.center().y - self.position.y
    }
}

fn normalize(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

fn offset(from: Point, distance: f64, degrees: f64) -> Point {
    let radians = degrees.to_radians();
    Point::new(from.x + distance * radians.cos(), from.y + distance * radians.sin())
}
