/// The capabilities the interpreter drives.
///
/// Every visible effect of a program goes through this trait. Distances are
/// in canvas units and angles in degrees. Coordinates passed to
/// [`jump_to`](Self::jump_to) and reported by
/// [`current_x`](Self::current_x)/[`current_y`](Self::current_y) are centered
/// on the home position with `y` growing upward.
///
/// Implementations do not pace themselves; the interpreter waits on its
/// [`RunControl`](crate::interpreter::control::RunControl) after each call.
pub trait Actuator {
    /// Moves along the current heading, drawing when the pen is down.
    fn forward(&mut self, distance: f64);

    /// Turns clockwise by `degrees`.
    fn turn_right(&mut self, degrees: f64);

    /// Turns counterclockwise by `degrees`.
    fn turn_left(&mut self, degrees: f64);

    /// Faces `degrees` counterclockwise from east.
    fn set_heading(&mut self, degrees: f64);

    fn pen_up(&mut self);

    fn pen_down(&mut self);

    /// Returns to the center facing east, without drawing.
    fn home(&mut self);

    /// Moves to `(x, y)` without drawing.
    fn jump_to(&mut self, x: f64, y: f64);

    /// Changes the color of later lines.
    fn set_color(&mut self, red: u8, green: u8, blue: u8);

    fn current_x(&self) -> f64;

    fn current_y(&self) -> f64;
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn forward(&mut self, distance: f64) {
        (**self).forward(distance);
    }

    fn turn_right(&mut self, degrees: f64) {
        (**self).turn_right(degrees);
    }

    fn turn_left(&mut self, degrees: f64) {
        (**self).turn_left(degrees);
    }

    fn set_heading(&mut self, degrees: f64) {
        (**self).set_heading(degrees);
    }

    fn pen_up(&mut self) {
        (**self).pen_up();
    }

    fn pen_down(&mut self) {
        (**self).pen_down();
    }

    fn home(&mut self) {
        (**self).home();
    }

    fn jump_to(&mut self, x: f64, y: f64) {
        (**self).jump_to(x, y);
    }

    fn set_color(&mut self, red: u8, green: u8, blue: u8) {
        (**self).set_color(red, green, blue);
    }

    fn current_x(&self) -> f64 {
        (**self).current_x()
    }

    fn current_y(&self) -> f64 {
        (**self).current_y()
    }
}
