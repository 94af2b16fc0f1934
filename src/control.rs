use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::{Point, Transform};
use crate::keyboard_layout::{Layout, LayoutConverter};
use crate::prefs::Prefs;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    RotateCounterclockwise,
    RotateClockwise,
    Shrink,
    Grow,
    ToggleFill,
}

/// Step sizes for every action that changes the hexagon
#[derive(Copy, Clone, Debug)]
pub struct Steps {
    pub move_step: f32,
    /// Radians
    pub rotation_step: f32,
    pub shrink_factor: f32,
    pub grow_factor: f32,
}

impl From<&Prefs> for Steps {
    fn from(prefs: &Prefs) -> Self {
        Self {
            move_step: prefs.move_step,
            rotation_step: prefs.rotation_step_degrees.to_radians(),
            shrink_factor: prefs.shrink_factor,
            grow_factor: prefs.grow_factor,
        }
    }
}

impl Action {
    /// `None` for actions that only change how the hexagon is shown
    pub fn transform(self, steps: Steps) -> Option<Transform> {
        use Action::*;
        // y points down
        let transform = match self {
            MoveUp => Transform::Translate(Point::new(0., -steps.move_step)),
            MoveDown => Transform::Translate(Point::new(0., steps.move_step)),
            MoveLeft => Transform::Translate(Point::new(-steps.move_step, 0.)),
            MoveRight => Transform::Translate(Point::new(steps.move_step, 0.)),
            RotateCounterclockwise => Transform::Rotate(-steps.rotation_step),
            RotateClockwise => Transform::Rotate(steps.rotation_step),
            Shrink => Transform::Scale(steps.shrink_factor),
            Grow => Transform::Scale(steps.grow_factor),
            ToggleFill => return None,
        };
        Some(transform)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub rotate_ccw: KeyCode,
    pub rotate_cw: KeyCode,
    pub shrink: KeyCode,
    pub grow: KeyCode,
    pub toggle_fill: KeyCode,
}

impl Default for Controls {
    #[rustfmt::skip]
    fn default() -> Self {
        Self {
            up: W, down: S, left: A, right: D,
            rotate_ccw: Q, rotate_cw: E,
            shrink: Z, grow: C,
            toggle_fill: F,
        }
    }
}

impl Controls {
    /// All keybinding specifications are in Qwerty, this
    /// translates them to the key at the same position
    /// in another layout
    pub fn for_layout(layout: Layout) -> Self {
        let c = LayoutConverter::new(Layout::Qwerty, layout);
        let qwerty = Self::default();
        Self {
            up: c.cvt(qwerty.up),
            down: c.cvt(qwerty.down),
            left: c.cvt(qwerty.left),
            right: c.cvt(qwerty.right),
            rotate_ccw: c.cvt(qwerty.rotate_ccw),
            rotate_cw: c.cvt(qwerty.rotate_cw),
            shrink: c.cvt(qwerty.shrink),
            grow: c.cvt(qwerty.grow),
            toggle_fill: c.cvt(qwerty.toggle_fill),
        }
    }

    fn bindings(&self) -> [(KeyCode, Action); 9] {
        use Action::*;
        [
            (self.up, MoveUp),
            (self.down, MoveDown),
            (self.left, MoveLeft),
            (self.right, MoveRight),
            (self.rotate_ccw, RotateCounterclockwise),
            (self.rotate_cw, RotateClockwise),
            (self.shrink, Shrink),
            (self.grow, Grow),
            (self.toggle_fill, ToggleFill),
        ]
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|&(k, _)| k == key)
            .map(|(_, action)| action)
    }

    pub fn help_text(&self) -> String {
        format!(
            "Controls:\n\
             1. Movement: {:?} {:?} {:?} {:?}\n\
             2. Rotation: {:?} {:?}\n\
             3. Scale: {:?} {:?}\n\
             4. Fill: {:?}\n",
            self.up, self.left, self.down, self.right,
            self.rotate_ccw, self.rotate_cw,
            self.shrink, self.grow,
            self.toggle_fill,
        )
    }
}
