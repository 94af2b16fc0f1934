use ggez::input::keyboard::KeyCode::{self, *};
use serde::Deserialize;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Qwerty,
    Dvorak,
}

/// The three letter rows, top to bottom, left to right
struct LayoutSpec {
    top: [KeyCode; 12],
    home: [KeyCode; 11],
    bottom: [KeyCode; 10],
}

#[rustfmt::skip]
const QWERTY_LAYOUT: LayoutSpec = LayoutSpec {
    top: [Q, W, E, R, T, Y, U, I, O, P, LBracket, RBracket],
    home: [A, S, D, F, G, H, J, K, L, Semicolon, Apostrophe],
    bottom: [Z, X, C, V, B, N, M, Comma, Period, Slash],
};

#[rustfmt::skip]
const DVORAK_LAYOUT: LayoutSpec = LayoutSpec {
    top: [Apostrophe, Comma, Period, P, Y, F, G, C, R, L, Slash, Equals],
    home: [A, O, E, U, I, D, H, T, N, S, Minus],
    bottom: [Semicolon, Q, J, K, X, B, M, W, V, Z],
};

impl LayoutSpec {
    fn rows(&self) -> [&[KeyCode]; 3] {
        [&self.top, &self.home, &self.bottom]
    }

    /// (row, column)
    fn position(&self, keycode: KeyCode) -> Option<(usize, usize)> {
        self.rows().iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&k| k == keycode)
                .map(|column| (row, column))
        })
    }

    fn at(&self, (row, column): (usize, usize)) -> KeyCode {
        self.rows()[row][column]
    }
}

const fn get_layout(layout: Layout) -> &'static LayoutSpec {
    match layout {
        Layout::Qwerty => &QWERTY_LAYOUT,
        Layout::Dvorak => &DVORAK_LAYOUT,
    }
}

/// Finds the key at the same physical position in another layout
pub struct LayoutConverter {
    from: &'static LayoutSpec,
    to: &'static LayoutSpec,
}

impl LayoutConverter {
    pub fn new(from: Layout, to: Layout) -> Self {
        Self {
            from: get_layout(from),
            to: get_layout(to),
        }
    }

    /// Keys outside the letter rows are the same in every layout
    pub fn cvt(&self, keycode: KeyCode) -> KeyCode {
        match self.from.position(keycode) {
            Some(position) => self.to.at(position),
            None => keycode,
        }
    }
}

#[test]
fn test_qwerty_to_dvorak() {
    let c = LayoutConverter::new(Layout::Qwerty, Layout::Dvorak);
    assert_eq!(c.cvt(W), Comma);
    assert_eq!(c.cvt(A), A);
    assert_eq!(c.cvt(S), O);
    assert_eq!(c.cvt(Z), Semicolon);
    assert_eq!(c.cvt(Space), Space);
}

#[test]
fn test_round_trip_through_dvorak() {
    let there = LayoutConverter::new(Layout::Qwerty, Layout::Dvorak);
    let back = LayoutConverter::new(Layout::Dvorak, Layout::Qwerty);
    QWERTY_LAYOUT
        .rows()
        .iter()
        .flat_map(|row| row.iter())
        .for_each(|&k| assert_eq!(back.cvt(there.cvt(k)), k));
}
