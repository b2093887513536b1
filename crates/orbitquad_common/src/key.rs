#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
    F,
    Z,
    X,
    C,
    V,
    P,
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Escape,
    None,
}

impl Key {
    pub const COUNT: usize = Key::None as usize + 1;

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MouseButton {
    Left,
    Right,
}

impl MouseButton {
    pub const COUNT: usize = 2;

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}
