#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packs into `0x00RRGGBB`, the layout stored in a [`FrameBuffer`](crate::FrameBuffer).
    #[inline]
    pub const fn to_packed(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    #[inline]
    pub const fn from_packed(value: u32) -> Color {
        Color {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn packed_layout_is_rgb() {
        assert_eq!(Color::RED.to_packed(), 0x00FF_0000);
        assert_eq!(Color::GREEN.to_packed(), 0x0000_FF00);
        assert_eq!(Color::BLUE.to_packed(), 0x0000_00FF);
        assert_eq!(Color::WHITE.to_packed(), 0x00FF_FFFF);
        assert_eq!(Color::BLACK.to_packed(), 0);
    }

    #[test]
    fn from_packed_ignores_high_byte() {
        let color = Color::from_packed(0xAB12_3456);
        assert_eq!(color.rgb(), (0x12, 0x34, 0x56));
    }
}
