//! Plain RGB triplet. The theme stays library-agnostic; the layouts module
//! converts to ratatui colors at the edge.

/// One palette color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn r(self) -> u8 {
        self.0
    }

    pub fn g(self) -> u8 {
        self.1
    }

    pub fn b(self) -> u8 {
        self.2
    }
}

/// The color tables in `wayfarer_constant::theme` are plain tuples.
impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_come_back_in_order() {
        let rgb = Rgb::from((26, 95, 122));
        assert_eq!((rgb.r(), rgb.g(), rgb.b()), (26, 95, 122));
    }
}
