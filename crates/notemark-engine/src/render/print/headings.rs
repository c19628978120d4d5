/// Decoration of a printed heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingStyle {
    pub size: f32,
    /// Rule under the heading, and its thickness.
    pub underline: Option<f32>,
    /// Bar down the left edge, and its thickness.
    pub border: Option<f32>,
    pub centered: bool,
}

impl HeadingStyle {
    /// Decoration for a heading `level`, scaled from an 11pt body size.
    pub fn for_level(level: u8, body_size: f32) -> Self {
        let (size, underline, border) = match level {
            1 => (22.0, Some(2.0), None),
            2 => (18.0, Some(1.0), Some(4.0)),
            3 => (15.0, Some(0.5), Some(3.0)),
            4 => (13.0, None, Some(2.0)),
            5 => (12.0, None, Some(1.0)),
            _ => (11.0, None, None),
        };
        let scale = body_size / 11.0;
        Self {
            size: size * scale,
            underline,
            border,
            centered: level == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_level_one_is_centered() {
        assert!(HeadingStyle::for_level(1, 11.0).centered);
        for level in 2..=6 {
            assert!(!HeadingStyle::for_level(level, 11.0).centered);
        }
    }

    #[test]
    fn sizes_shrink_with_depth() {
        let sizes: Vec<f32> = (1..=6).map(|l| HeadingStyle::for_level(l, 11.0).size).collect();
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn scales_with_body_size() {
        assert_eq!(HeadingStyle::for_level(6, 22.0).size, 22.0);
    }
}
