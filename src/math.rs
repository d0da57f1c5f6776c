use crate::error::{GameError, GameResult};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Like `new`, but refuses NaN and infinities.
    pub fn checked(x: f32, y: f32) -> GameResult<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Vector2 { x, y })
        } else {
            Err(GameError::NonFinitePosition { x, y })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> GameResult<Self> {
        if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
            Ok(Size { width, height })
        } else {
            Err(GameError::InvalidDimensions { width, height })
        }
    }
}

/// Axis-aligned play field. y grows downward, so `top < bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Boundaries {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Boundaries { top, bottom, left, right }
    }

    /// Field inset by `padding` on every side of a `width` x `height` canvas.
    pub fn from_canvas(width: f32, height: f32, padding: f32) -> GameResult<Self> {
        let usable = width.is_finite()
            && height.is_finite()
            && padding.is_finite()
            && padding >= 0.0
            && width > padding * 2.0
            && height > padding * 2.0;
        if !usable {
            return Err(GameError::InvalidBoundaries { width, height, padding });
        }
        Ok(Boundaries {
            top: padding,
            bottom: height - padding,
            left: padding,
            right: width - padding,
        })
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// One-dimensional distance.
pub fn distance(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_inside_values() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(12.5, 0.0, 10.0), 10.0);
    }

    #[test]
    fn distance_is_absolute() {
        assert_eq!(distance(3.0, 7.5), 4.5);
        assert_eq!(distance(7.5, 3.0), 4.5);
    }

    #[test]
    fn size_rejects_negative_and_nan() {
        assert!(Size::new(10.0, 4.0).is_ok());
        assert!(Size::new(0.0, 0.0).is_ok());
        assert_eq!(
            Size::new(-1.0, 4.0),
            Err(GameError::InvalidDimensions { width: -1.0, height: 4.0 })
        );
        assert!(Size::new(f32::NAN, 4.0).is_err());
    }

    #[test]
    fn vector_rejects_infinite() {
        assert!(Vector2::checked(1.0, 2.0).is_ok());
        assert!(Vector2::checked(f32::INFINITY, 2.0).is_err());
    }

    #[test]
    fn boundaries_from_canvas() {
        let b = Boundaries::from_canvas(800.0, 600.0, 16.0).unwrap();
        assert_eq!(b, Boundaries::new(16.0, 584.0, 16.0, 784.0));
        assert_eq!(b.center_x(), 400.0);
        assert!(Boundaries::from_canvas(20.0, 600.0, 16.0).is_err());
        assert!(Boundaries::from_canvas(f32::NAN, 600.0, 16.0).is_err());
    }
}
