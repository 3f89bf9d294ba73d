/// A point in the plain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Point<T>> for [T; 2] {
    fn from(point: Point<T>) -> Self {
        [point.x, point.y]
    }
}

/// A constructor macro for the [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::Point { x: $x, y: $y }
    };
}

#[cfg(test)]
mod tests {
    use crate::Point;

    #[test]
    fn point_from_array() {
        let point: Point<f64> = [1., 2.].into();
        assert_eq!(point, point!(1., 2.));

        let array: [f64; 2] = point.into();
        assert_eq!(array, [1., 2.]);
    }
}
