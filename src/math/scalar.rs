//! Scalar helpers with fail-soft domain handling
//!
//! Transcendentals defer to the hardware/libm versions, but keep the
//! engine's input policies: out-of-domain inputs map to a fixed value
//! instead of NaN or infinity.

/// π as f32
pub const PI: f32 = std::f32::consts::PI;

/// Default tolerance for approximate comparisons
pub const EPSILON: f32 = 1e-6;

/// Returned by [`ln`] and [`log10`] for non-positive input
pub const LOG_SENTINEL: f32 = -999_999.0;

/// Square root; negative and zero inputs return 0
#[inline]
pub fn sqrt(value: f32) -> f32 {
    if value <= 0.0 { 0.0 } else { value.sqrt() }
}

#[inline]
pub fn square(value: f32) -> f32 {
    value * value
}

#[inline]
pub fn cube(value: f32) -> f32 {
    value * value * value
}

/// Raise `base` by repeated multiplication.
///
/// The exponent is consumed in whole steps (a fractional remainder rounds
/// up, like a counting loop would). A negative exponent inverts the base;
/// inverting zero yields 0.
pub fn power(base: f32, exponent: f32) -> f32 {
    let (base, exponent) = if exponent < 0.0 {
        if base == 0.0 {
            return 0.0;
        }
        (1.0 / base, -exponent)
    } else {
        (base, exponent)
    };

    let steps = exponent.ceil() as u32;
    (0..steps).fold(1.0, |acc, _| acc * base)
}

#[inline]
pub fn abs(value: f32) -> f32 {
    if value < 0.0 { -value } else { value }
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// Round half away from zero
#[inline]
pub fn round(value: f32) -> f32 {
    value.round()
}

#[inline]
pub fn floor(value: f32) -> f32 {
    value.floor()
}

#[inline]
pub fn ceil(value: f32) -> f32 {
    value.ceil()
}

/// Floored modulo (result takes the divisor's sign); a zero divisor yields 0
pub fn modulo(x: f32, y: f32) -> f32 {
    if y == 0.0 {
        return 0.0;
    }
    x - y * (x / y).floor()
}

#[inline]
pub fn exp(value: f32) -> f32 {
    value.exp()
}

/// Natural logarithm; non-positive input yields [`LOG_SENTINEL`]
pub fn ln(value: f32) -> f32 {
    if value <= 0.0 { LOG_SENTINEL } else { value.ln() }
}

/// Base-10 logarithm; non-positive input yields [`LOG_SENTINEL`]
pub fn log10(value: f32) -> f32 {
    if value <= 0.0 { LOG_SENTINEL } else { value.log10() }
}

#[inline]
pub fn sin(value: f32) -> f32 {
    value.sin()
}

#[inline]
pub fn cos(value: f32) -> f32 {
    value.cos()
}

/// Tangent; returns 0 where cosine vanishes
pub fn tan(value: f32) -> f32 {
    let c = value.cos();
    if approx_eq(c, 0.0, EPSILON) {
        0.0
    } else {
        value.sin() / c
    }
}

/// Arcsine with the input clamped to [-1, 1]
#[inline]
pub fn asin(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).asin()
}

/// Arccosine with the input clamped to [-1, 1]
#[inline]
pub fn acos(value: f32) -> f32 {
    value.clamp(-1.0, 1.0).acos()
}

#[inline]
pub fn atan(value: f32) -> f32 {
    value.atan()
}

#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

#[inline]
pub fn sinh(value: f32) -> f32 {
    value.sinh()
}

#[inline]
pub fn cosh(value: f32) -> f32 {
    value.cosh()
}

#[inline]
pub fn tanh(value: f32) -> f32 {
    value.tanh()
}

#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// n! (saturates at `u64::MAX` instead of overflowing)
pub fn factorial(n: u32) -> u64 {
    (1..=u64::from(n)).fold(1u64, |acc, i| acc.saturating_mul(i))
}

/// True if `a` and `b` differ by less than `epsilon`
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    abs(a - b) < epsilon
}

pub fn circle_area(radius: f32) -> f32 {
    PI * radius * radius
}

pub fn circle_circumference(radius: f32) -> f32 {
    2.0 * PI * radius
}

pub fn rectangle_area(width: f32, height: f32) -> f32 {
    width * height
}

pub fn rectangle_perimeter(width: f32, height: f32) -> f32 {
    2.0 * (width + height)
}

pub fn triangle_area(base: f32, height: f32) -> f32 {
    0.5 * base * height
}

/// Euclidean distance between two points given as coordinates
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    sqrt(square(x2 - x1) + square(y2 - y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(sqrt(-4.0), 0.0);
        assert_eq!(sqrt(0.0), 0.0);
        assert!(approx_eq(sqrt(16.0), 4.0, EPSILON));
    }

    #[test]
    fn test_log_sentinel() {
        assert_eq!(ln(0.0), LOG_SENTINEL);
        assert_eq!(ln(-3.0), LOG_SENTINEL);
        assert_eq!(log10(-1.0), LOG_SENTINEL);
        assert!(approx_eq(ln(std::f32::consts::E), 1.0, 1e-5));
        assert!(approx_eq(log10(1000.0), 3.0, 1e-5));
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), 1024.0);
        assert_eq!(power(2.0, -2.0), 0.25);
        assert_eq!(power(5.0, 0.0), 1.0);
        assert_eq!(power(0.0, -1.0), 0.0);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(7.0, 0.0), 0.0);
        assert!(approx_eq(modulo(7.0, 3.0), 1.0, EPSILON));
        assert!(approx_eq(modulo(-1.0, 3.0), 2.0, EPSILON));
    }

    #[test]
    fn test_trig() {
        assert!(approx_eq(sin(PI / 2.0), 1.0, EPSILON));
        assert!(approx_eq(cos(PI), -1.0, EPSILON));
        assert_eq!(tan(PI / 2.0), 0.0);
        assert!(approx_eq(asin(2.0), PI / 2.0, EPSILON));
        assert!(approx_eq(acos(-5.0), PI, EPSILON));
        assert!(approx_eq(degrees(radians(90.0)), 90.0, 1e-4));
    }

    #[test]
    fn test_factorial_and_geometry() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(100), u64::MAX);
        assert!(approx_eq(distance(0.0, 0.0, 3.0, 4.0), 5.0, EPSILON));
        assert!(approx_eq(rectangle_perimeter(2.0, 3.0), 10.0, EPSILON));
        assert!(approx_eq(triangle_area(4.0, 3.0), 6.0, EPSILON));
    }
}
