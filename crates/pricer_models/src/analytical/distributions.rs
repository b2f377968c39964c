//! Standard normal cumulative distribution function Φ.
//!
//! `norm_cdf` uses Hart's rational approximation (algorithm 5666) in the
//! form given by West (2005), "Better approximations to cumulative normal
//! functions", which is accurate to double precision over the whole real
//! line. The tail beyond |x| ≈ 7.07 switches to a continued fraction.
//!
//! `norm_cdf` is generic over `T: Float` so that `f32` callers share the
//! same code path.

use num_traits::Float;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631;

/// Boundary between the rational and continued-fraction branches (10/√2).
const RATIONAL_BRANCH_LIMIT: f64 = 7.071_067_811_865_47;

/// |x| beyond which Φ(-|x|) underflows to zero in double precision.
const UNDERFLOW_LIMIT: f64 = 37.0;

const NUMERATOR: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

const DENOMINATOR: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + constant(c))
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x), in range [0, 1]. Φ(0) is exactly 0.5.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0_f64), 0.5);
/// assert!((norm_cdf(1.959_963_984_540_054_f64) - 0.975).abs() < 1e-12);
/// assert!(norm_cdf(-40.0_f64) == 0.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let zero = T::zero();
    let abs_x = x.abs();

    // Lower tail Φ(-|x|)
    let tail = if abs_x > constant(UNDERFLOW_LIMIT) {
        zero
    } else {
        let gaussian = (-abs_x * abs_x / constant(2.0)).exp();
        if abs_x < constant(RATIONAL_BRANCH_LIMIT) {
            gaussian * horner(&NUMERATOR, abs_x) / horner(&DENOMINATOR, abs_x)
        } else {
            let mut b = abs_x + constant(0.65);
            for k in [4.0, 3.0, 2.0, 1.0] {
                b = abs_x + constant::<T>(k) / b;
            }
            gaussian / b / constant(SQRT_2PI)
        }
    };

    if x > zero {
        T::one() - tail
    } else {
        tail
    }
}
