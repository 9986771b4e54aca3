/// Shorthand for creating a rational number.
///
/// With a single argument, the value is converted exactly from its float representation, so
/// `RB!(0.5)` is one half. With two arguments, the numerator and denominator are given.
#[macro_export]
macro_rules! RB {
    ($value:expr) => {
        $crate::data::number_types::rational::ExactRational::from_float($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::ExactRational::new($numer, $denom)
    };
}
