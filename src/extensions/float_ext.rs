/// A trait to round floating point values to a fixed number of decimal places.
pub trait RoundToDecimals {
    /// Returns `self` rounded to `decimals` decimal places. Rounds the exact binary value, so `21.45` (stored as
    /// `21.4499...`) becomes `21.4`, and exact ties go to the even digit.
    fn round_to_decimals(self, decimals: u32) -> Self;
}

macro_rules! impl_round_to_decimals {
    ($($t:ty)*) => ($(
        impl RoundToDecimals for $t {
            fn round_to_decimals(self, decimals: u32) -> $t {
                format!("{:.*}", decimals as usize, self).parse().unwrap_or(self)
            }
        }
    )*)
}

impl_round_to_decimals! { f32 f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(21.449999, 1, 21.4)]
    #[case(21.45, 0, 21.0)]
    #[case(21.45, 1, 21.4)]
    #[case(22.65, 1, 22.6)]
    #[case(0.25, 1, 0.2)]
    #[case(1.05, 1, 1.1)]
    #[case(21.96, 1, 22.0)]
    #[case(-3.26, 1, -3.3)]
    #[case(0.0, 1, 0.0)]
    fn round_to_decimals_f64(#[case] input: f64, #[case] decimals: u32, #[case] expected: f64) {
        assert_eq!(input.round_to_decimals(decimals), expected);
    }

    #[rstest]
    #[case(21.449999, 1, 21.4)]
    #[case(18.75, 1, 18.8)]
    fn round_to_decimals_f32(#[case] input: f32, #[case] decimals: u32, #[case] expected: f32) {
        assert_eq!(input.round_to_decimals(decimals), expected);
    }
}
