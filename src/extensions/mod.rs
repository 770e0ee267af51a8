mod float_ext;

pub use float_ext::RoundToDecimals;
