pub mod fprintd;
pub mod unsupported;

pub use fprintd::FprintdBiometricAdapter;
pub use unsupported::UnsupportedBiometricAdapter;
