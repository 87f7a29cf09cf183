//! Strong hash implementations backing [`Fingerprint`](crate::Fingerprint).

mod md5;

pub use md5::Md5;
