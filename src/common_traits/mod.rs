mod clone;
mod debug;
mod eq;
mod from_iter;
#[cfg(feature = "serde")]
mod serde;
