pub(crate) mod animator;
pub(crate) mod parallax;
