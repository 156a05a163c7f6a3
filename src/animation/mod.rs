pub(crate) mod random;
pub(crate) mod spec;
pub(crate) mod wave;
