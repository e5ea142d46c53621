//! Property tests of the public tree API with arbitrary string keys.

mod functional;
