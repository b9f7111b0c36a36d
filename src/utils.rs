//! Small helpers that don't belong anywhere else

pub mod echar;
