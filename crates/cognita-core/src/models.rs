pub mod index;
pub mod record;
pub mod scale;
pub mod subtest;
