pub mod wisc_iv;
