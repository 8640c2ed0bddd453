pub mod grid_int;
