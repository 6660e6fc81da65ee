pub mod vector2d;
