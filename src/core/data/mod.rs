pub mod colour;
pub mod element;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod sequence;
pub mod slot_table;
