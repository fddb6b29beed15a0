pub mod decode_face;
pub mod face;
pub mod inspect;
pub mod render;
