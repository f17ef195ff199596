pub mod entity;
pub mod value_objects;

pub use entity::BlogPost;
pub use value_objects::PostId;
