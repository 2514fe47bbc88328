pub mod entities;
pub mod enums;
pub mod events;
pub mod queries;
pub mod scoping;
pub mod value_objects;
