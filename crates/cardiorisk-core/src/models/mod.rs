pub mod answers;
pub mod legacy;
pub mod lifetime;
pub mod result;
pub mod summary;
