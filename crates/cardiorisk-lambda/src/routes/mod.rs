pub mod calculators;
pub mod health;
pub mod legacy;
pub mod lifetime;
pub mod scores;
pub mod summary;
