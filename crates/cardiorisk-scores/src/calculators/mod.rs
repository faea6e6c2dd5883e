pub mod frail;
pub mod harms2af;
pub mod hearts;
pub mod mtaiwan;
