pub mod drive;
pub mod toggles;
