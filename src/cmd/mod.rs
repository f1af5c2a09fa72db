pub mod optimize;
pub mod score;
