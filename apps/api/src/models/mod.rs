pub mod company;
pub mod content;
pub mod cv;
