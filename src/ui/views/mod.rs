pub mod forms;
pub mod question_card;
pub mod questions;
pub mod sidebar;
