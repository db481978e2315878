pub mod day_selector;
pub mod nutrition_progress_bar;
