pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_menu_csv;
pub use prompts::{
    prompt_menu_action, prompt_pool_meal, prompt_rating, prompt_slot, prompt_yes_no,
    resolve_meal_name, MenuAction,
};
pub use render::{display_meal_list, display_menu, display_stats};
