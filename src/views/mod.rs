pub mod main_layout;
pub mod recipe_detail;
pub mod recipe_edit;
pub mod recipe_list;
