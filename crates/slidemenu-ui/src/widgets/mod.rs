pub mod slide_menu;
