//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod delete_recipe_modal;
mod edit_recipe_modal;
mod image_controls;
mod ingredient_checklist;
mod instructions_modal;
mod modal_host;
mod nav_bar;
mod new_recipe_form;
mod recipe_card;
mod recipe_list;
mod search_bar;
mod shopping_item_row;
mod shopping_list_panel;
mod theme_toggle;
mod toast_host;
mod visibility_toggle;

pub use confirm_button::ConfirmButton;
pub use delete_recipe_modal::DeleteRecipeModal;
pub use edit_recipe_modal::EditRecipeModal;
pub use image_controls::ImageControls;
pub use ingredient_checklist::IngredientChecklist;
pub use instructions_modal::InstructionsModal;
pub use modal_host::ModalHost;
pub use nav_bar::NavBar;
pub use new_recipe_form::NewRecipeForm;
pub use recipe_card::RecipeCard;
pub use recipe_list::RecipeList;
pub use search_bar::SearchBar;
pub use shopping_item_row::ShoppingItemRow;
pub use shopping_list_panel::ShoppingListPanel;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
pub use visibility_toggle::VisibilityToggle;
