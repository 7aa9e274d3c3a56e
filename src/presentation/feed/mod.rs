pub mod clock;
pub mod formatting;
pub mod list_item;
pub mod observable;
pub mod view_model;
