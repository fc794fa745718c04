//! UI Components
//!
//! Leptos components for the to-do and followers views.

mod add_input;
mod followers_list;
mod nav_link;
mod pages;
mod todo;
mod todo_footer;
mod todo_list;

pub use add_input::AddInput;
pub use followers_list::FollowersList;
pub use nav_link::NavLink;
pub use pages::{FollowersPage, TodoPage};
pub use todo::Todo;
pub use todo_footer::TodoFooter;
pub use todo_list::TodoList;
