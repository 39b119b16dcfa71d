pub mod app_context;
pub mod use_app_state;
pub mod use_route;

pub use app_context::{use_app_context, AppContextProvider};
pub use use_app_state::{use_app_state, UseAppContextHandle};
pub use use_route::use_route;
