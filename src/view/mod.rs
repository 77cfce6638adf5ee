pub mod notice;
pub mod render;
pub mod state;

pub use notice::{SUCCESS_TTL, SuccessNotice};
pub use render::{Rendered, Row, Summary, render};
pub use state::{ViewError, ViewState};
