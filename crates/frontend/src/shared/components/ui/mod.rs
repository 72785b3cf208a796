pub mod button;
pub mod radio;
pub mod select;

pub use button::Button;
pub use radio::{Radio, RadioGroup};
pub use select::Select;
