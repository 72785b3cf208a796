pub mod controls;
pub mod page;
pub mod widgets;

pub use page::DashboardPage;
