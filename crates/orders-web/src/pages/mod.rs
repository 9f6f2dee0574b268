mod orders;

pub use orders::OrdersPage;
