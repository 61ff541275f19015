pub mod cancellation;
pub mod suspension;
