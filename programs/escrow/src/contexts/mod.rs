pub mod make;
pub use make::*;

pub mod refund;
pub use refund::*;

pub mod take;
pub use take::*;
