pub mod calculator;
pub mod methodology;

pub use calculator::CalculatorPage;
pub use methodology::MethodologyPage;
