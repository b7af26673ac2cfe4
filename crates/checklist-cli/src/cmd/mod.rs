pub mod bootstrap;
pub mod ensure;
pub mod introduce;
pub mod serve;
