pub mod builder;
pub mod credentials;
pub mod edit;
pub mod export;
pub mod gate;
pub mod submit;
