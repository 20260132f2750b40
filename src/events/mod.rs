pub mod dispatcher;
pub mod manager;
