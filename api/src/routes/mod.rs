pub mod health;
pub mod sos;
