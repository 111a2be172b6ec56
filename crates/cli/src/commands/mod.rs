pub mod chat;
pub mod doctor;
pub mod extract;
pub mod onboard;
