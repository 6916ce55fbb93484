mod network;

pub use network::{DataService, API_URL};
