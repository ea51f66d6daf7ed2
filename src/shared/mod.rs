pub mod errors;
pub mod logging;

// Dioxus hooks (client + server rendering)
pub mod hooks;
