pub mod refresh_flow;
