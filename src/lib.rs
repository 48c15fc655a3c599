// Carbon emissions dashboard for machine-learning experiments
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
