pub mod configuration;
pub mod domain;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod waitlist_form;
pub mod waitlist_store;
