//! Customer-service-retail agent configuration
//!
//! Four personas (listener, returns, sales, simulated human) with declared tool
//! schemas, wired as mutual transfer targets. The composed list is consumed by
//! an external realtime host that calls the model and dispatches tools.
//!
//! ```no_run
//! let agents = retail_agents::persona::customer_service_retail()?;
//! println!("{}", serde_json::to_string_pretty(&agents)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod agent;
pub mod config;
pub mod persona;
