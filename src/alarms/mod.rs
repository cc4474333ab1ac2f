// Alarm definitions, one module per alarm kind
pub mod base;
pub mod cpu;
pub mod memory;
pub mod edge;

// Re-export commonly used items
pub use base::{load_balancer_dimensions, notification_actions, service_dimensions, PERIOD_SECONDS};
pub use cpu::cpu_utilization_alarm;
pub use memory::memory_utilization_alarm;
pub use edge::target_server_errors_alarm;
