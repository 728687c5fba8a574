// Common test utilities

#[cfg(test)]
#[allow(dead_code)]
pub mod harness;
#[cfg(all(test, feature = "runtime"))]
#[allow(dead_code)]
pub mod tracing;
