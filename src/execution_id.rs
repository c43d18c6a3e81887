use std::fmt;
use uuid::Uuid;

/// Correlates the log events of a single execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionId(pub String);

impl ExecutionId {
    pub fn new() -> Self {
        Self(format!("exec_{}", Uuid::new_v4()))
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let a = ExecutionId::new();
        let b = ExecutionId::new();

        assert!(a.to_string().starts_with("exec_"));
        assert_ne!(a, b);
    }
}
