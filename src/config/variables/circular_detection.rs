use crate::config::error::ValueError;

/// Tracks the chain of variables being expanded for circular detection
#[derive(Debug)]
pub struct CircularDetector {
    /// Names currently being expanded, outermost first
    resolution_chain: Vec<String>,
}

impl CircularDetector {
    pub fn new() -> Self {
        Self {
            resolution_chain: Vec::new(),
        }
    }

    /// Checks if a variable can be expanded without creating a cycle
    ///
    /// # Errors
    /// Returns `ValueError::CyclicVariable` if the name is already being expanded
    pub fn detect_circular_reference(&self, name: &str) -> Result<(), ValueError> {
        if self.resolution_chain.iter().any(|active| active == name) {
            let mut chain = self.resolution_chain.clone();
            chain.push(name.to_string());

            return Err(ValueError::CyclicVariable { chain });
        }
        Ok(())
    }

    /// Number of variables currently being expanded
    pub fn depth(&self) -> usize {
        self.resolution_chain.len()
    }

    /// Adds a variable to the chain for tracking
    pub fn push_to_chain(&mut self, name: &str) {
        self.resolution_chain.push(name.to_string());
    }

    /// Removes a variable from the chain when done expanding
    pub fn pop_from_chain(&mut self) {
        self.resolution_chain.pop();
    }
}
