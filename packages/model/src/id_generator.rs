use crc32fast::Hasher;

/// Generate a stable seed from a namespace (document kind, editor name, ...)
pub fn get_namespace_id(namespace: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(namespace.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for graph nodes that arrive without an id
///
/// Projection creates a fresh generator per call, so the same document always
/// receives the same synthetic ids.
#[derive(Clone, Debug)]
pub struct IDGenerator {
    seed: String,
    count: u32,
}

impl IDGenerator {
    pub fn new(namespace: &str) -> Self {
        Self {
            seed: get_namespace_id(namespace),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    /// Generate the next ID that does not satisfy `taken`
    pub fn new_id_avoiding(&mut self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = self.new_id();
            if !taken(&id) {
                return id;
            }
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_id_is_stable() {
        assert_eq!(get_namespace_id("tree"), get_namespace_id("tree"));
        assert_ne!(get_namespace_id("tree"), get_namespace_id("fsm"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IDGenerator::new("tree");

        let id1 = gen.new_id();
        let id2 = gen.new_id();

        assert!(id1.ends_with("-1"));
        assert!(id2.ends_with("-2"));
        assert!(id1.starts_with(gen.seed()));
    }

    #[test]
    fn test_new_id_avoiding_skips_taken() {
        let mut gen = IDGenerator::from_seed("n".to_string());
        let id = gen.new_id_avoiding(|candidate| candidate == "n-1" || candidate == "n-2");
        assert_eq!(id, "n-3");
    }
}
