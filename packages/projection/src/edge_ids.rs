//! Edge id allocation shared by both layouts.

use std::collections::HashSet;

/// Edge ids unique within one projection. `edge_id` joins node ids with
/// `-`, so distinct relations can share a base id (`a`→`b-c`, `a-b`→`c`);
/// later claims of a taken id get `-2`, `-3`, ... appended.
#[derive(Debug, Default)]
pub(crate) struct EdgeIds {
    used: HashSet<String>,
}

impl EdgeIds {
    pub(crate) fn claim(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{}-{}", base, suffix);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taken_ids_get_suffixes() {
        let mut ids = EdgeIds::default();
        assert_eq!(ids.claim("e-a-b-c".into()), "e-a-b-c");
        assert_eq!(ids.claim("e-a-b-c".into()), "e-a-b-c-2");
        assert_eq!(ids.claim("e-a-b-c-2".into()), "e-a-b-c-2-2");
        assert_eq!(ids.claim("e-a-b-c".into()), "e-a-b-c-3");
    }
}
