use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod format;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert!(first.starts_with("toast-"));
        assert_ne!(first, second);
    }
}
