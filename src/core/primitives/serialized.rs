//! Serialized access to the non-reentrant digest primitive.

use super::traits::Digest;
use crate::error::PrimitiveError;
use std::sync::{Arc, Mutex};

/// A cloneable digest capability that serializes every call.
///
/// All clones share one lock, so no two digest invocations overlap
/// process-wide no matter how many stage workers hold a clone. This is
/// the only digest handle the stages are given; the raw [`Digest`]
/// never reaches them.
#[derive(Clone)]
pub struct SerializedDigest {
    digest: Arc<dyn Digest>,
    lock: Arc<Mutex<()>>,
}

impl SerializedDigest {
    /// Wrap a digest primitive in a fresh serialization lock.
    pub fn new(digest: Arc<dyn Digest>) -> Self {
        Self {
            digest,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Compute a digest while holding the shared lock.
    pub fn digest(&self, value: &str) -> Result<String, PrimitiveError> {
        let _serialized = self.lock.lock().map_err(|_| PrimitiveError::LockPoisoned)?;
        self.digest.digest(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::primitives::doubles::IdentityDigest;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Digest double that records whether two calls ever overlapped.
    struct OverlapDetector {
        active: AtomicUsize,
        overlapped: AtomicBool,
    }

    impl OverlapDetector {
        fn new() -> Self {
            Self {
                active: AtomicUsize::new(0),
                overlapped: AtomicBool::new(false),
            }
        }
    }

    impl Digest for OverlapDetector {
        fn digest(&self, value: &str) -> Result<String, PrimitiveError> {
            if self.active.fetch_add(1, Ordering::SeqCst) > 0 {
                self.overlapped.store(true, Ordering::SeqCst);
            }
            thread::sleep(Duration::from_millis(5));
            self.active.fetch_sub(1, Ordering::SeqCst);
            Ok(value.to_string())
        }
    }

    #[test]
    fn passes_value_through_to_inner_digest() {
        let digest = SerializedDigest::new(Arc::new(IdentityDigest));
        assert_eq!(digest.digest("ab").unwrap(), "ab");
    }

    #[test]
    fn clones_share_one_lock() {
        let detector = Arc::new(OverlapDetector::new());
        let digest = SerializedDigest::new(detector.clone());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let digest = digest.clone();
                thread::spawn(move || digest.digest(&i.to_string()).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(!detector.overlapped.load(Ordering::SeqCst));
    }
}
