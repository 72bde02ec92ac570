//!
//! Keyword Interning
//!
//! Keywords are the symbolic constants of compiled quill programs (tags,
//! labels, enum-like markers). Every keyword is interned in one process-wide
//! registry so two keywords are equal exactly when their names are equal, and
//! comparing them costs a single integer compare.
//!
//! The registry is a `lasso::ThreadedRodeo`: lookup-or-create is atomic, so two
//! threads racing on the first use of a name still observe the same keyword.
//! Names are never removed; the registry only grows.
//!

use std::fmt;
use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

static KEYWORDS: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// An interned keyword
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyword(Spur);

impl Keyword {
    /// Get the canonical keyword for `name`, registering it on first use
    pub fn for_name(name: &str) -> Self {
        if let Some(key) = KEYWORDS.get(name) {
            return Keyword(key);
        }
        let key = KEYWORDS.get_or_intern(name);
        tracing::trace!(keyword = name, "interned keyword");
        Keyword(key)
    }

    /// Look up an existing keyword without registering a new one
    pub fn get(name: &str) -> Option<Self> {
        KEYWORDS.get(name).map(Keyword)
    }

    /// The keyword's name. The returned slice is owned by the registry and
    /// is the same allocation for every lookup of the same name.
    pub fn as_str(self) -> &'static str {
        KEYWORDS.resolve(&self.0)
    }
}

/// Number of keywords registered so far
pub fn keyword_count() -> usize {
    KEYWORDS.len()
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Keyword").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_name_same_keyword() {
        let a = Keyword::for_name("kw-test-ok");
        let b = Keyword::for_name("kw-test-ok");
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn test_different_names_different_keywords() {
        let a = Keyword::for_name("kw-test-left");
        let b = Keyword::for_name("kw-test-right");
        assert_ne!(a, b);
    }

    #[test]
    fn test_keyword_to_string() {
        assert_eq!(Keyword::for_name("foo").to_string(), "foo");
        assert_eq!(Keyword::for_name("").as_str(), "");
        assert_eq!(Keyword::for_name("with space/and:colon").as_str(), "with space/and:colon");
    }

    #[test]
    fn test_get_does_not_register() {
        assert_eq!(Keyword::get("kw-test-never-registered"), None);
        let created = Keyword::for_name("kw-test-registered-later");
        assert_eq!(Keyword::get("kw-test-registered-later"), Some(created));
    }

    #[test]
    fn test_registry_grows_monotonically() {
        let before = keyword_count();
        Keyword::for_name("kw-test-growth");
        let after_first = keyword_count();
        Keyword::for_name("kw-test-growth");
        let after_second = keyword_count();
        assert!(after_first > before);
        assert!(after_second >= after_first);
    }

    #[test]
    fn test_concurrent_first_use_yields_one_keyword() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| Keyword::for_name("kw-test-contended")))
            .collect();
        let keywords: Vec<Keyword> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread panicked"))
            .collect();
        assert!(keywords.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
