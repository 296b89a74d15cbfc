use std::fmt;

/// A value that may only apply to one target architecture.
///
/// Architecture dependent keys carry the architecture as a suffix,
/// e.g. `depends_x86_64` or `sha256sums_aarch64`. An empty `arch` means
/// the value applies to every architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArchString {
    /// Architecture name, empty when the value is not architecture specific.
    pub arch: String,
    /// The raw value.
    pub value: String,
}

impl ArchString {
    /// Create a value bound to `arch`. Pass `""` for an unqualified value.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::ArchString;
    ///
    /// let dep = ArchString::new("x86_64", "lib32-glibc");
    /// assert!(dep.applies_to("x86_64"));
    /// assert!(!dep.applies_to("i686"));
    /// ```
    pub fn new(arch: impl Into<String>, value: impl Into<String>) -> Self {
        ArchString {
            arch: arch.into(),
            value: value.into(),
        }
    }

    /// Whether the value applies to all architectures.
    pub fn is_arch_independent(&self) -> bool {
        self.arch.is_empty()
    }

    /// Whether the value applies when building for `arch`.
    pub fn applies_to(&self, arch: &str) -> bool {
        self.is_arch_independent() || self.arch == arch
    }
}

impl fmt::Display for ArchString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_arch_independent() {
            f.write_str(&self.value)
        } else {
            write!(f, "{} [{}]", self.value, self.arch)
        }
    }
}

/// Split a raw key into its field name and architecture suffix.
///
/// Only the first `_` separates; anything after it is the architecture,
/// so `source_x86_64` yields `("source", "x86_64")`. The suffix is not
/// checked against any list of known architectures.
pub(crate) fn split_arch(key: &str) -> (&str, &str) {
    key.split_once('_').unwrap_or((key, ""))
}
