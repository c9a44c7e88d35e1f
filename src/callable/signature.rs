//! Declared callable signatures.

use super::args::Args;
use std::collections::BTreeMap;

/// Whether a keyword argument must be supplied before invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSpec {
    /// The keyword must be present for the callable to be invoked.
    Required,
    /// The keyword may be omitted; the callable has a fallback.
    Optional,
}

/// The declared shape of a callable: minimum positional arity, whether
/// extra positional arguments are accepted, and the keyword arguments it
/// understands.
///
/// A `Signature` is purely informational. The curry engine consults it to
/// decide "is this call saturated yet"; adapters consult it when unpacking
/// an [`Args`] bundle into a concrete parameter list.
///
/// # Examples
///
/// ```rust
/// use pliers::callable::{Args, KeywordSpec, Signature};
///
/// let signature = Signature::new(2)
///     .variadic()
///     .keyword("separator", KeywordSpec::Optional);
///
/// assert!(signature.satisfied_by(&Args::positional([1, 2])));
/// assert!(!signature.satisfied_by(&Args::positional([1])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    required: usize,
    variadic: bool,
    keywords: BTreeMap<String, KeywordSpec>,
}

impl Signature {
    /// A signature with the given minimum positional arity, no extra
    /// positional arguments, and no keywords.
    pub const fn new(required: usize) -> Self {
        Self {
            required,
            variadic: false,
            keywords: BTreeMap::new(),
        }
    }

    /// Marks the callable as accepting unbounded extra positional
    /// arguments.
    #[must_use]
    pub const fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Declares one keyword argument.
    #[must_use]
    pub fn keyword(mut self, name: impl Into<String>, spec: KeywordSpec) -> Self {
        self.keywords.insert(name.into(), spec);
        self
    }

    /// The minimum required positional argument count.
    pub const fn required(&self) -> usize {
        self.required
    }

    /// Whether extra positional arguments are accepted.
    pub const fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// The declared keyword arguments.
    pub const fn keyword_specs(&self) -> &BTreeMap<String, KeywordSpec> {
        &self.keywords
    }

    /// Whether an argument bundle saturates this signature: enough
    /// positional arguments, and every required keyword present.
    pub fn satisfied_by<A>(&self, args: &Args<A>) -> bool {
        if args.positional_len() < self.required {
            return false;
        }
        self.keywords
            .iter()
            .filter(|(_, spec)| **spec == KeywordSpec::Required)
            .all(|(name, _)| args.keyword(name).is_some())
    }

    /// The signature left over once `bound` arguments are already held:
    /// positional arity shrinks by the bound count, bound keywords drop
    /// out. Used by curried wrappers to report what they still expect.
    #[must_use]
    pub fn after<A>(&self, bound: &Args<A>) -> Self {
        let keywords = self
            .keywords
            .iter()
            .filter(|(name, _)| bound.keyword(name).is_none())
            .map(|(name, spec)| (name.clone(), *spec))
            .collect();
        Self {
            required: self.required.saturating_sub(bound.positional_len()),
            variadic: self.variadic,
            keywords,
        }
    }
}
