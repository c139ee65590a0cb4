use crate::package::SourceRoots;
use crate::transaction::CollisionPolicy;

/// Configuration for a [`Scaffolder`](crate::Scaffolder) run.
///
/// ## Examples
///
/// ```
/// use rest_scaffold_lib::{CollisionPolicy, ScaffoldConfig, SourceRoots};
///
/// let config = ScaffoldConfig::new()
///     .source_roots(SourceRoots::new(["/proj/src/main/java"]))
///     .collision_policy(CollisionPolicy::Skip)
///     .dry_run(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScaffoldConfig {
    /// Source roots used to derive packages. Detected from the input file's
    /// ancestors when unset.
    pub source_roots: Option<SourceRoots>,
    /// What to do when a generated file already exists
    pub collision_policy: CollisionPolicy,
    /// Reject fields without declared type text instead of emitting `null`
    pub strict_types: bool,
    /// Render and plan without writing anything
    pub dry_run: bool,
}

impl ScaffoldConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_roots(mut self, roots: SourceRoots) -> Self {
        self.source_roots = Some(roots);
        self
    }

    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }

    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}
