use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, info_span};

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::file::SourceFile;
use crate::generate::{GenerationContext, generate_all};
use crate::message::UserMessage;
use crate::package::{ProjectTree, SourceRoots};
use crate::shared::ClassDescriptor;
use crate::transaction::{ArtifactOutcome, Transaction};

/// Whether a [`Scaffolder`] is currently generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
}

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub class: ClassDescriptor,
    pub base_package: String,
    pub base_directory: Option<PathBuf>,
    pub dry_run: bool,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    /// The message shown once generation has started.
    pub fn message(&self) -> UserMessage {
        UserMessage::Generating {
            class_name: self.class.name.clone(),
        }
    }
}

/// Resolves an entity class and inserts its REST slice into a project tree.
///
/// ## Examples
///
/// ```no_run
/// use std::path::Path;
/// use rest_scaffold_lib::{FsProjectTree, ScaffoldConfig, Scaffolder};
///
/// let mut scaffolder = Scaffolder::new(FsProjectTree::new(), ScaffoldConfig::new());
/// let report = scaffolder.run(Some(Path::new("src/main/java/com/app/domain/Order.java")))?;
/// println!("{}", report.message());
/// # Ok::<(), rest_scaffold_lib::ScaffoldError>(())
/// ```
#[derive(Debug)]
pub struct Scaffolder<T: ProjectTree> {
    tree: T,
    config: ScaffoldConfig,
    state: GenerationState,
}

impl<T: ProjectTree> Scaffolder<T> {
    pub fn new(tree: T, config: ScaffoldConfig) -> Self {
        Self {
            tree,
            config,
            state: GenerationState::Idle,
        }
    }

    /// The current state. Generation happens inside a `&mut self` call, so
    /// between calls this is always [`GenerationState::Idle`]; each
    /// transition is emitted as a `debug!` event with a `state` field inside
    /// the `generate` span.
    pub fn state(&self) -> GenerationState {
        self.state
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn into_tree(self) -> T {
        self.tree
    }

    /// Runs the whole flow for the selected file.
    ///
    /// ## Errors
    /// - [`ScaffoldError::NoFileSelected`] when `file` is `None`
    /// - [`ScaffoldError::NoClassFound`] (or an unsupported-language error)
    ///   when no class can be resolved; nothing is generated
    /// - collision and write errors from the [`Transaction`]
    pub fn run(&mut self, file: Option<&Path>) -> Result<GenerationReport> {
        let file = file.ok_or(ScaffoldError::NoFileSelected)?;
        let source = SourceFile::open(file)?;
        self.generate(&source)
    }

    /// Generates from an already parsed source file.
    ///
    /// ## Errors
    /// Same as [`Scaffolder::run`] minus the missing-file case.
    pub fn generate(&mut self, source: &SourceFile) -> Result<GenerationReport> {
        let class = source.resolve_class(self.config.strict_types)?;

        let span = info_span!("generate", class = %class.name);
        let _entered = span.enter();

        self.set_state(GenerationState::Generating);
        let result = self.write(source, class);
        self.set_state(GenerationState::Idle);
        result
    }

    fn set_state(&mut self, state: GenerationState) {
        self.state = state;
        debug!(%state, "generation state changed");
    }

    fn write(&mut self, source: &SourceFile, class: ClassDescriptor) -> Result<GenerationReport> {
        info!("{}", UserMessage::Generating { class_name: class.name.clone() });

        let roots = match &self.config.source_roots {
            Some(roots) => roots.clone(),
            None => SourceRoots::detect(&source.file),
        };
        let context = GenerationContext::for_source_file(&source.file, &roots);
        debug!(
            base_package = %context.base_package,
            base_directory = ?context.base_directory,
            "derived generation context"
        );

        let artifacts = generate_all(&class, &context);
        let transaction = Transaction::plan(
            &self.tree,
            context.base_directory.as_deref(),
            artifacts,
            self.config.collision_policy,
        )?;

        let outcomes = if self.config.dry_run {
            transaction.preview()
        } else {
            transaction.commit(&mut self.tree)?
        };

        Ok(GenerationReport {
            class,
            base_package: context.base_package,
            base_directory: context.base_directory,
            dry_run: self.config.dry_run,
            artifacts: outcomes,
        })
    }
}
